//! To-Do 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! JWT 설정은 필수이며, 누락되거나 잘못되면 서버는 시작되지 않습니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use todo_auth_service::caching::{MemoryRevocationStore, RedisClient, RevocationStore};
use todo_auth_service::config::{
    Environment, JwtConfig, PasswordConfig, RedisConfig, RevocationStoreKind, ServerConfig,
};
use todo_auth_service::repositories::members::MemberRepository;
use todo_auth_service::repositories::tokens::TokenRepository;
use todo_auth_service::routes::configure_all_routes;
use todo_auth_service::services::auth::{AuthService, TokenCodec};
use todo_auth_service::services::members::MemberService;
use todo_auth_service::utils::clock::{Clock, SystemClock};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => warn!("환경 설정 파일 로드 실패: {}", e),
    }

    info!("🚀 To-Do 인증 서비스 시작중... (환경: {:?})", Environment::current());

    let jwt_config = JwtConfig::from_env().map_err(|e| {
        error!("❌ JWT 설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!("🔑 JWT 설정 로드됨: {:?}", jwt_config);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = initialize_revocation_store(clock.clone()).await?;

    let codec = Arc::new(TokenCodec::new(jwt_config, clock));
    let members = Arc::new(
        MemberService::new(Arc::new(MemberRepository::new()), PasswordConfig::bcrypt_cost())
            .map_err(|e| io::Error::other(e.to_string()))?,
    );
    let auth = Arc::new(AuthService::new(codec, TokenRepository::new(store), members.clone()));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::from(auth), web::Data::from(members)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    auth: web::Data<AuthService>,
    members: web::Data<MemberService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .app_data(auth.clone())
            .app_data(members.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거가 초기화되기 전이므로 결과는 호출자가 기록합니다.
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 폐기 저장소를 초기화합니다
///
/// `REVOCATION_STORE=memory`이면 프로세스 메모리 저장소를, 그 외에는 Redis를 사용합니다.
///
/// # Errors
///
/// * Redis 연결 실패
async fn initialize_revocation_store(clock: Arc<dyn Clock>) -> io::Result<Arc<dyn RevocationStore>> {
    match RedisConfig::store_kind() {
        RevocationStoreKind::Memory => {
            warn!("⚠️ 메모리 폐기 저장소 사용: 인스턴스 간에 공유되지 않습니다");
            Ok(Arc::new(MemoryRevocationStore::new(clock)))
        }
        RevocationStoreKind::Redis => {
            info!("📡 Redis 연결 중...");
            let client = RedisClient::new(&RedisConfig::url()).await.map_err(|e| {
                error!("❌ Redis 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;
            Ok(Arc::new(client))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 액세스 토큰이 응답 헤더로 전달되므로 `Authorization`을 노출합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::AUTHORIZATION])
        // RefreshToken 쿠키
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
