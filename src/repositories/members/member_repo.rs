use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use crate::domain::entities::Member;
use crate::errors::{AppError, AppResult};

/// username을 키로 회원을 보관하는 저장소
#[derive(Default)]
pub struct MemberRepository {
    members: RwLock<HashMap<String, Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_username(&self, username: &str) -> AppResult<Option<Member>> {
        let members = self
            .members
            .read()
            .map_err(|_| AppError::InternalError("회원 저장소 잠금 실패".to_string()))?;
        Ok(members.get(username).cloned())
    }

    pub fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.find_by_username(username)?.is_some())
    }

    /// 새 회원을 저장합니다. 같은 username이 있으면 `AlreadyExistMember`입니다.
    pub fn insert(&self, member: Member) -> AppResult<()> {
        let mut members = self
            .members
            .write()
            .map_err(|_| AppError::InternalError("회원 저장소 잠금 실패".to_string()))?;

        match members.entry(member.username.clone()) {
            Entry::Occupied(entry) => Err(AppError::AlreadyExistMember(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(member);
                Ok(())
            }
        }
    }
}
