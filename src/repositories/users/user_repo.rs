//! # 사용자 리포지토리
//!
//! 사용자 엔티티의 데이터 액세스 경계를 정의합니다.
//! 영속성은 이 서비스의 관심사가 아니므로 트레이트 뒤로 분리되며,
//! 검증을 통과한 레코드는 저장 시점부터 영속성 협력자가 소유합니다.
//!
//! ## 계약
//!
//! - **식별자 부여**: `create`는 서버 측 고유 식별자를 부여한 레코드를 반환합니다.
//!   클라이언트가 제공한 식별자는 존재하지 않습니다.
//! - **이메일 유일성**: 동일한 이메일로 두 번째 레코드를 만들 수 없습니다.
//! - **페이지 조회**: `list`는 생성 순서대로 한 페이지와 전체 개수를 반환합니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;

/// 사용자 데이터 액세스 인터페이스
///
/// 구현체는 저장 기술(인메모리, 문서 DB 등)을 자유롭게 선택할 수 있으며,
/// 서비스 계층은 이 트레이트에만 의존합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 식별자가 부여된 레코드를 반환합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - 식별자가 부여된 저장 완료 레코드
    /// * `Err(AppError::ConflictError)` - 이메일이 이미 사용 중인 경우
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 식별자로 사용자를 조회합니다.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;

    /// 이메일 주소로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 기존 사용자 레코드를 교체합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - 갱신된 레코드
    /// * `Err(AppError::NotFound)` - 해당 식별자의 레코드가 없는 경우
    /// * `Err(AppError::ConflictError)` - 변경된 이메일이 다른 레코드와 충돌하는 경우
    async fn update(&self, user: User) -> Result<User, AppError>;

    /// 사용자를 삭제합니다. 삭제 성공 여부를 반환합니다.
    async fn delete(&self, id: &Uuid) -> Result<bool, AppError>;

    /// 생성 순서 기준 한 페이지와 전체 개수를 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `page` - 페이지 번호 (1부터 시작)
    /// * `size` - 페이지 크기
    async fn list(&self, page: u64, size: u64) -> Result<(Vec<User>, u64), AppError>;
}

/// 인메모리 사용자 리포지토리
///
/// 테스트와 로컬 실행에서 영속성 협력자를 대신하는 구현체입니다.
/// 생성 순서를 유지하며, 이메일 유일성 제약을 강제합니다.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// 빈 저장소 생성
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    fn read_store(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::DatabaseError("User store lock poisoned".to_string()))
    }

    fn write_store(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::DatabaseError("User store lock poisoned".to_string()))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.write_store()?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(
                "Email already registered".to_string(),
            ));
        }

        user.id = Some(Uuid::new_v4());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        let users = self.read_store()?;
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.read_store()?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update(&self, user: User) -> Result<User, AppError> {
        let mut users = self.write_store()?;

        if users
            .iter()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(AppError::ConflictError(
                "Email already registered".to_string(),
            ));
        }

        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        *slot = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, AppError> {
        let mut users = self.write_store()?;
        let before = users.len();

        users.retain(|u| u.id.as_ref() != Some(id));

        Ok(users.len() < before)
    }

    async fn list(&self, page: u64, size: u64) -> Result<(Vec<User>, u64), AppError> {
        let users = self.read_store()?;
        let total = users.len() as u64;

        let start = page.saturating_sub(1).saturating_mul(size);
        let items = users
            .iter()
            .skip(start as usize)
            .take(size as usize)
            .cloned()
            .collect();

        Ok((items, total))
    }
}
