//! # 사용자 프로필 관리 서비스
//!
//! 사용자 프로필의 생성, 수정, 조회, 삭제를 담당하는 핵심 비즈니스 로직을 구현합니다.
//! 독립적인 필드 검증기들을 레코드 형태별 검증 루틴으로 조합하고,
//! 닉네임 생성기와 비밀번호 해싱 협력자를 호출합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │    Creation     │  │  Partial Update │  │   User Query    │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Field Valid   │  │ • Empty Check   │  │ • By ID/Email   │  │
//! │  │ • Nickname Gen  │  │ • Field Valid   │  │ • Entity to DTO │  │
//! │  │ • Password Hash │  │ • Partial Apply │  │ • Pagination    │  │
//! │  │ • Entity Create │  │ • Role Parse    │  │ • Error Handle  │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   UserRepository (trait 경계)                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 검증 조합 원칙
//!
//! 1. **필드 독립성**: 각 필드는 자신의 검증기만으로 판정되며,
//!    한 필드의 실패가 다른 필드의 검증을 막지 않습니다.
//! 2. **전체 집계**: 한 번의 검증 패스에서 발생한 모든 필드 실패가
//!    하나의 구조화된 에러로 모여 반환됩니다.
//! 3. **빈 수정 선차단**: 수정 요청에 필드가 하나도 없으면
//!    필드 검증 이전에 레코드 수준 에러로 즉시 실패합니다.
//! 4. **부분 적용 금지**: 검증에 실패한 요청은 어떤 필드도 반영하지 않습니다.
//!
//! ## 에러 처리 전략
//!
//! 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다:
//!
//! - **FieldValidationError**: 필드별 검증 실패 집계
//! - **EmptyUpdateError**: 빈 수정 요청 (레코드 수준)
//! - **ConflictError**: 이메일 중복 등 저장소 제약 위반
//! - **NotFound**: 리소스 존재하지 않음
//! - **InternalError**: 해싱 실패 등 시스템 레벨 오류

use std::sync::Arc;

use bcrypt::hash;
use uuid::Uuid;
use validator::Validate;

use crate::config::PasswordConfig;
use crate::core::errors::AppError;
use crate::domain::{
    dto::users::{
        request::{CreateUserRequest, UpdateUserRequest},
        response::{UserListResponse, UserResponse},
    },
    entities::users::user::User,
    models::UserRole,
};
use crate::repositories::users::user_repo::UserRepository;
use crate::utils::nickname_gen::{resolve_nickname, NicknameGenerator};

/// 사용자 프로필 관리 비즈니스 로직 서비스
///
/// 드래프트를 받아 검증하고, 성공 시 정규화된 레코드를 영속성 계층에 넘기며,
/// 외부 표현(`UserResponse`)을 돌려줍니다. 검증은 동기적이고 상태가 없으므로
/// 요청 간 잠금 없이 동시에 실행해도 안전합니다.
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<dyn UserRepository>,

    /// 닉네임 생성 협력자
    ///
    /// 생성 요청에 닉네임이 없을 때 정확히 한 번 호출됩니다.
    nickname_gen: Arc<dyn NicknameGenerator>,
}

impl UserService {
    /// 새 서비스 인스턴스 생성
    pub fn new(user_repo: Arc<dyn UserRepository>, nickname_gen: Arc<dyn NicknameGenerator>) -> Self {
        Self {
            user_repo,
            nickname_gen,
        }
    }

    /// 새 사용자 프로필 생성
    ///
    /// 드래프트 전체를 검증한 뒤 닉네임을 결정하고, 비밀번호를 해시하여
    /// 정규화된 레코드를 저장합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. **필드 검증**: 모든 필드 검증기를 실행하고 실패를 집계
    /// 2. **닉네임 결정**: 미입력 시 생성기 호출 (생성값은 재검증하지 않음)
    /// 3. **비밀번호 해싱**: 검증을 통과한 평문만 해싱 협력자에게 전달
    /// 4. **영구 저장**: 리포지토리가 식별자를 부여
    /// 5. **응답 생성**: 민감 정보를 제거한 외부 표현 반환
    ///
    /// # 인자
    ///
    /// * `request` - 사용자 생성 드래프트
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자의 외부 표현
    /// * `Err(AppError::FieldValidationError)` - 하나 이상의 필드 검증 실패
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        let start_time = std::time::Instant::now();

        request.validate()?;

        let CreateUserRequest {
            email,
            nickname,
            first_name,
            last_name,
            bio,
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
            role,
            password,
        } = request;

        let email = email.ok_or_else(|| AppError::ValidationError("Email is required".to_string()))?;
        let password =
            password.ok_or_else(|| AppError::ValidationError("Password is required".to_string()))?;
        let role = role
            .ok_or_else(|| AppError::ValidationError("Role is required".to_string()))
            .and_then(|r| UserRole::from_str(&r).map_err(AppError::ValidationError))?;

        let nickname = resolve_nickname(nickname, self.nickname_gen.as_ref())?;

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let mut user = User::new(email, nickname, role, password_hash);
        user.first_name = first_name;
        user.last_name = last_name;
        user.bio = bio;
        user.profile_picture_url = profile_picture_url;
        user.linkedin_profile_url = linkedin_profile_url;
        user.github_profile_url = github_profile_url;

        let created = self.user_repo.create(user).await?;

        log::info!(
            "User created: {} ({:?}, took {:?})",
            created.email,
            created.id_string(),
            start_time.elapsed()
        );

        Ok(UserResponse::from(created))
    }

    /// 사용자 프로필 부분 수정
    ///
    /// 존재하는 필드만 검증하여 반영하고, 부재한 필드는 기존 값을 유지합니다.
    /// 모든 필드가 부재인 요청은 필드 검증 없이 레코드 수준 에러로 거부됩니다.
    ///
    /// # 인자
    ///
    /// * `id` - 수정할 사용자의 식별자
    /// * `request` - 부분 수정 드래프트
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 수정된 사용자의 외부 표현
    /// * `Err(AppError::EmptyUpdateError)` - 빈 수정 요청
    /// * `Err(AppError::FieldValidationError)` - 존재하는 필드의 검증 실패
    /// * `Err(AppError::NotFound)` - 해당 식별자의 사용자가 없는 경우
    pub async fn update_user(
        &self,
        id: &Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate_update()?;

        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let UpdateUserRequest {
            email,
            nickname,
            first_name,
            last_name,
            bio,
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
            role,
        } = request;

        if let Some(email) = email {
            user.email = email;
        }
        if let Some(nickname) = nickname {
            user.nickname = nickname;
        }
        if let Some(first_name) = first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = last_name {
            user.last_name = Some(last_name);
        }
        if let Some(bio) = bio {
            user.bio = Some(bio);
        }
        if let Some(url) = profile_picture_url {
            user.profile_picture_url = Some(url);
        }
        if let Some(url) = linkedin_profile_url {
            user.linkedin_profile_url = Some(url);
        }
        if let Some(url) = github_profile_url {
            user.github_profile_url = Some(url);
        }
        if let Some(role) = role {
            user.role = UserRole::from_str(&role).map_err(AppError::ValidationError)?;
        }
        user.touch();

        let updated = self.user_repo.update(user).await?;

        log::info!("User updated: {}", updated.email);

        Ok(UserResponse::from(updated))
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 DTO (민감 정보 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 DTO
    /// * `Err(AppError::NotFound)` - 해당 이메일의 사용자가 존재하지 않음
    pub async fn get_user_by_email(&self, email: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 목록 페이지 조회
    ///
    /// 페이지 번호는 1 미만이면 1로, 페이지 크기는 1-100 범위로 보정됩니다.
    pub async fn list_users(&self, page: u64, size: u64) -> Result<UserListResponse, AppError> {
        let page = page.max(1);
        let size = size.clamp(1, 100);

        let (users, total) = self.user_repo.list(page, size).await?;
        let items = users.into_iter().map(UserResponse::from).collect();

        Ok(UserListResponse::new(items, total, page, size))
    }

    /// 사용자 계정 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 삭제 성공
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete_user(&self, id: &Uuid) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        log::info!("User deleted: {}", id);

        Ok(())
    }
}
