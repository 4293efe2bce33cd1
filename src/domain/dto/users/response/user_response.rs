//! 사용자 응답 DTO
//!
//! 클라이언트에게 반환되는 외부 표현을 정의합니다.
//! 비밀번호 관련 필드는 타입 수준에서 존재하지 않으므로
//! 응답에 노출될 수 없습니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::user::User;
use crate::domain::models::UserRole;

/// 사용자 응답 DTO
///
/// 저장된 레코드로부터 응답 시마다 새로 구성되는 읽기 전용 표현입니다.
/// 식별자는 서버가 부여한 값이며, `is_professional` 플래그는
/// 외부 출처가 결정합니다(기본값 false).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub nickname: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_profile_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_profile_url: Option<String>,

    pub role: UserRole,

    /// 전문가 프로필 여부 (편의 필드)
    pub is_professional: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            nickname,
            first_name,
            last_name,
            bio,
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
            role,
            is_professional,
            ..
        } = user;

        Self {
            id: id.unwrap_or_default(),
            email,
            nickname,
            first_name,
            last_name,
            bio,
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
            role,
            is_professional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> User {
        let mut user = User::new(
            "john.doe@example.com".to_string(),
            "john_doe".to_string(),
            UserRole::Authenticated,
            "hashed-password".to_string(),
        );
        user.id = Some(Uuid::new_v4());
        user.first_name = Some("John".to_string());
        user.github_profile_url = Some("https://github.com/johndoe".to_string());
        user
    }

    #[test]
    fn test_from_user_copies_profile_fields() {
        let user = stored_user();
        let id = user.id.unwrap();

        let response = UserResponse::from(user);

        assert_eq!(response.id, id);
        assert_eq!(response.email, "john.doe@example.com");
        assert_eq!(response.nickname, "john_doe");
        assert_eq!(response.first_name.as_deref(), Some("John"));
        assert_eq!(
            response.github_profile_url.as_deref(),
            Some("https://github.com/johndoe")
        );
        assert_eq!(response.role, UserRole::Authenticated);
        assert!(!response.is_professional);
    }

    #[test]
    fn test_response_never_contains_password() {
        let response = UserResponse::from(stored_user());
        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
    }

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let mut user = stored_user();
        user.first_name = None;
        user.github_profile_url = None;

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("first_name"));
        assert!(!object.contains_key("github_profile_url"));
        assert!(object.contains_key("email"));
    }
}
