//! User Entity Implementation
//!
//! 사용자 프로필 엔티티의 핵심 구현체입니다.
//! 검증을 통과해 정규화된 프로필 레코드를 표현하며,
//! 드래프트가 검증에 성공했을 때 한 번만 생성됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::UserRole;

/// 사용자 프로필 엔티티
///
/// 시스템의 모든 사용자 프로필을 표현하는 핵심 도메인 엔티티입니다.
/// 모든 필드는 필드 검증기를 통과한 정규화된 값만 담습니다.
///
/// - 식별자는 영속성 계층이 저장 시점에 부여합니다. 클라이언트가 제공한
///   식별자는 존재하지 않습니다.
/// - 비밀번호는 해시 형태로만 보관되며, 외부 응답에는 포함되지 않습니다.
/// - `is_professional` 플래그의 권위 있는 출처는 외부 시스템이며,
///   생성 시점에는 false로 초기화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 서버가 부여한 고유 식별자 (저장 전에는 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 닉네임 - 생성 시 입력되지 않으면 자동 생성되므로 항상 존재
    pub nickname: String,
    /// 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// 성
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// 자기소개
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// 프로필 사진 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    /// LinkedIn 프로필 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_profile_url: Option<String>,
    /// GitHub 프로필 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_profile_url: Option<String>,
    /// 사용자 역할
    pub role: UserRole,
    /// 해시된 비밀번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 전문가 프로필 여부 (권위 있는 출처는 외부, 기본값 false)
    pub is_professional: bool,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 검증을 통과한 필수 필드로 새 사용자 프로필을 생성합니다.
    ///
    /// 선택적 프로필 필드는 None으로 초기화되며, 호출자가 검증된 값을
    /// 개별적으로 채웁니다. 식별자는 저장 시점에 부여됩니다.
    pub fn new(email: String, nickname: String, role: UserRole, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            email,
            nickname,
            first_name: None,
            last_name: None,
            bio: None,
            profile_picture_url: None,
            linkedin_profile_url: None,
            github_profile_url: None,
            role,
            password_hash: Some(password_hash),
            is_professional: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    /// 수정 시간을 현재 시각으로 갱신합니다.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "john.doe@example.com".to_string(),
            "john_doe".to_string(),
            UserRole::Authenticated,
            "hashed-password".to_string(),
        );

        assert!(user.id.is_none());
        assert_eq!(user.email, "john.doe@example.com");
        assert_eq!(user.nickname, "john_doe");
        assert_eq!(user.role, UserRole::Authenticated);
        assert_eq!(user.password_hash.as_deref(), Some("hashed-password"));
        assert!(!user.is_professional);
        assert!(user.first_name.is_none());
        assert!(user.bio.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_string() {
        let mut user = User::new(
            "a@example.com".to_string(),
            "abc".to_string(),
            UserRole::Anonymous,
            "hash".to_string(),
        );
        assert_eq!(user.id_string(), None);

        let id = Uuid::new_v4();
        user.id = Some(id);
        assert_eq!(user.id_string(), Some(id.to_string()));
    }

    #[test]
    fn test_touch_updates_timestamp() {
        let mut user = User::new(
            "a@example.com".to_string(),
            "abc".to_string(),
            UserRole::Admin,
            "hash".to_string(),
        );
        let before = user.updated_at;
        user.touch();
        assert!(user.updated_at >= before);
    }
}
