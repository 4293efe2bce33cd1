//! 사용자 역할 모델
//!
//! 시스템이 인식하는 사용자 역할의 닫힌 집합을 정의합니다.
//! 생성 요청에서는 필수이며, 수정 요청에서는 문자열 형태로 선택적으로 전달됩니다.

use serde::{Deserialize, Serialize};

/// 사용자 역할을 나타내는 열거형
///
/// 역할은 대문자 문자열(`"AUTHENTICATED"` 등)로 직렬화되며,
/// 파싱은 대소문자를 구분하지 않습니다.
///
/// ## 직렬화 지원
///
/// `serde`를 통해 JSON 직렬화/역직렬화를 지원하므로,
/// API 응답이나 데이터베이스 저장에 사용할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// 익명 사용자 - 계정 확인 전 상태
    Anonymous,

    /// 인증된 일반 사용자
    Authenticated,

    /// 중재자 - 콘텐츠 관리 권한 보유
    Moderator,

    /// 관리자 - 전체 시스템 관리 권한 보유
    Admin,
}

impl UserRole {
    /// 문자열에서 UserRole을 생성합니다.
    ///
    /// API 요청에서 문자열로 전달된 역할 이름을 적절한 열거형 값으로 변환합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 역할 이름 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// * `Ok(UserRole)` - 유효한 역할인 경우
    /// * `Err(String)` - 인식할 수 없는 역할인 경우
    ///
    /// # 지원되는 값
    ///
    /// - `"ANONYMOUS"` → `UserRole::Anonymous`
    /// - `"AUTHENTICATED"` → `UserRole::Authenticated`
    /// - `"MODERATOR"` → `UserRole::Moderator`
    /// - `"ADMIN"` → `UserRole::Admin`
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "anonymous" => Ok(UserRole::Anonymous),
            "authenticated" => Ok(UserRole::Authenticated),
            "moderator" => Ok(UserRole::Moderator),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Unrecognized role: {}", s)),
        }
    }

    /// UserRole을 문자열로 변환합니다.
    ///
    /// # Returns
    ///
    /// 해당 역할의 대문자 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Anonymous => "ANONYMOUS",
            UserRole::Authenticated => "AUTHENTICATED",
            UserRole::Moderator => "MODERATOR",
            UserRole::Admin => "ADMIN",
        }
    }
}
