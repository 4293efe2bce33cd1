//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 프로필 생성을 위한 드래프트 데이터 구조를 정의합니다.
//! 이메일, 비밀번호, 역할은 필수이며 나머지 프로필 필드는 선택입니다.
//!
//! 필수 필드도 `Option`으로 선언하고 `required` 규칙으로 검사합니다.
//! 역직렬화 단계에서 실패시키지 않기 때문에, 여러 필수 필드가 동시에
//! 누락된 경우에도 모든 위반 사항이 하나의 검증 결과로 집계됩니다.
//!
//! 선택적 문자열 필드는 역직렬화 시점에 정규화됩니다.
//! 앞뒤 공백이 제거되고, 빈 문자열은 "부재"로 처리됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::validators::{
    validate_generic_url, validate_github_url, validate_linkedin_url, validate_nickname,
    validate_password, validate_role,
};
use crate::utils::string_utils::deserialize_optional_string;

/// 새로운 사용자 프로필 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 수행합니다. 검증은 필드별로 독립적으로
/// 실행되며, 실패한 모든 필드가 한 번에 보고됩니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "john.doe@example.com",
///   "nickname": "john_doe123",
///   "first_name": "John",
///   "last_name": "Doe",
///   "bio": "Experienced software developer specializing in web applications.",
///   "profile_picture_url": "https://example.com/profiles/john.jpg",
///   "linkedin_profile_url": "https://linkedin.com/in/johndoe",
///   "github_profile_url": "https://github.com/johndoe",
///   "role": "AUTHENTICATED",
///   "password": "Secure1234"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email address format")
    )]
    pub email: Option<String>,

    /// 닉네임 (3자 이상, 영문/숫자/언더스코어/하이픈)
    ///
    /// 입력되지 않으면 닉네임 생성기가 기본값을 만들어 채웁니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_nickname"))]
    pub nickname: Option<String>,

    /// 이름
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,

    /// 성
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,

    /// 자기소개
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,

    /// 프로필 사진 URL
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_generic_url"))]
    pub profile_picture_url: Option<String>,

    /// LinkedIn 프로필 URL
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_linkedin_url"))]
    pub linkedin_profile_url: Option<String>,

    /// GitHub 프로필 URL
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_github_url"))]
    pub github_profile_url: Option<String>,

    /// 사용자 역할 (필수)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(
        required(message = "Role is required"),
        custom(function = "validate_role")
    )]
    pub role: Option<String>,

    /// 계정 비밀번호 (필수, 8자 이상, 대문자/소문자/숫자 포함)
    ///
    /// 검증 통과 후 해싱 협력자에게 전달되며, 외부 응답에는 포함되지 않습니다.
    #[validate(
        required(message = "Password is required"),
        custom(function = "validate_password")
    )]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            email: Some("john.doe@example.com".to_string()),
            nickname: Some("john_doe123".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            bio: Some("Experienced software developer.".to_string()),
            profile_picture_url: Some("https://example.com/profiles/john.jpg".to_string()),
            linkedin_profile_url: Some("https://linkedin.com/in/johndoe".to_string()),
            github_profile_url: Some("https://github.com/johndoe".to_string()),
            role: Some("AUTHENTICATED".to_string()),
            password: Some("Secure1234".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let request = CreateUserRequest {
            email: Some("john.doe@example.com".to_string()),
            role: Some("AUTHENTICATED".to_string()),
            password: Some("Secure1234".to_string()),
            ..Default::default()
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_mandatory_fields_are_aggregated() {
        // 이메일, 역할, 비밀번호가 동시에 누락되면 세 필드 모두 보고된다
        let request = CreateUserRequest::default();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("role"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_multiple_invalid_fields_are_aggregated() {
        let request = CreateUserRequest {
            email: Some("not-an-email".to_string()),
            nickname: Some("a!".to_string()),
            github_profile_url: Some("https://github.com/alice/repo".to_string()),
            role: Some("SUPERUSER".to_string()),
            password: Some("short".to_string()),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("nickname"));
        assert!(fields.contains_key("github_profile_url"));
        assert!(fields.contains_key("role"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_invalid_url_fields_are_field_scoped() {
        let mut request = valid_request();
        request.profile_picture_url = Some("not a url".to_string());

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("profile_picture_url"));
        assert!(!fields.contains_key("linkedin_profile_url"));
        assert!(!fields.contains_key("github_profile_url"));
    }

    #[test]
    fn test_blank_optional_fields_deserialize_as_absent() {
        let json = r#"{
            "email": "john.doe@example.com",
            "nickname": "   ",
            "bio": "",
            "role": "AUTHENTICATED",
            "password": "Secure1234"
        }"#;

        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.nickname, None);
        assert_eq!(request.bio, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_email_is_trimmed_on_deserialization() {
        let json = r#"{
            "email": "  john.doe@example.com  ",
            "role": "ADMIN",
            "password": "Secure1234"
        }"#;

        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email.as_deref(), Some("john.doe@example.com"));
        assert!(request.validate().is_ok());
    }
}
