//! 사용자 수정 요청 DTO
//!
//! 기존 사용자 프로필의 부분 수정을 위한 드래프트 데이터 구조를 정의합니다.
//! 모든 필드가 선택이지만, 최소 한 개의 필드는 반드시 존재해야 합니다.
//!
//! 빈 수정 요청은 잘못된 필드 값과는 구조적으로 다른 에러이므로,
//! 필드별 검증이 실행되기 전에 레코드 수준 에러로 먼저 반환됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::validators::{
    validate_generic_url, validate_github_url, validate_linkedin_url, validate_nickname,
    validate_role,
};
use crate::utils::string_utils::deserialize_optional_string;

/// 기존 사용자 프로필의 부분 수정을 위한 요청 DTO
///
/// 존재하는 필드만 검증 및 반영되며, 부재한 필드는 기존 값이 유지됩니다.
/// 비밀번호는 이 경로로 수정할 수 없습니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "bio": "Now leading the platform team.",
///   "github_profile_url": "https://github.com/johndoe"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 사용자 이메일 주소
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "Invalid email address format"))]
    pub email: Option<String>,

    /// 닉네임 (3자 이상, 영문/숫자/언더스코어/하이픈)
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

    /// 사용자 역할 (문자열 형태, 선택)
    ///
    /// 역할 단독 수정도 다른 프로필 필드와 동일한 부분 수정 경로를 사용합니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

impl UpdateUserRequest {
    /// 모든 필드가 부재인지 확인합니다.
    ///
    /// 역할 필드도 다른 프로필 필드와 동일하게 존재 여부 판정에 포함됩니다.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.nickname.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.bio.is_none()
            && self.profile_picture_url.is_none()
            && self.linkedin_profile_url.is_none()
            && self.github_profile_url.is_none()
            && self.role.is_none()
    }

    /// 수정 요청 전체를 검증합니다.
    ///
    /// 존재 여부 검사가 필드별 검증보다 먼저 실행됩니다.
    /// 모든 필드가 부재이면 필드 검증 없이 레코드 수준 에러로 즉시 반환하고,
    /// 그렇지 않으면 존재하는 필드들의 검증 실패를 집계하여 반환합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 검증 통과
    /// * `Err(AppError::EmptyUpdateError)` - 모든 필드가 부재인 경우
    /// * `Err(AppError::FieldValidationError)` - 하나 이상의 필드가 규칙을 위반한 경우
    pub fn validate_update(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::EmptyUpdateError(
                "At least one field must be provided for update".to_string(),
            ));
        }

        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_is_rejected_before_field_validation() {
        let request = UpdateUserRequest::default();

        match request.validate_update().unwrap_err() {
            AppError::EmptyUpdateError(message) => {
                assert_eq!(message, "At least one field must be provided for update");
            }
            other => panic!("Expected EmptyUpdateError, got: {:?}", other),
        }
    }

    #[test]
    fn test_blank_strings_count_as_absent() {
        // 공백만 있는 필드는 역직렬화 시점에 부재로 정규화된다
        let json = r#"{"bio": "   ", "nickname": ""}"#;
        let request: UpdateUserRequest = serde_json::from_str(json).unwrap();

        assert!(request.is_empty());
        assert!(matches!(
            request.validate_update(),
            Err(AppError::EmptyUpdateError(_))
        ));
    }

    #[test]
    fn test_single_field_update_is_accepted() {
        let request = UpdateUserRequest {
            bio: Some("Now leading the platform team.".to_string()),
            ..Default::default()
        };

        assert!(request.validate_update().is_ok());
    }

    #[test]
    fn test_role_only_update_is_accepted() {
        let request = UpdateUserRequest {
            role: Some("MODERATOR".to_string()),
            ..Default::default()
        };

        assert!(request.validate_update().is_ok());
    }

    #[test]
    fn test_invalid_present_fields_are_aggregated() {
        let request = UpdateUserRequest {
            email: Some("not-an-email".to_string()),
            linkedin_profile_url: Some("https://linkedin.com/john-doe".to_string()),
            ..Default::default()
        };

        match request.validate_update().unwrap_err() {
            AppError::FieldValidationError(errors) => {
                let fields = errors.field_errors();
                assert!(fields.contains_key("email"));
                assert!(fields.contains_key("linkedin_profile_url"));
            }
            other => panic!("Expected FieldValidationError, got: {:?}", other),
        }
    }

    #[test]
    fn test_absent_fields_are_not_validated() {
        // 존재하는 필드만 검증 대상이다
        let request = UpdateUserRequest {
            bio: Some("short bio".to_string()),
            ..Default::default()
        };

        let result = request.validate_update();
        assert!(result.is_ok());
    }

    #[test]
    fn test_unrecognized_role_is_rejected() {
        let request = UpdateUserRequest {
            role: Some("OVERLORD".to_string()),
            ..Default::default()
        };

        match request.validate_update().unwrap_err() {
            AppError::FieldValidationError(errors) => {
                assert!(errors.field_errors().contains_key("role"));
            }
            other => panic!("Expected FieldValidationError, got: {:?}", other),
        }
    }
}
