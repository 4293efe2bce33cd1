//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 검증 실패는 불리언이나 단일 메시지가 아니라 필드 단위로 집계된
//! 구조화 데이터로 전달됩니다. 요청 계층은 이를 그대로 직렬화하여
//! 클라이언트가 모든 위반 사항을 한 번에 렌더링할 수 있게 합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! fn find_user(id: &str) -> Result<User, AppError> {
//!     repo.find(id)
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::dto::users::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 단일 메시지 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드별로 집계된 검증 실패 (400 Bad Request)
    ///
    /// 한 번의 검증 패스에서 발생한 모든 필드 에러를 담습니다.
    /// 응답 본문의 `details`에 필드명 → 메시지 목록 맵으로 직렬화됩니다.
    #[error("Invalid input data")]
    FieldValidationError(#[from] ValidationErrors),

    /// 수정 요청에 필드가 하나도 없는 경우 (400 Bad Request)
    ///
    /// 특정 필드에 귀속되지 않는 레코드 수준 에러이며,
    /// 필드별 검증이 실행되기 전에 반환됩니다.
    #[error("{0}")]
    EmptyUpdateError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 저장소 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 협력자(닉네임 생성기 등) 호출 실패 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 필드별 검증 실패는 `details`에 필드 단위 메시지 맵을 포함합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_)
            | AppError::FieldValidationError(_)
            | AppError::EmptyUpdateError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match self {
            AppError::FieldValidationError(errors) => actix_web::HttpResponse::build(status)
                .json(serde_json::json!({
                    "error": self.to_string(),
                    "details": field_error_details(errors),
                })),
            _ => actix_web::HttpResponse::build(status)
                .json(ErrorResponse::new(self.to_string())),
        }
    }
}

/// 필드별 검증 실패를 필드명 → 메시지 목록 맵으로 직렬화합니다.
///
/// 메시지가 지정되지 않은 검증 규칙은 규칙 코드를 그대로 사용합니다.
pub fn field_error_details(errors: &ValidationErrors) -> serde_json::Value {
    let mut details = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::Value::from(messages));
    }

    serde_json::Value::Object(details)
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::ValidationError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_update_error_response() {
        let error =
            AppError::EmptyUpdateError("At least one field must be provided for update".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            error.to_string(),
            "At least one field must be provided for update"
        );
    }

    #[test]
    fn test_field_validation_error_response() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "password",
            ValidationError::new("password_too_short")
                .with_message("Password must be at least 8 characters.".into()),
        );
        errors.add(
            "email",
            ValidationError::new("email").with_message("Invalid email address format".into()),
        );

        let error = AppError::FieldValidationError(errors);
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_error_details_collects_all_messages() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "nickname",
            ValidationError::new("nickname_too_short")
                .with_message("Nickname must be at least 3 characters.".into()),
        );
        errors.add(
            "nickname",
            ValidationError::new("invalid_nickname"),
        );

        let details = field_error_details(&errors);
        let messages = details["nickname"].as_array().unwrap();

        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&serde_json::Value::from(
            "Nickname must be at least 3 characters."
        )));
        // 메시지가 없는 규칙은 코드로 대체된다
        assert!(messages.contains(&serde_json::Value::from("invalid_nickname")));
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email already registered".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
