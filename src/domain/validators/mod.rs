//! # 필드 검증기 모듈
//!
//! 사용자 프로필 필드에 대한 재사용 가능한 검증 함수들을 정의합니다.
//! 각 함수는 입력 문자열에 대한 순수 함수이며, 레코드 형태와 무관하게
//! 독립적으로 테스트할 수 있습니다. 생성/수정 요청 DTO가
//! `#[validate(custom(...))]` 속성으로 동일한 함수를 참조하여 조합합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `profile_picture_url` | `http(s)` 스킴, 공백 없는 일반 URL 형식 |
//! | `github_profile_url` | `github.com/<username>` 단일 경로 세그먼트 |
//! | `linkedin_profile_url` | `linkedin.com/in/<username>` 경로 필수 |
//! | `password` | 8자 이상, 대문자/소문자/숫자 각 1개 이상 |
//! | `nickname` | 3자 이상, 영문/숫자/언더스코어/하이픈만 허용 |
//! | `role` | 인식 가능한 사용자 역할 |
//!
//! 선택 필드의 부재는 항상 유효합니다. DTO 필드가 `Option`으로 선언되어
//! 값이 없으면 검증기 자체가 호출되지 않습니다.
//!
//! ## 에러 메시지 규약
//!
//! 비밀번호 검증은 길이 → 대문자 → 소문자 → 숫자의 고정된 순서로 진행되며,
//! 처음 위반된 규칙의 메시지가 반환됩니다. 이 순서는 클라이언트가
//! 관찰 가능한 계약이므로 변경하면 안 됩니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::domain::models::UserRole;

/// 일반 URL 패턴: `http(s)` 스킴, 공백 없는 호스트로 시작
static GENERIC_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("GENERIC_URL_REGEX is a valid pattern")
});

/// GitHub 프로필 URL 패턴: 사용자명 단일 경로 세그먼트, 끝 슬래시 허용
static GITHUB_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:www\.)?github\.com/[A-Za-z0-9_-]+/?$")
        .expect("GITHUB_URL_REGEX is a valid pattern")
});

/// LinkedIn 프로필 URL 패턴: `/in/` 경로 접두사 필수
static LINKEDIN_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:www\.)?linkedin\.com/in/[A-Za-z0-9_%-]+/?$")
        .expect("LINKEDIN_URL_REGEX is a valid pattern")
});

/// 닉네임 패턴: 영문, 숫자, 언더스코어, 하이픈만 허용
static NICKNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w-]+$").expect("NICKNAME_REGEX is a valid pattern"));

/// 닉네임 최소 길이
const MIN_NICKNAME_LENGTH: usize = 3;

/// 비밀번호 최소 길이
const MIN_PASSWORD_LENGTH: usize = 8;

/// 일반 URL 형식 검증 (프로필 사진 URL 등)
///
/// 형식만 확인하며, 실제 도달 가능 여부는 검사하지 않습니다.
///
/// # Arguments
///
/// * `url` - 검증할 URL 문자열
///
/// # Returns
///
/// * `Ok(())` - URL 형식이 유효한 경우
/// * `Err(ValidationError)` - 스킴이 없거나 공백이 포함된 경우
pub fn validate_generic_url(url: &str) -> Result<(), ValidationError> {
    if !GENERIC_URL_REGEX.is_match(url) {
        return Err(ValidationError::new("invalid_url")
            .with_message("Invalid URL format".into()));
    }
    Ok(())
}

/// GitHub 프로필 URL 검증
///
/// `https://github.com/<username>` 형식만 허용합니다.
/// `www.` 접두사와 끝 슬래시는 선택이며, 추가 경로 세그먼트는 거부됩니다.
pub fn validate_github_url(url: &str) -> Result<(), ValidationError> {
    if !GITHUB_URL_REGEX.is_match(url) {
        return Err(ValidationError::new("invalid_github_url").with_message(
            "Invalid GitHub profile URL. The correct format is: https://github.com/<username>."
                .into(),
        ));
    }
    Ok(())
}

/// LinkedIn 프로필 URL 검증
///
/// `https://www.linkedin.com/in/<username>` 형식만 허용합니다.
/// `/in/` 경로 접두사가 반드시 포함되어야 합니다.
pub fn validate_linkedin_url(url: &str) -> Result<(), ValidationError> {
    if !LINKEDIN_URL_REGEX.is_match(url) {
        return Err(ValidationError::new("invalid_linkedin_url").with_message(
            "Invalid LinkedIn profile URL. The correct format is: https://www.linkedin.com/in/<username>."
                .into(),
        ));
    }
    Ok(())
}

/// 비밀번호 보안 강도 검증
///
/// 길이 → 대문자 → 소문자 → 숫자의 고정된 순서로 검사하며,
/// 처음 위반된 규칙 하나만 보고합니다.
///
/// # Arguments
///
/// * `password` - 검증할 비밀번호 문자열
///
/// # Returns
///
/// * `Ok(())` - 모든 요구사항을 만족하는 경우
/// * `Err(ValidationError)` - 처음 위반된 규칙에 해당하는 에러
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new("password_too_short")
            .with_message("Password must be at least 8 characters.".into()));
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(ValidationError::new("password_no_uppercase")
            .with_message("Password must contain at least one uppercase letter.".into()));
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(ValidationError::new("password_no_lowercase")
            .with_message("Password must contain at least one lowercase letter.".into()));
    }

    if !password.chars().any(|c| c.is_digit(10)) {
        return Err(ValidationError::new("password_no_digit")
            .with_message("Password must contain at least one digit.".into()));
    }

    Ok(())
}

/// 닉네임 형식 검증
///
/// 3자 이상, 영문/숫자/언더스코어/하이픈만 허용합니다.
/// 공백이나 기타 문장 부호는 사용할 수 없습니다.
pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if nickname.chars().count() < MIN_NICKNAME_LENGTH {
        return Err(ValidationError::new("nickname_too_short")
            .with_message("Nickname must be at least 3 characters.".into()));
    }

    if !NICKNAME_REGEX.is_match(nickname) {
        return Err(ValidationError::new("invalid_nickname").with_message(
            "Nickname may only contain letters, numbers, underscores, and hyphens.".into(),
        ));
    }

    Ok(())
}

/// 사용자 역할 검증
///
/// 닫힌 역할 집합에 속하는 값인지 확인합니다. 대소문자는 구분하지 않습니다.
pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    if UserRole::from_str(role).is_err() {
        return Err(ValidationError::new("unrecognized_role").with_message(
            format!(
                "Unrecognized role: {}. Allowed values are ANONYMOUS, AUTHENTICATED, MODERATOR, ADMIN.",
                role
            )
            .into(),
        ));
    }
    Ok(())
}
