//! # 닉네임 생성 유틸리티
//!
//! 닉네임 생성 협력자 인터페이스와 단어 목록 기반 구현,
//! 그리고 생성 요청의 닉네임 결정 로직을 제공합니다.
//!
//! 닉네임이 입력된 경우 그대로 사용되며(이후 패턴 검증 대상),
//! 입력되지 않은 경우 생성기를 정확히 한 번 호출하여 기본값을 만듭니다.
//! 생성기가 만든 값은 신뢰되어 다시 패턴 검증을 거치지 않습니다.
//! 생성기 호출 실패는 조용히 무시되지 않고 닉네임 필드의
//! 검증 실패로 호출자에게 전달됩니다.

use rand::Rng;
use validator::{ValidationError, ValidationErrors};

use crate::core::errors::AppError;

/// 닉네임을 만들 때 사용하는 형용사 목록
const ADJECTIVES: &[&str] = &[
    "brave", "calm", "clever", "eager", "gentle", "jolly", "keen", "lively", "nimble", "proud",
    "quick", "witty",
];

/// 닉네임을 만들 때 사용하는 동물 이름 목록
const ANIMALS: &[&str] = &[
    "badger", "dolphin", "falcon", "fox", "heron", "lynx", "otter", "owl", "panda", "raven",
    "tiger", "wolf",
];

/// 닉네임 생성 협력자 인터페이스
///
/// 구현체는 닉네임 패턴(영문/숫자/언더스코어/하이픈, 3자 이상)을
/// 만족하는 문자열을 반환해야 합니다.
pub trait NicknameGenerator: Send + Sync {
    /// 사람이 읽을 수 있는 무작위 닉네임을 생성합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 닉네임
    /// * `Err(AppError)` - 생성기 내부 오류
    fn generate(&self) -> Result<String, AppError>;
}

/// 단어 목록 기반 닉네임 생성기
///
/// `형용사_동물_숫자` 형태의 닉네임을 생성합니다. (예: `clever_fox_123`)
pub struct WordListNicknameGenerator;

impl NicknameGenerator for WordListNicknameGenerator {
    fn generate(&self) -> Result<String, AppError> {
        let mut rng = rand::rng();

        let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
        let animal = ANIMALS[rng.random_range(0..ANIMALS.len())];
        let number: u32 = rng.random_range(0..1000);

        Ok(format!("{}_{}_{}", adjective, animal, number))
    }
}

/// 생성 요청의 닉네임을 결정합니다.
///
/// 값이 입력된 경우 그대로 반환하고, 입력되지 않은 경우
/// 생성기를 호출하여 기본 닉네임을 만듭니다.
///
/// # Arguments
///
/// * `raw` - 클라이언트가 전달한 닉네임 (선택)
/// * `generator` - 닉네임 생성 협력자
///
/// # Returns
///
/// * `Ok(String)` - 입력된 닉네임 또는 생성된 닉네임
/// * `Err(AppError::FieldValidationError)` - 생성기 호출이 실패한 경우,
///   닉네임 필드에 귀속된 검증 실패로 변환되어 반환됩니다
pub fn resolve_nickname(
    raw: Option<String>,
    generator: &dyn NicknameGenerator,
) -> Result<String, AppError> {
    match raw {
        Some(nickname) => Ok(nickname),
        None => generator.generate().map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add(
                "nickname",
                ValidationError::new("nickname_generation_failed")
                    .with_message(format!("Failed to generate a nickname: {}", e).into()),
            );
            AppError::FieldValidationError(errors)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validators::validate_nickname;

    struct FailingNicknameGenerator;

    impl NicknameGenerator for FailingNicknameGenerator {
        fn generate(&self) -> Result<String, AppError> {
            Err(AppError::ExternalServiceError(
                "word list unavailable".to_string(),
            ))
        }
    }

    #[test]
    fn test_generated_nickname_satisfies_nickname_rules() {
        let generator = WordListNicknameGenerator;

        // 생성된 닉네임은 닉네임 검증기를 그대로 통과해야 한다
        for _ in 0..50 {
            let nickname = generator.generate().unwrap();
            assert!(!nickname.is_empty());
            assert!(
                validate_nickname(&nickname).is_ok(),
                "generated nickname should be valid: {}",
                nickname
            );
        }
    }

    #[test]
    fn test_resolve_returns_provided_nickname_unchanged() {
        let generator = WordListNicknameGenerator;

        let resolved = resolve_nickname(Some("john_doe".to_string()), &generator).unwrap();
        assert_eq!(resolved, "john_doe");
    }

    #[test]
    fn test_resolve_generates_when_absent() {
        let generator = WordListNicknameGenerator;

        let resolved = resolve_nickname(None, &generator).unwrap();
        assert!(validate_nickname(&resolved).is_ok());
    }

    #[test]
    fn test_generator_failure_becomes_nickname_field_error() {
        let result = resolve_nickname(None, &FailingNicknameGenerator);

        match result.unwrap_err() {
            AppError::FieldValidationError(errors) => {
                assert!(errors.field_errors().contains_key("nickname"));
            }
            other => panic!("Expected FieldValidationError, got: {:?}", other),
        }
    }
}
