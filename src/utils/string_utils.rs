//! # 문자열 유틸리티
//!
//! 드래프트의 선택적 문자열 필드를 정규화하는 공통 유틸리티입니다.
//! 빈 문자열과 공백만 있는 값은 "부재"로 취급되며,
//! 유효한 값은 앞뒤 공백이 제거된 형태로 정규화됩니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  john_doe  ".to_string())), Some("john_doe".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// 드래프트 DTO의 `#[serde(deserialize_with = "deserialize_optional_string")]`
/// 속성과 함께 사용되어, 공백만 있는 필드가 "부재"로 일관되게 처리되도록 합니다.
///
/// # 예제
/// ```rust,ignore
/// use serde::Deserialize;
/// use crate::utils::string_utils::deserialize_optional_string;
///
/// #[derive(Deserialize)]
/// struct Draft {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     bio: Option<String>,
/// }
///
/// // JSON: {"bio": "  Rust developer  "} → Some("Rust developer")
/// // JSON: {"bio": ""} → None
/// // JSON: {"bio": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("john_doe".to_string())),
            Some("john_doe".to_string())
        );
        assert_eq!(
            clean_optional_string(Some("  Experienced developer  ".to_string())),
            Some("Experienced developer".to_string())
        );
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Draft {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            bio: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let draft: Draft = serde_json::from_str(r#"{"bio": "  Rust developer  "}"#).unwrap();
        assert_eq!(draft.bio, Some("Rust developer".to_string()));

        // 빈 문자열 - None 반환
        let draft: Draft = serde_json::from_str(r#"{"bio": ""}"#).unwrap();
        assert_eq!(draft.bio, None);

        // 공백만 있는 문자열 - None 반환
        let draft: Draft = serde_json::from_str(r#"{"bio": "   "}"#).unwrap();
        assert_eq!(draft.bio, None);

        // null 값 - None 반환
        let draft: Draft = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert_eq!(draft.bio, None);

        // 필드 자체가 없는 경우 - None 반환 (serde default)
        let draft: Draft = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(draft.bio, None);
    }
}
