//! 에러 응답 DTO
//!
//! 실패를 클라이언트에게 전달하는 봉투 타입입니다.
//! 요약 메시지와 선택적 상세 설명으로 구성됩니다.

use serde::{Deserialize, Serialize};

/// 에러 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 에러 요약
    pub error: String,

    /// 선택적 상세 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// 요약만 담은 에러 응답 생성
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// 상세 설명을 포함한 에러 응답 생성
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
