//! 사용자 목록 응답 DTO
//!
//! 페이지 단위 조회 결과를 감싸는 봉투 타입입니다. 검증 로직은 없으며,
//! 전체 컬렉션의 한 조각을 기술합니다.

use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserResponse;

/// 페이지네이션 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    /// 현재 페이지에 포함된 사용자들
    pub items: Vec<UserResponse>,
    /// 전체 사용자 수
    pub total: u64,
    /// 현재 페이지 번호 (1부터 시작)
    pub page: u64,
    /// 페이지 크기
    pub size: u64,
}

impl UserListResponse {
    /// 새 목록 응답 생성
    pub fn new(items: Vec<UserResponse>, total: u64, page: u64, size: u64) -> Self {
        Self {
            items,
            total,
            page,
            size,
        }
    }
}
