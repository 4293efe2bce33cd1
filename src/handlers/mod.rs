//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증 조합 + 비즈니스 로직             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 설계 원칙
//!
//! 핸들러는 전송 계층만 담당합니다. 역직렬화된 드래프트를 서비스에 전달하고
//! 결과를 직렬화할 뿐, 검증 로직은 포함하지 않습니다. 검증 실패는
//! `AppError`의 `ResponseError` 구현을 통해 필드별 상세가 담긴
//! JSON 응답으로 자동 변환됩니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 프로필 관리 엔드포인트
//!   - 사용자 생성 (`POST /users`)
//!   - 사용자 조회 (`GET /users/{id}`)
//!   - 사용자 목록 (`GET /users`)
//!   - 사용자 수정 (`PUT /users/{id}`)
//!   - 사용자 삭제 (`DELETE /users/{id}`)

pub mod users;
