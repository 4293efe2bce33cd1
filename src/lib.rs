//! 사용자 프로필 서비스 백엔드
//!
//! Rust 기반의 사용자 프로필 관리 서비스입니다.
//! 필드 단위 검증기를 조합한 생성/수정/조회 레코드 검증,
//! 닉네임 자동 생성, 그리고 bcrypt 기반 비밀번호 해싱을 제공합니다.
//!
//! # Features
//!
//! - **프로필 검증**: 이메일, 닉네임, URL, 비밀번호 필드별 검증 및 정규화
//! - **레코드 조합**: 생성(필수 필드 강제)/수정(부분, 최소 1개 필드) 검증 규칙 조합
//! - **닉네임 생성**: 닉네임 미입력 시 단어 목록 기반 자동 생성
//! - **에러 집계**: 필드별 검증 실패를 한 번에 모아 구조화된 응답으로 반환
//! - **저장소 추상화**: 영속성 계층을 트레이트 경계 뒤로 분리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 조합 + 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (트레이트 경계)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::repositories::users::user_repo::InMemoryUserRepository;
//! use user_service_backend::services::users::user_service::UserService;
//! use user_service_backend::utils::nickname_gen::WordListNicknameGenerator;
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(WordListNicknameGenerator),
//! );
//!
//! // 요청 검증 및 사용자 생성
//! let response = service.create_user(request).await?;
//! println!("생성된 사용자: {}", response.nickname);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
