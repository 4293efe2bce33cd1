//! # User Management HTTP Handlers
//!
//! 사용자 프로필 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업과 페이지 단위 목록 조회를 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users` | 사용자 목록 조회 (페이징) | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! ## 에러 응답 형식
//!
//! 검증 실패 시 모든 위반 필드가 한 번에 보고됩니다:
//!
//! ```json
//! {
//!   "error": "Invalid input data",
//!   "details": {
//!     "email": ["Invalid email address format"],
//!     "password": ["Password must be at least 8 characters."]
//!   }
//! }
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::services::users::user_service::UserService;

/// 사용자 목록 조회 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    /// 페이지 번호 (기본값: 1)
    pub page: Option<u64>,
    /// 페이지 크기 (기본값: 10, 최대 100)
    pub size: Option<u64>,
}

/// 사용자 생성 핸들러
///
/// 새로운 사용자 프로필을 생성합니다. 닉네임을 입력하지 않으면
/// 자동으로 생성되며, 비밀번호는 해시되어 저장됩니다.
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "john.doe@example.com",
///   "nickname": "john_doe123",
///   "role": "AUTHENTICATED",
///   "password": "Secure1234"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "7b6a3c1e-2f14-4d4e-9f27-0a4c2f9e8b11",
///   "email": "john.doe@example.com",
///   "nickname": "john_doe123",
///   "role": "AUTHENTICATED",
///   "is_professional": false
/// }
/// ```
///
/// ## 실패 사례
///
/// - 검증 실패 (400 Bad Request): 위반된 모든 필드와 메시지
/// - 중복 이메일 (409 Conflict)
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 조회 핸들러
///
/// 생성 순서 기준으로 사용자 목록 한 페이지를 반환합니다.
///
/// # 엔드포인트
///
/// `GET /users?page=1&size=10`
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "items": [ /* UserResponse 배열 */ ],
///   "total": 42,
///   "page": 1,
///   "size": 10
/// }
/// ```
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = query.page.unwrap_or(1);
    let size = query.size.unwrap_or(10);

    let response = service.list_users(page, size).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 조회 핸들러
///
/// 지정된 ID의 사용자 정보를 조회합니다.
/// 공개 프로필 정보만 반환하며, 비밀번호 관련 정보는 제외됩니다.
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 실패 사례
///
/// - 사용자 없음 (404 Not Found)
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 수정 핸들러
///
/// 지정된 ID의 사용자 프로필을 부분 수정합니다.
/// 요청에 존재하는 필드만 반영되며, 최소 한 개의 필드가 필요합니다.
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}`
///
/// # 요청 본문
///
/// ```json
/// {
///   "bio": "Now leading the platform team."
/// }
/// ```
///
/// # 실패 사례
///
/// - 빈 수정 요청 (400 Bad Request): `"At least one field must be provided for update"`
/// - 필드 검증 실패 (400 Bad Request)
/// - 사용자 없음 (404 Not Found)
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// 지정된 ID의 사용자를 삭제합니다.
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// # 응답
///
/// - 성공 (204 No Content)
/// - 사용자 없음 (404 Not Found)
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
