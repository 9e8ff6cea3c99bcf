//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 라우트 핸들러는 에러를 직접 잡지 않고 `?`로 전파합니다.
//! HTTP 상태 코드로의 변환은 이 파일 한 곳에서만 일어납니다.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 에러 variant는 적절한 HTTP 상태 코드와 메시지로 변환됩니다.
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Not Found")]
    NotFound,

    /// 잘못된 요청 (HTTP 400)
    /// 메시지는 그대로 클라이언트에 전달됩니다.
    /// 예: "Missing `title` in request body"
    #[error("{0}")]
    BadRequest(String),

    /// 리소스 충돌 (HTTP 409) — 예: 이미 존재하는 태그 이름
    #[error("{0}")]
    Conflict(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// 제약조건 위반은 아래 `From<sqlx::Error>`에서 미리 걸러지므로,
    /// 여기까지 오는 것은 예상하지 못한 오류뿐입니다.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// sqlx 함수의 에러에 `?`를 쓰면 이 변환을 거칩니다.
///
/// - UNIQUE 위반 → `Conflict` (409)
/// - FOREIGN KEY 위반 → `BadRequest` (400), 존재하지 않는 폴더를 참조한 경우
/// - 그 외 → `Database` (500)
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Resource already exists".to_string())
            }
            Some(db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced resource does not exist".to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

// 추출기(extractor) 거부도 `AppError`를 거쳐 `{code, message}` JSON으로 나갑니다.
// 잘못된 JSON 본문, Content-Type 누락, 숫자가 아닌 id 모두 400입니다.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// 필수 필드가 비어 있을 때의 400 에러
    pub fn missing_field(field: &str) -> Self {
        AppError::BadRequest(format!("Missing `{field}` in request body"))
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 응답 본문: `{ "code": "bad_request", "message": "..." }`
    /// 데이터베이스 에러는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "code": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}
