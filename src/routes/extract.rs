//! # 커스텀 추출기(Extractor)
//!
//! axum 기본 추출기(`Json`, `Query`, `Path`)는 요청을 거부할 때
//! 일반 텍스트 본문과 400/415/422 상태 코드를 직접 응답합니다.
//! 아래 래퍼는 같은 추출을 수행하되, 거부를 [`AppError`]로 바꿔서
//! 다른 에러와 똑같이 `{ "code": "bad_request", "message": ... }` JSON으로 응답하게 합니다.
//!
//! 변환 규칙은 `error.rs`의 `From<JsonRejection>` 등에 있습니다.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// `axum::Json` 대신 쓰는 요청 본문 추출기
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` 대신 쓰는 쿼리 문자열 추출기
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path` 대신 쓰는 경로 파라미터 추출기
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
