//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 하나의 엔티티를 담당합니다:
//! - `note`: 노트(Note)와 목록용 요약, 검색 필터, 생성/수정 요청
//! - `folder`: 폴더(Folder)와 생성/수정 요청
//! - `tag`: 태그(Tag)와 생성/수정 요청
//!
//! 요청 구조체는 모두 [`Validate`]를 구현합니다.
//! 검증은 DB에 접근하기 전에 동기적으로 수행됩니다.

pub mod folder;
pub mod note;
pub mod tag;

pub use folder::*;
pub use note::*;
pub use tag::*;

use crate::error::AppError;
use serde::{de, Deserialize, Deserializer};
use std::{fmt::Display, str::FromStr};

/// 요청 본문의 필수 항목 검사
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// 필드가 존재하고 공백이 아닌지 확인합니다.
///
/// 실패하면 "Missing `{field}` in request body" 메시지의 400 에러를 반환합니다.
pub fn require_text(value: Option<&str>, field: &str) -> Result<(), AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(AppError::missing_field(field)),
    }
}

/// 필드 누락과 명시적 `null`을 구분하기 위한 역직렬화 함수
///
/// `#[serde(default, deserialize_with = "double_option")]`과 함께 사용합니다.
/// - 필드 누락 → `None` (변경 안 함)
/// - `null` → `Some(None)` (값 지우기)
/// - 값 → `Some(Some(값))`
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 쿼리 문자열 값을 파싱하되, 빈 값(`?folderId=`)은 없는 것으로 취급합니다.
///
/// `#[serde(default, deserialize_with = "empty_as_none")]`과 함께 사용합니다.
pub(crate) fn empty_as_none<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// 쿼리 파라미터가 없는 리소스(폴더, 태그)의 목록 필터
///
/// 알 수 없는 쿼리 파라미터는 무시됩니다.
#[derive(Debug, Default, Deserialize)]
pub struct NoFilter {}
