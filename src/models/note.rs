//! # 노트 모델 정의
//!
//! ## 구조체 역할
//! - `Note`: `notes` 테이블 한 행 (단건 조회/생성/수정 응답)
//! - `NoteSummary`: 목록 조회 응답의 한 항목 (`id`, `title`, `content`만 포함)
//! - `NoteFilter`: `GET /notes?searchTerm=...&folderId=...` 쿼리 파라미터
//! - `CreateNoteRequest` / `UpdateNoteRequest`: 요청 본문
//!
//! JSON 필드 이름은 camelCase입니다 (`folderId`, `createdAt`).

use super::{double_option, empty_as_none, require_text, Validate};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// 노트 엔티티 — DB의 `notes` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    /// 노트가 속한 폴더 — 없으면 루트
    pub folder_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// 목록 조회용 노트 요약
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
}

/// 노트 목록 필터 — 두 조건이 모두 주어지면 AND로 결합됩니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFilter {
    /// 제목에 포함된 부분 문자열 (빈 문자열은 무시)
    pub search_term: Option<String>,
    /// 빈 값(`folderId=`)은 필터 없음
    #[serde(default, deserialize_with = "empty_as_none")]
    pub folder_id: Option<i64>,
}

impl NoteFilter {
    /// 비어 있지 않은 검색어만 반환합니다.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

/// 노트 생성 요청 — `POST /notes`
///
/// 요청 본문의 `tags` 배열 등 알 수 없는 필드는 무시됩니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<i64>,
}

impl Validate for CreateNoteRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_text(self.title.as_deref(), "title")
    }
}

/// 노트 수정 요청 — `PUT /notes/:id`
///
/// `title`은 항상 필요합니다. `content`와 `folderId`는 보낸 경우에만 바뀌며,
/// `null`을 보내면 값이 지워집니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub folder_id: Option<Option<i64>>,
}

impl Validate for UpdateNoteRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_text(self.title.as_deref(), "title")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_without_title_is_rejected() {
        let req: CreateNoteRequest = serde_json::from_str(r#"{"foo": "bar"}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing `title` in request body");
    }

    #[test]
    fn create_ignores_tags_array() {
        let req: CreateNoteRequest =
            serde_json::from_str(r#"{"title": "Cats", "content": "meow", "tags": []}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.content.as_deref(), Some("meow"));
        assert_eq!(req.folder_id, None);
    }

    #[test]
    fn update_distinguishes_missing_from_null() {
        let missing: UpdateNoteRequest = serde_json::from_str(r#"{"title": "t"}"#).unwrap();
        assert_eq!(missing.content, None);
        assert_eq!(missing.folder_id, None);

        let cleared: UpdateNoteRequest =
            serde_json::from_str(r#"{"title": "t", "content": null, "folderId": null}"#).unwrap();
        assert_eq!(cleared.content, Some(None));
        assert_eq!(cleared.folder_id, Some(None));

        let set: UpdateNoteRequest =
            serde_json::from_str(r#"{"title": "t", "folderId": 101}"#).unwrap();
        assert_eq!(set.folder_id, Some(Some(101)));
    }

    #[test]
    fn filter_ignores_empty_search_term() {
        let filter = NoteFilter {
            search_term: Some(String::new()),
            folder_id: None,
        };
        assert_eq!(filter.search_term(), None);
    }

    #[test]
    fn filter_treats_empty_folder_id_as_absent() {
        let empty: NoteFilter = serde_json::from_str(r#"{"folderId": ""}"#).unwrap();
        assert_eq!(empty.folder_id, None);

        let set: NoteFilter = serde_json::from_str(r#"{"folderId": "103"}"#).unwrap();
        assert_eq!(set.folder_id, Some(103));

        assert!(serde_json::from_str::<NoteFilter>(r#"{"folderId": "abc"}"#).is_err());
    }

    #[test]
    fn note_serializes_camel_case() {
        let note = Note {
            id: 1,
            title: "t".into(),
            content: None,
            folder_id: Some(100),
            created_at: "2024-01-01T00:00:00.000Z".into(),
            updated_at: "2024-01-01T00:00:00.000Z".into(),
        };
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["folderId"], 100);
        assert!(value.get("createdAt").is_some());
    }
}
