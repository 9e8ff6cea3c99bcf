//! # 노트(Note) 리소스
//!
//! ## 엔드포인트
//! - `GET    /v2/notes?searchTerm=&folderId=` → 노트 목록 (`{id, title, content}` 배열)
//! - `GET    /v2/notes/{id}`                  → 단일 노트
//! - `POST   /v2/notes`                       → 새 노트 생성
//! - `PUT    /v2/notes/{id}`                  → 노트 수정 (`title` 필수, 나머지는 부분 수정)
//! - `DELETE /v2/notes/{id}`                  → 노트 삭제
//!
//! `folderId`를 지정하면 해당 폴더가 존재하는지 먼저 확인합니다.

use crate::{db, error::AppError, models::*, routes::resource::Resource};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct Notes;

#[async_trait]
impl Resource for Notes {
    const PATH: &'static str = "notes";

    type Item = Note;
    type Summary = NoteSummary;
    type Filter = NoteFilter;
    type Create = CreateNoteRequest;
    type Update = UpdateNoteRequest;

    fn id(item: &Note) -> i64 {
        item.id
    }

    async fn list(pool: &SqlitePool, filter: NoteFilter) -> Result<Vec<NoteSummary>, AppError> {
        db::list_notes(pool, &filter).await
    }

    async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Note>, AppError> {
        db::get_note(pool, id).await
    }

    async fn create(pool: &SqlitePool, req: CreateNoteRequest) -> Result<Note, AppError> {
        if let Some(folder_id) = req.folder_id {
            ensure_folder_exists(pool, folder_id).await?;
        }
        db::create_note(pool, &req).await
    }

    async fn update(
        pool: &SqlitePool,
        id: i64,
        req: UpdateNoteRequest,
    ) -> Result<Option<Note>, AppError> {
        // Some(None)은 폴더에서 꺼내는 요청이므로 확인할 필요가 없습니다.
        if let Some(Some(folder_id)) = req.folder_id {
            ensure_folder_exists(pool, folder_id).await?;
        }
        db::update_note(pool, id, &req).await
    }

    async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        db::delete_note(pool, id).await
    }
}

/// 노트가 참조할 폴더가 없으면 400을 반환합니다.
async fn ensure_folder_exists(pool: &SqlitePool, folder_id: i64) -> Result<(), AppError> {
    match db::get_folder(pool, folder_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(format!(
            "Folder `{folder_id}` does not exist"
        ))),
    }
}
