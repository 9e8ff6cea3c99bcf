//! # 폴더(Folder) 리소스
//!
//! ## 엔드포인트
//! - `GET    /v2/folders`      → 전체 폴더 목록
//! - `GET    /v2/folders/{id}` → 단일 폴더
//! - `POST   /v2/folders`      → 새 폴더 생성
//! - `PUT    /v2/folders/{id}` → 폴더 이름 변경
//! - `DELETE /v2/folders/{id}` → 폴더 삭제
//!
//! 폴더를 삭제하면 DB 스키마의 `ON DELETE SET NULL`에 의해
//! 해당 폴더에 속한 노트들이 자동으로 루트로 이동합니다.

use crate::{db, error::AppError, models::*, routes::resource::Resource};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct Folders;

#[async_trait]
impl Resource for Folders {
    const PATH: &'static str = "folders";

    type Item = Folder;
    type Summary = Folder;
    type Filter = NoFilter;
    type Create = FolderRequest;
    type Update = FolderRequest;

    fn id(item: &Folder) -> i64 {
        item.id
    }

    async fn list(pool: &SqlitePool, _filter: NoFilter) -> Result<Vec<Folder>, AppError> {
        db::list_folders(pool).await
    }

    async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Folder>, AppError> {
        db::get_folder(pool, id).await
    }

    async fn create(pool: &SqlitePool, req: FolderRequest) -> Result<Folder, AppError> {
        // `name`은 핸들러에서 이미 검증되었습니다.
        db::create_folder(pool, req.name.as_deref().unwrap_or_default()).await
    }

    async fn update(
        pool: &SqlitePool,
        id: i64,
        req: FolderRequest,
    ) -> Result<Option<Folder>, AppError> {
        db::update_folder(pool, id, req.name.as_deref().unwrap_or_default()).await
    }

    async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        db::delete_folder(pool, id).await
    }
}
