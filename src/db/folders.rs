//! # 폴더 데이터베이스 쿼리 모듈
//!
//! 폴더를 삭제하면 스키마의 `ON DELETE SET NULL`에 의해
//! 그 폴더의 노트들은 `folder_id`가 NULL이 됩니다 (노트는 삭제되지 않음).

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 모든 폴더를 id 순으로 조회합니다.
pub async fn list_folders(pool: &SqlitePool) -> Result<Vec<Folder>, AppError> {
    let folders = sqlx::query_as::<_, Folder>("SELECT id, name FROM folders ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(folders)
}

/// ID로 단일 폴더를 조회합니다.
pub async fn get_folder(pool: &SqlitePool, id: i64) -> Result<Option<Folder>, AppError> {
    let folder = sqlx::query_as::<_, Folder>("SELECT id, name FROM folders WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(folder)
}

/// 새 폴더를 생성합니다.
pub async fn create_folder(pool: &SqlitePool, name: &str) -> Result<Folder, AppError> {
    let folder = sqlx::query_as::<_, Folder>(
        "INSERT INTO folders (name) VALUES (?) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(folder)
}

/// 폴더 이름을 바꿉니다. 폴더가 없으면 `Ok(None)`.
pub async fn update_folder(
    pool: &SqlitePool,
    id: i64,
    name: &str,
) -> Result<Option<Folder>, AppError> {
    let folder = sqlx::query_as::<_, Folder>(
        "UPDATE folders SET name = ? WHERE id = ? RETURNING id, name",
    )
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(folder)
}

/// 폴더를 삭제합니다.
pub async fn delete_folder(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM folders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
