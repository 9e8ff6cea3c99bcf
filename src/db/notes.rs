//! # 노트 데이터베이스 쿼리 모듈
//!
//! `notes` 테이블에 대한 CRUD 쿼리 함수들입니다.
//!
//! 생성과 수정은 `RETURNING` 절로 저장된 행을 그대로 돌려받습니다.
//! 따라서 DB가 생성한 `id`와 타임스탬프를 별도 조회 없이 응답에 쓸 수 있습니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// 조건에 맞는 노트 목록을 id 오름차순으로 조회합니다.
///
/// 조건 개수가 요청마다 다르므로 `QueryBuilder`로 WHERE 절을 조립합니다.
/// `push_bind`는 값을 `?` 자리표시자로 바인딩하므로 SQL 인젝션이 없습니다.
pub async fn list_notes(
    pool: &SqlitePool,
    filter: &NoteFilter,
) -> Result<Vec<NoteSummary>, AppError> {
    let mut query =
        QueryBuilder::<Sqlite>::new("SELECT id, title, content FROM notes WHERE 1 = 1");

    if let Some(term) = filter.search_term() {
        query
            .push(" AND title LIKE ")
            .push_bind(format!("%{}%", escape_like(term)))
            .push(" ESCAPE '\\'");
    }

    if let Some(folder_id) = filter.folder_id {
        query.push(" AND folder_id = ").push_bind(folder_id);
    }

    query.push(" ORDER BY id");

    let notes = query
        .build_query_as::<NoteSummary>()
        .fetch_all(pool)
        .await?;

    Ok(notes)
}

/// ID로 노트 하나를 조회합니다. 없으면 `Ok(None)`.
pub async fn get_note(pool: &SqlitePool, id: i64) -> Result<Option<Note>, AppError> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        SELECT id, title, content, folder_id, created_at, updated_at
        FROM notes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(note)
}

/// 새 노트를 저장하고, DB가 돌려준 행을 반환합니다.
pub async fn create_note(pool: &SqlitePool, req: &CreateNoteRequest) -> Result<Note, AppError> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (title, content, folder_id)
        VALUES (?, ?, ?)
        RETURNING id, title, content, folder_id, created_at, updated_at
        "#,
    )
    .bind(&req.title)
    .bind(&req.content)
    .bind(req.folder_id)
    .fetch_one(pool)
    .await?;

    Ok(note)
}

/// 노트를 부분 수정합니다.
///
/// 요청에 포함된 필드만 SET 절에 들어갑니다. `updated_at`은 항상 갱신됩니다.
///
/// ## 반환값
/// - `Ok(Some(Note))`: 수정된 노트
/// - `Ok(None)`: 해당 ID의 노트가 없음 (영향받은 행 0개)
pub async fn update_note(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateNoteRequest,
) -> Result<Option<Note>, AppError> {
    let mut query = QueryBuilder::<Sqlite>::new(
        "UPDATE notes SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
    );

    if let Some(title) = &req.title {
        query.push(", title = ").push_bind(title.clone());
    }

    if let Some(content) = &req.content {
        query.push(", content = ").push_bind(content.clone());
    }

    if let Some(folder_id) = req.folder_id {
        query.push(", folder_id = ").push_bind(folder_id);
    }

    query
        .push(" WHERE id = ")
        .push_bind(id)
        .push(" RETURNING id, title, content, folder_id, created_at, updated_at");

    let note = query.build_query_as::<Note>().fetch_optional(pool).await?;

    Ok(note)
}

/// 노트를 삭제합니다. 실제로 행이 지워졌으면 `true`.
pub async fn delete_note(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM notes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// LIKE 패턴의 와일드카드(`%`, `_`)와 이스케이프 문자를 글자 그대로 취급하게 만듭니다.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
