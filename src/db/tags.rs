//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그 CRUD 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.
//!
//! ## 테이블 구조
//! - `tags`: 태그 엔티티 (id, name) — name에 UNIQUE 제약조건

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 모든 태그를 id 순으로 조회합니다.
///
/// `sqlx::query_as::<_, Tag>(sql)` 설명:
/// - `query_as`는 SQL 결과를 지정한 구조체(Tag)로 자동 변환합니다
/// - `fetch_all`은 모든 행을 Vec으로 반환합니다
pub async fn list_tags(pool: &SqlitePool) -> Result<Vec<Tag>, AppError> {
    let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(tags)
}

/// ID로 태그 하나를 조회합니다.
///
/// `fetch_optional`은 결과가 0행이면 None, 1행이면 Some(Tag)을 반환합니다.
pub async fn get_tag(pool: &SqlitePool, id: i64) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(tag)
}

/// 새 태그를 생성하고 생성된 태그를 반환합니다.
///
/// `RETURNING id, name`: INSERT가 만든 행을 곧바로 돌려받습니다.
/// 이름이 이미 있으면 UNIQUE 위반 에러가 나며, 409 응답으로 변환됩니다.
pub async fn create_tag(pool: &SqlitePool, name: &str) -> Result<Tag, AppError> {
    let tag = sqlx::query_as::<_, Tag>("INSERT INTO tags (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(tag)
}

/// 태그 이름을 바꿉니다.
///
/// ## 반환값
/// - `Ok(Some(Tag))`: 수정 성공
/// - `Ok(None)`: 해당 ID의 태그가 존재하지 않음
pub async fn update_tag(pool: &SqlitePool, id: i64, name: &str) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>("UPDATE tags SET name = ? WHERE id = ? RETURNING id, name")
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(tag)
}

/// ID로 태그를 삭제합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공 (1행 삭제됨)
/// - `false`: 해당 ID의 태그가 없어 삭제된 행이 없음
pub async fn delete_tag(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM tags WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
