//! # 태그 API 라우트
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | GET | /v2/tags | 전체 태그 목록 |
//! | GET | /v2/tags/{id} | 단일 태그 |
//! | POST | /v2/tags | 새 태그 생성 (이름 중복 시 409) |
//! | PUT | /v2/tags/{id} | 태그 이름 변경 |
//! | DELETE | /v2/tags/{id} | 태그 삭제 |

use crate::{db, error::AppError, models::*, routes::resource::Resource};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct Tags;

#[async_trait]
impl Resource for Tags {
    const PATH: &'static str = "tags";

    type Item = Tag;
    type Summary = Tag;
    type Filter = NoFilter;
    type Create = TagRequest;
    type Update = TagRequest;

    fn id(item: &Tag) -> i64 {
        item.id
    }

    async fn list(pool: &SqlitePool, _filter: NoFilter) -> Result<Vec<Tag>, AppError> {
        db::list_tags(pool).await
    }

    async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Tag>, AppError> {
        db::get_tag(pool, id).await
    }

    async fn create(pool: &SqlitePool, req: TagRequest) -> Result<Tag, AppError> {
        db::create_tag(pool, req.name.as_deref().unwrap_or_default()).await
    }

    async fn update(pool: &SqlitePool, id: i64, req: TagRequest) -> Result<Option<Tag>, AppError> {
        db::update_tag(pool, id, req.name.as_deref().unwrap_or_default()).await
    }

    async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        db::delete_tag(pool, id).await
    }
}
