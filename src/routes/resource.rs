//! # 공통 리소스 핸들러
//!
//! 노트, 폴더, 태그는 모두 같은 다섯 가지 작업을 가집니다:
//! 목록(list), 단건 조회(get), 생성(create), 수정(update), 삭제(delete).
//! 엔티티마다 핸들러를 복사하는 대신 [`Resource`] 트레이트 하나로 추상화하고,
//! HTTP 처리(추출, 검증, 상태 코드, Location 헤더)는 이 파일의 제네릭 핸들러가 맡습니다.
//!
//! ## 엔드포인트 (R::PATH = "notes" 일 때)
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | GET | /notes | 200 배열 | - |
//! | GET | /notes/{id} | 200 객체 | 404 |
//! | POST | /notes | 201 + Location | 400 |
//! | PUT | /notes/{id} | 200 객체 | 400, 404 |
//! | DELETE | /notes/{id} | 204 | - |
//!
//! 삭제는 멱등적입니다. 없는 id를 지워도 204를 반환합니다.
//! 본문/쿼리/경로 파싱 실패는 [`ApiJson`] 등의 추출기에서 400 JSON으로 바뀝니다.

use crate::{
    error::AppError,
    models::Validate,
    routes::{
        extract::{ApiJson, ApiPath, ApiQuery},
        AppState,
    },
};
use async_trait::async_trait;
use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::SqlitePool;

/// 하나의 엔티티 종류에 대한 저장소 작업
///
/// 구현체는 DB 접근만 담당합니다. 요청 본문 검증은 제네릭 핸들러가
/// DB 호출 전에 [`Validate`]로 먼저 수행합니다.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// URL 경로 세그먼트 (예: `"notes"`)
    const PATH: &'static str;

    /// 단건 조회/생성/수정 응답
    type Item: Serialize + Send + 'static;
    /// 목록 조회 응답의 한 항목
    type Summary: Serialize + Send + 'static;
    /// 목록 조회 쿼리 파라미터
    type Filter: DeserializeOwned + Send + 'static;
    /// 생성 요청 본문
    type Create: DeserializeOwned + Validate + Send + 'static;
    /// 수정 요청 본문
    type Update: DeserializeOwned + Validate + Send + 'static;

    /// 서버가 부여한 식별자 (Location 헤더에 사용)
    fn id(item: &Self::Item) -> i64;

    async fn list(pool: &SqlitePool, filter: Self::Filter)
        -> Result<Vec<Self::Summary>, AppError>;

    async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Self::Item>, AppError>;

    async fn create(pool: &SqlitePool, req: Self::Create) -> Result<Self::Item, AppError>;

    /// 일치하는 행이 없으면 `Ok(None)`
    async fn update(
        pool: &SqlitePool,
        id: i64,
        req: Self::Update,
    ) -> Result<Option<Self::Item>, AppError>;

    /// 실제로 행이 삭제되었으면 `true`
    async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError>;
}

/// `R`의 다섯 가지 라우트를 등록한 라우터를 만듭니다.
///
/// axum 0.8의 경로 파라미터 문법은 `{id}`입니다.
/// `format!` 안에서는 중괄호를 `{{id}}`로 두 번 써야 합니다.
pub fn routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(&format!("/{}", R::PATH), get(list::<R>).post(create::<R>))
        .route(
            &format!("/{}/{{id}}", R::PATH),
            get(fetch::<R>).put(update::<R>).delete(remove::<R>),
        )
}

/// `GET /{path}` — 목록 조회
async fn list<R: Resource>(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<R::Filter>,
) -> Result<Json<Vec<R::Summary>>, AppError> {
    let items = R::list(&state.pool, filter).await?;
    Ok(Json(items))
}

/// `GET /{path}/{id}` — 단건 조회. 없으면 404.
async fn fetch<R: Resource>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<R::Item>, AppError> {
    let item = R::get(&state.pool, id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(item))
}

/// `POST /{path}` — 생성
///
/// 응답: 201 Created + `Location: {요청 경로}/{id}` + 생성된 객체
/// `OriginalUri`는 `.nest()`로 잘리기 전의 전체 경로(`/v2/notes`)를 담고 있습니다.
async fn create<R: Resource>(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiJson(req): ApiJson<R::Create>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let item = R::create(&state.pool, req).await?;
    let id = R::id(&item);
    tracing::info!(resource = R::PATH, id, "created");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// `PUT /{path}/{id}` — 수정
///
/// 검증은 id 존재 여부와 관계없이 먼저 수행됩니다 (본문이 잘못되면 항상 400).
async fn update<R: Resource>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<R::Update>,
) -> Result<Json<R::Item>, AppError> {
    req.validate()?;

    let item = R::update(&state.pool, id, req)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(resource = R::PATH, id, "updated");

    Ok(Json(item))
}

/// `DELETE /{path}/{id}` — 삭제. 행이 있었든 없었든 204.
async fn remove<R: Resource>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    if R::delete(&state.pool, id).await? {
        tracing::info!(resource = R::PATH, id, "deleted");
    } else {
        tracing::debug!(resource = R::PATH, id, "delete matched no rows");
    }
    Ok(StatusCode::NO_CONTENT)
}
