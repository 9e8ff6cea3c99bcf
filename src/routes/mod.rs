//! # 라우트 모듈
//!
//! HTTP 요청을 처리하는 라우터를 조립합니다.
//!
//! 각 하위 모듈:
//! - `extract`: 거부(rejection)를 `AppError`로 바꾸는 추출기 래퍼
//! - `resource`: 다섯 가지 CRUD 작업의 제네릭 핸들러와 [`Resource`] 트레이트
//! - `notes` / `folders` / `tags`: 엔티티별 `Resource` 구현
//! - `health`: 서버 상태 확인 (헬스체크)
//!
//! API는 `/v2` 아래에 중첩됩니다. 그 밖의 경로는 정적 파일(`/` → index.html)로,
//! 파일도 없으면 JSON 404로 응답합니다.

pub mod extract;
pub mod folders;
pub mod health;
pub mod notes;
pub mod resource;
pub mod tags;

pub use folders::Folders;
pub use health::*;
pub use notes::Notes;
pub use resource::Resource;
pub use tags::Tags;

use crate::error::AppError;
use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use sqlx::SqlitePool;
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// `/v2` 아래에 중첩될 API 라우터
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(resource::routes::<Notes>())
        .merge(resource::routes::<Folders>())
        .merge(resource::routes::<Tags>())
        .route("/health", get(health_check))
        .with_state(state)
}

/// 전체 애플리케이션 라우터 (API + 정적 파일 + 404 + CORS + 요청 로깅)
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().nest("/v2", api_router(state));
    let static_dir = static_dir.as_ref();

    let router = if static_dir.is_dir() {
        tracing::info!("Serving static files from {}", static_dir.display());
        // 파일을 찾지 못하면 JSON 404 핸들러로 넘깁니다.
        // GET/HEAD 외의 메서드도 405 대신 같은 404 핸들러로 보냅니다.
        let serve_dir = ServeDir::new(static_dir)
            .call_fallback_on_method_not_allowed(true)
            .not_found_service(not_found.into_service());
        router.fallback_service(serve_dir)
    } else {
        tracing::warn!(
            "Static directory {} not found, serving API only",
            static_dir.display()
        );
        router.fallback(not_found)
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// 어떤 라우트에도 맞지 않는 요청
async fn not_found() -> AppError {
    AppError::NotFound
}
