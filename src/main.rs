//! # Noteful 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. 라우터 설정
//! 6. HTTP 서버 시작

use anyhow::Result;
use noteful::{config::Config, db, routes, AppState};
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 noteful, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "noteful=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!("Starting Noteful server on {}", config.bind_addr());

    // ── 4단계: SQLite 연결 풀 생성 ──
    // 파일 DB라면 상위 디렉토리를 먼저 만들어 둡니다 (예: data/noteful.db → data/).
    let db_options = SqliteConnectOptions::from_str(&config.database_url)?;
    if let Some(dir) = db_options
        .get_filename()
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        if !dir.exists() {
            tokio::fs::create_dir_all(dir).await?;
            tracing::info!("Created database directory: {}", dir.display());
        }
    }

    let pool = db::connect(&config.database_url, config.max_connections).await?;

    // ── 5단계: 데이터베이스 마이그레이션 실행 ──
    tracing::info!("Running database migrations...");
    db::migrate(&pool).await?;

    // ── 6단계: 라우터 설정 ──
    let app = routes::app(AppState::new(pool), &config.static_dir);

    // ── 7단계: 서버 시작 ──
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
