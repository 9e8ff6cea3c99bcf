//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//! 모든 쿼리 함수는 `&SqlitePool`을 인자로 받습니다. 전역 연결은 없습니다.
//!
//! 각 하위 모듈:
//! - `notes`: 노트 CRUD, 제목 검색, 폴더 필터
//! - `folders`: 폴더 CRUD
//! - `tags`: 태그 CRUD

pub mod folders;
pub mod notes;
pub mod tags;

pub use folders::*;
pub use notes::*;
pub use tags::*;

use sqlx::{
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::{str::FromStr, time::Duration};

/// SQLite 연결 풀을 생성합니다.
///
/// 파일 DB가 없으면 새로 만들고, 외래키 제약조건을 켭니다.
/// `sqlite::memory:`는 연결마다 별도의 DB가 생기므로
/// 연결 하나만 유지하고 만료시키지 않습니다.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_options.connect_with(options).await
}

/// 아직 적용되지 않은 마이그레이션(`migrations/`)을 순서대로 실행합니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
