//! # Noteful
//!
//! 노트, 폴더, 태그 세 가지 엔티티에 대한 CRUD REST API입니다.
//! 실행 파일(`main.rs`)과 통합 테스트(`tests/`)가 같은 라우터를 사용할 수 있도록
//! 모든 모듈을 라이브러리로 공개합니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use error::AppError;
pub use routes::{app, AppState};
