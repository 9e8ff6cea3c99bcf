//! 정적 파일, 404 처리, 헬스체크

mod common;

use axum::http::{header, StatusCode};
use common::{is_json, spawn_app};
use serde_json::json;

#[tokio::test]
async fn test_root_serves_index_page() {
    let app = spawn_app().await;

    let res = app.get("/").await;

    assert_eq!(res.status, StatusCode::OK);
    let content_type = res.header(header::CONTENT_TYPE).expect("content type");
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = spawn_app().await;

    let res = app.get("/bad/path").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["code"], "not_found");
}

#[tokio::test]
async fn test_unknown_path_is_404_for_any_method() {
    let app = spawn_app().await;

    let post = app.post("/bad/path", json!({ "title": "x" })).await;
    assert_eq!(post.status, StatusCode::NOT_FOUND);
    assert_eq!(post.body["code"], "not_found");

    let delete = app.delete("/nothing").await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
    assert!(is_json(&delete));
}

#[tokio::test]
async fn test_unknown_api_path_is_404() {
    let app = spawn_app().await;

    let res = app.get("/v2/widgets").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;

    let res = app.get("/v2/health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
}
