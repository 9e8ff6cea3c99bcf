//! 통합 테스트 공용 도우미
//!
//! 테스트마다 새 in-memory SQLite 풀을 만들고, 마이그레이션과 시드 데이터를 적용한 뒤
//! 실제 애플리케이션 라우터를 `oneshot`으로 호출합니다.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use noteful::{db, routes, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// 폴더 4개, 노트 10개, 태그 4개
pub const SEED: &str = r#"
INSERT INTO folders (id, name) VALUES
    (100, 'Archive'),
    (101, 'Drafts'),
    (102, 'Personal'),
    (103, 'Work');

INSERT INTO notes (id, title, content, folder_id) VALUES
    (1000, '5 life lessons learned from cats', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 100),
    (1001, 'What the government doesn''t want you to know about cats', 'Posuere sollicitudin aliquam ultrices sagittis orci.', 101),
    (1002, 'The most boring article about cats you''ll ever read', 'Lorem ipsum dolor sit amet, boring.', 100),
    (1003, '7 things lady gaga has in common with cats', 'Posuere sollicitudin aliquam ultrices sagittis.', 102),
    (1004, 'The most incredible article about cats you''ll ever read', 'Lorem ipsum dolor sit amet, incredible.', 103),
    (1005, '10 ways cats can help you live to 100', 'Posuere sollicitudin aliquam ultrices.', 103),
    (1006, '9 reasons you can blame the recession on cats', 'Lorem ipsum dolor sit amet, recession.', 101),
    (1007, '10 ways marketers are making you addicted to cats', 'Posuere sollicitudin aliquam.', NULL),
    (1008, '11 ways investing in cats can make you a millionaire', 'Lorem ipsum dolor sit amet, millionaire.', 102),
    (1009, 'Why you should forget everything you learned about cats', NULL, NULL);

INSERT INTO tags (id, name) VALUES
    (1, 'breed'),
    (2, 'hybrid'),
    (3, 'domestic'),
    (4, 'feral');
"#;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// 시드 데이터가 들어간 앱을 만듭니다.
pub async fn spawn_app() -> TestApp {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database");
    db::migrate(&pool).await.expect("migrations");
    sqlx::raw_sql(SEED).execute(&pool).await.expect("seed data");

    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/public");
    let router = routes::app(AppState::new(pool.clone()), static_dir);

    TestApp { router, pool }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("request")).await
    }

    /// Content-Type을 붙이지 않고 원시 본문을 보냅니다.
    pub async fn request_raw(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_owned()))
            .expect("request");
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("count");
        count
    }
}

pub fn is_json(res: &TestResponse) -> bool {
    res.header(header::CONTENT_TYPE)
        .is_some_and(|ct| ct.starts_with("application/json"))
}
