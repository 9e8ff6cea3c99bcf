//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (테스트에서는 `sqlite::memory:`)
//! - `DB_MAX_CONNECTIONS`: 연결 풀의 최대 연결 수
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호
//! - `STATIC_DIR`: `/`에서 서빙할 정적 파일(index.html) 디렉토리

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `main`에서만 사용됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/noteful.db")
    pub database_url: String,
    /// 연결 풀 크기 (기본값: 5)
    pub max_connections: u32,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 8080)
    pub port: u16,
    /// 정적 파일 디렉토리 (기본값: "public")
    pub static_dir: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`은 필수이며, 없으면 `VarError`를 반환합니다.
    /// 운영 DB와 테스트 DB는 이 값 하나로 구분합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            // 숫자 설정은 파싱에 실패하면 기본값으로 대체합니다.
            max_connections: parse_or("DB_MAX_CONNECTIONS", 5),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 8080),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 환경변수를 읽어 `T`로 파싱합니다. 변수가 없거나 파싱에 실패하면 `default`.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_missing_variable() {
        let port: u16 = parse_or("NOTEFUL_TEST_SURELY_UNSET_PORT", 8080);
        assert_eq!(port, 8080);
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: "public".to_string(),
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
