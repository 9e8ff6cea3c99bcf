//! # 태그 모델 정의
//!
//! 태그는 노트를 분류하기 위한 라벨입니다.
//! 노트-태그 연결은 이 API의 범위가 아니며, 태그 자체의 CRUD만 제공합니다.

use super::{require_text, Validate};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// 태그 엔티티 — DB의 `tags` 테이블 한 행에 대응합니다.
///
/// # derive 매크로 설명
/// - `Serialize`: 이 구조체를 JSON으로 변환할 수 있게 합니다 (API 응답 시 사용)
/// - `sqlx::FromRow`: SQL 쿼리 결과(행)를 이 구조체로 자동 매핑합니다
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Tag {
    /// 태그 고유 식별자 (DB가 생성하는 정수)
    pub id: i64,
    /// 태그 이름 — 전체 태그 중 유일해야 합니다
    pub name: String,
}

/// 태그 생성/수정 요청 — `POST /tags`, `PUT /tags/:id`
///
/// `name`이 Option인 이유: 필드가 빠진 JSON도 일단 파싱한 뒤,
/// 검증 단계에서 "Missing `name`" 메시지로 400을 돌려주기 위해서입니다.
#[derive(Debug, Default, Deserialize)]
pub struct TagRequest {
    pub name: Option<String>,
}

impl Validate for TagRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_text(self.name.as_deref(), "name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_request_requires_name() {
        let err = TagRequest::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing `name` in request body");

        let ok = TagRequest {
            name: Some("urgent".into()),
        };
        assert!(ok.validate().is_ok());
    }
}
