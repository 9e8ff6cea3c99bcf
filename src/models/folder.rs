//! # 폴더 모델 정의

use super::{require_text, Validate};
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// 폴더 엔티티 — DB의 `folders` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Folder {
    pub id: i64,
    pub name: String,
}

/// 폴더 생성/수정 요청 — `POST /folders`, `PUT /folders/:id`
///
/// 폴더는 이름 하나만 가지므로 생성과 수정이 같은 본문을 사용합니다.
#[derive(Debug, Default, Deserialize)]
pub struct FolderRequest {
    pub name: Option<String>,
}

impl Validate for FolderRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_text(self.name.as_deref(), "name")
    }
}
