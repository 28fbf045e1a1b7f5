use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::{char_len, TextMetrics};
use crate::{Category, ContentDraft, OptimizationReport};

pub const MAX_CONTENT_CHARS: usize = 50_000;
pub const MAX_TITLE_CHARS: usize = 255;
pub const MIN_CONTENT_CHARS: usize = 10;
pub const MIN_OPTIMIZE_CHARS: usize = 50;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

// Undecodable bodies, wrong field types and missing content-type all answer
// like any other invalid input.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Which fields an endpoint insists on.
#[derive(Debug, Clone, Copy)]
pub struct DraftRules {
    pub require_title: bool,
    pub min_content: usize,
}

impl DraftRules {
    pub const CONTENT_ONLY: DraftRules = DraftRules {
        require_title: false,
        min_content: MIN_CONTENT_CHARS,
    };
    pub const TITLE_AND_CONTENT: DraftRules = DraftRules {
        require_title: true,
        min_content: MIN_CONTENT_CHARS,
    };
    pub const OPTIMIZE: DraftRules = DraftRules {
        require_title: false,
        min_content: MIN_OPTIMIZE_CHARS,
    };
    pub const ANY: DraftRules = DraftRules {
        require_title: false,
        min_content: 0,
    };
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl DraftRequest {
    pub fn into_draft(self, rules: DraftRules) -> Result<ContentDraft, ApiError> {
        let title = self.title.unwrap_or_default().trim().to_string();
        let body = self.content.unwrap_or_default();

        if rules.require_title && title.is_empty() {
            return Err(ApiError::Validation("Title is required".to_string()));
        }
        if char_len(&title) > MAX_TITLE_CHARS {
            return Err(ApiError::Validation(format!(
                "Title must be less than {MAX_TITLE_CHARS} characters"
            )));
        }

        let content_len = char_len(body.trim());
        if content_len < rules.min_content {
            return Err(ApiError::Validation(format!(
                "Content must be at least {} characters",
                rules.min_content
            )));
        }
        if char_len(&body) > MAX_CONTENT_CHARS {
            return Err(ApiError::Validation(format!(
                "Content must be less than {MAX_CONTENT_CHARS} characters"
            )));
        }

        Ok(ContentDraft::new(title, body))
    }
}

#[derive(Debug, Deserialize)]
pub struct SlugRequest {
    pub input: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TitlesResponse {
    pub suggestions: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaDescriptionResponse {
    pub meta_description: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub suggestions: Vec<Category>,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizeResponse {
    #[serde(flatten)]
    pub report: OptimizationReport,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub metrics: TextMetrics,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlugResponse {
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ai_available: bool,
}
