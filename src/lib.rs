pub mod api;
pub mod categories;
pub mod config;
pub mod error;
pub mod fallback;
pub mod llm;
pub mod optimize;
pub mod parse;
pub mod prompts;
pub mod server;
pub mod service;
pub mod text;

use serde::{Deserialize, Serialize};

pub use categories::{Category, CategoryRepository, StaticCategories};
pub use config::{AiConfig, AssistConfig, Availability};
pub use error::{AssistError, CategoryError, ConfigError};
pub use llm::{GeminiClient, TextGenerator};
pub use optimize::OptimizationReport;
pub use service::AiContentService;

/// A title and body under edit, handed to the helpers for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl ContentDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
