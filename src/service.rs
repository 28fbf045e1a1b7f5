use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::config::{AiConfig, Availability};
use crate::error::AssistError;
use crate::fallback;
use crate::llm::{GeminiClient, TextGenerator};
use crate::optimize::{parse_optimization, OptimizationReport};
use crate::parse;
use crate::prompts;
use crate::Category;

/// Entry point for the drafting helpers.
///
/// Availability is fixed at construction. When the backend is unavailable,
/// or a call fails, every operation answers from the local heuristics
/// instead; none of them returns an error.
pub struct AiContentService {
    generator: Option<Arc<dyn TextGenerator>>,
    availability: Availability,
    timeout: Duration,
}

impl AiContentService {
    /// Wire the service to `generator`, which is only kept if `config`
    /// makes the backend available.
    pub fn new(config: &AiConfig, generator: Arc<dyn TextGenerator>) -> Self {
        let availability = config.availability();
        Self {
            generator: availability.is_available().then_some(generator),
            availability,
            timeout: config.timeout(),
        }
    }

    /// Build the service around a Gemini client.
    pub fn from_config(config: &AiConfig) -> Result<Self, AssistError> {
        let availability = config.availability();
        let generator = if availability.is_available() {
            GeminiClient::from_config(config)?.map(|client| Arc::new(client) as Arc<dyn TextGenerator>)
        } else {
            None
        };
        if !availability.is_available() {
            warn!(reason = availability.label(), "AI assist running in fallback mode");
        }
        Ok(Self {
            generator,
            availability,
            timeout: config.timeout(),
        })
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn generate_title_suggestions(&self, content: &str) -> Vec<String> {
        match self.complete("titles", prompts::titles(content)).await {
            Ok(text) => {
                let titles = parse::parse_titles(&text);
                if titles.is_empty() {
                    warn!(operation = "titles", "AI response had no usable titles; using fallback");
                    return fallback::fallback_titles(content);
                }
                titles
            }
            Err(err) => {
                log_failure("titles", &err);
                fallback::fallback_titles(content)
            }
        }
    }

    pub async fn generate_seo_keywords(&self, title: &str, content: &str) -> Vec<String> {
        match self.complete("keywords", prompts::keywords(title, content)).await {
            Ok(text) => {
                let keywords = parse::parse_keywords(&text);
                if keywords.is_empty() {
                    warn!(operation = "keywords", "AI response had no usable keywords; using fallback");
                    return fallback::fallback_keywords(title, content);
                }
                keywords
            }
            Err(err) => {
                log_failure("keywords", &err);
                fallback::fallback_keywords(title, content)
            }
        }
    }

    pub async fn generate_meta_description(&self, title: &str, content: &str) -> String {
        match self
            .complete("meta_description", prompts::meta_description(title, content))
            .await
        {
            Ok(text) => {
                let description = parse::parse_meta_description(&text);
                if description.is_empty() {
                    warn!(operation = "meta_description", "AI response was empty; using fallback");
                    return fallback::fallback_meta_description(title, content);
                }
                description
            }
            Err(err) => {
                log_failure("meta_description", &err);
                fallback::fallback_meta_description(title, content)
            }
        }
    }

    /// Up to three of `existing` that fit the post. Empty without the backend.
    pub async fn suggest_categories(
        &self,
        title: &str,
        content: &str,
        existing: &[Category],
    ) -> Vec<String> {
        if existing.is_empty() {
            return Vec::new();
        }
        match self
            .complete("categories", prompts::categories(title, content, existing))
            .await
        {
            Ok(text) => parse::parse_categories(&text, existing),
            Err(err) => {
                log_failure("categories", &err);
                Vec::new()
            }
        }
    }

    pub async fn optimize_content(&self, content: &str) -> OptimizationReport {
        match self.complete("optimize", prompts::optimize(content)).await {
            Ok(text) => parse_optimization(&text),
            Err(err) => {
                log_failure("optimize", &err);
                fallback::fallback_optimization()
            }
        }
    }

    async fn complete(&self, operation: &'static str, prompt: String) -> Result<String, AssistError> {
        let Some(generator) = self.generator.as_ref() else {
            return Err(AssistError::Unavailable);
        };
        debug!(operation, prompt_chars = prompt.len(), "calling AI backend");
        match tokio::time::timeout(self.timeout, generator.generate(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(AssistError::Timeout(self.timeout)),
        }
    }
}

fn log_failure(operation: &'static str, err: &AssistError) {
    if err.is_unavailable() {
        debug!(operation, "AI backend unavailable; using fallback");
    } else {
        error!(operation, error = %err, "AI request failed; using fallback");
    }
}
