use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub timeout_ms: u64,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            temperature: 0.7,
            max_output_tokens: 1000,
        }
    }
}

impl AiConfig {
    /// Upstream call budget. Zero is treated as unset.
    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            0 => Duration::from_millis(DEFAULT_TIMEOUT_MS),
            ms => Duration::from_millis(ms),
        }
    }

    /// Decided once; a service built from this config keeps the answer.
    pub fn availability(&self) -> Availability {
        if !self.enabled {
            return Availability::Disabled;
        }
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Availability::Available,
            _ => Availability::MissingCredential,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    MissingCredential,
    Disabled,
}

impl Availability {
    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::MissingCredential => "missing credential",
            Availability::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistConfig {
    pub ai: AiConfig,
    pub server: ServerConfig,
    pub categories: Vec<CategoryConfig>,
}

impl AssistConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::read(path)?,
            _ => AssistConfig::default(),
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok((config, config_path))
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(write_err)?;
        Ok(())
    }

    /// Apply `GOOGLE_GEMINI_API_KEY`-style overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = present("GOOGLE_GEMINI_API_KEY") {
            self.ai.api_key = Some(key);
        }
        if let Some(enabled) = present("AI_ASSIST_ENABLED").and_then(|value| parse_flag(&value)) {
            self.ai.enabled = enabled;
        }
        if let Some(model) = present("GEMINI_MODEL") {
            self.ai.model = model;
        }
        if let Some(api_base) = present("GEMINI_API_BASE") {
            self.ai.api_base = api_base;
        }
        if let Some(timeout) = present("GEMINI_TIMEOUT_MS").and_then(|value| value.trim().parse().ok()) {
            self.ai.timeout_ms = timeout;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("BLOG_ASSIST_CONFIG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/assist.toml")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn availability_needs_key_and_flag() {
        let mut ai = AiConfig::default();
        assert_eq!(ai.availability(), Availability::MissingCredential);

        ai.api_key = Some("   ".to_string());
        assert_eq!(ai.availability(), Availability::MissingCredential);

        ai.api_key = Some("secret".to_string());
        assert!(ai.availability().is_available());

        ai.enabled = false;
        assert_eq!(ai.availability(), Availability::Disabled);
    }

    #[test]
    fn env_overrides_apply_and_ignore_blanks() {
        let mut config = AssistConfig::default();
        config.apply_overrides(lookup(&[
            ("GOOGLE_GEMINI_API_KEY", "k-123"),
            ("AI_ASSIST_ENABLED", "off"),
            ("GEMINI_MODEL", "  "),
            ("GEMINI_TIMEOUT_MS", "2500"),
        ]));
        assert_eq!(config.ai.api_key.as_deref(), Some("k-123"));
        assert!(!config.ai.enabled);
        assert_eq!(config.ai.model, "gemini-1.5-flash");
        assert_eq!(config.ai.timeout(), Duration::from_millis(2500));
    }

    #[test]
    fn zero_timeout_uses_the_default() {
        let mut config = AssistConfig::default();
        config.apply_overrides(lookup(&[("GEMINI_TIMEOUT_MS", "0")]));
        assert_eq!(config.ai.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));

        let config: AssistConfig = toml::from_str("[ai]\ntimeout_ms = 0\n").unwrap();
        assert_eq!(config.ai.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: AssistConfig = toml::from_str(
            r#"
            [ai]
            model = "gemini-2.0-flash"

            [[categories]]
            name = "Rust"

            [[categories]]
            name = "Web Development"
            slug = "web"
            "#,
        )
        .unwrap();
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert!(config.ai.enabled);
        assert_eq!(config.ai.timeout_ms, 10_000);
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories[1].slug.as_deref(), Some("web"));
    }

    #[test]
    fn write_then_read_preserves_settings() {
        let dir = std::env::temp_dir().join(format!("blog-assist-config-{}", std::process::id()));
        let path = dir.join("assist.toml");
        let mut config = AssistConfig::default();
        config.server.port = 9000;
        config.categories.push(CategoryConfig {
            name: "Rust".to_string(),
            slug: None,
        });

        config.write(&path).unwrap();
        let loaded = AssistConfig::read(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded.server.port, 9000);
        assert_eq!(loaded.categories, config.categories);
    }

    #[test]
    fn malformed_toml_reports_the_path() {
        let dir = std::env::temp_dir().join(format!("blog-assist-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("assist.toml");
        std::fs::write(&path, "[ai\nmodel = ").unwrap();

        let err = AssistConfig::read(&path).unwrap_err();
        std::fs::remove_dir_all(&dir).ok();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("assist.toml"));
    }
}
