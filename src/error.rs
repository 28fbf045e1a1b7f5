use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Why a call to the generative backend produced no usable text.
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("AI backend is not configured")]
    Unavailable,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("response contained no text")]
    EmptyResponse,
}

impl AssistError {
    /// Unavailability is an expected, permanent state rather than a fault.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AssistError::Unavailable)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("category store unavailable: {0}")]
    Unavailable(String),
}
