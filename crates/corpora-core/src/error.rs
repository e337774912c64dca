use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid boundary pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("HTTP client construction failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Unknown stopword language: {0}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
