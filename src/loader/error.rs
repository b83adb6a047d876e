use crate::validation::error::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read dataset file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    // Covers errors during download stream processing and decompression
    #[error("Dataset download or decompression failed for {0}")]
    Download(String, #[source] std::io::Error),

    #[error("Dataset is not valid JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
