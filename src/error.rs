use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during recipe ingestion
#[derive(Error, Debug)]
pub enum IngestError {
    /// Failed to fetch page content from a URL
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Uploaded file bytes were not valid UTF-8
    #[error("Failed to decode file as UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The record store rejected a read or write
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}
