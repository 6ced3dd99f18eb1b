//! Page-Survey: a polite single-page structure analyzer
//!
//! This crate fetches web pages, extracts a bounded structural summary of each
//! one (title, description, headings, links, images, meta tags) and writes the
//! summary to one JSON artifact per analyzed host.

pub mod analyzer;
pub mod config;
pub mod output;
pub mod record;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Page-Survey operations
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Persist error: {0}")]
    Persist(#[from] PersistError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::UrlState,
        to: state::UrlState,
    },
}

/// Fetch-stage failures, all terminal for the URL that produced them
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },
}

impl FetchError {
    /// Short name of the failure kind, used in logs and batch reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::Network { .. } => "network",
            Self::Timeout { .. } => "timeout",
            Self::HttpStatus { .. } => "http_status",
        }
    }
}

/// Write-stage failures
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode artifact: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("URL has no host to name the artifact after: {0}")]
    MissingHost(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Page-Survey operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for persist operations
pub type PersistResult<T> = std::result::Result<T, PersistError>;

// Re-export commonly used types
pub use analyzer::{extract, parse, run_batch, Coordinator, DocumentTree, Fetcher};
pub use config::Config;
pub use output::{BatchReport, JsonFilePersister, Persister};
pub use record::{AnalysisResult, PageRecord};
pub use state::UrlState;
