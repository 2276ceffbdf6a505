//! Bookgrab: a paginated catalog scraper
//!
//! This crate crawls a book catalog website category by category, extracts one
//! record per product listing, filters the records against configured criteria,
//! and serializes the results to JSON and XML alongside an optional API upload.

pub mod book;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;

use thiserror::Error;

/// Main error type for bookgrab operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Run cancelled")]
    Cancelled,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::DeError),
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

    #[error("Invalid environment value {var}={value}: {message}")]
    Env {
        var: String,
        value: String,
        message: String,
    },
}

/// Result type alias for bookgrab operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use book::Book;
pub use config::Config;
pub use crawler::{run_scrape, CategoryMap, Scraper};
