// src/error.rs

//! Unified error handling for the crawler application.

use std::fmt;

use thiserror::Error;

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Regular expression compilation failed
    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The listing page could not be fetched; the run cannot continue
    #[error("Failed to fetch listing page {url}: {source}")]
    ListingFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A single club detail page could not be fetched
    #[error("Failed to fetch detail page {url}: {source}")]
    DetailFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The output document could not be written
    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a regex compilation error.
    pub fn pattern(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The request URL is kept once, on the variant; the source is stripped
    /// of its own copy.
    pub fn listing_fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::ListingFetch {
            url: url.into(),
            source: source.without_url(),
        }
    }

    pub fn detail_fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::DetailFetch {
            url: url.into(),
            source: source.without_url(),
        }
    }

    pub fn write(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Write {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
