// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names what went wrong and where: bad input, missing
//! configuration, a failure reported by Figma, or a filesystem error while
//! writing documentation.

use std::fmt;
use thiserror::Error;

/// Figma API failure classes as a typed vocabulary.
///
/// Figma reports errors mostly through the HTTP status, with a free-form
/// `err` message in the body, so the vocabulary is keyed on the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FigmaErrorCode {
    /// The request parameters were rejected (e.g. malformed node ids)
    BadRequest,
    /// The token is invalid, expired, or lacks access to the file
    Forbidden,
    /// The file or node does not exist
    NotFound,
    /// API rate limit exceeded
    RateLimited,
    /// Figma internal server error
    ServerError,
    /// Any other HTTP status
    HttpStatus(u16),
}

impl FigmaErrorCode {
    /// Classify an HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 | 403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            other => Self::HttpStatus(other),
        }
    }
}

impl fmt::Display for FigmaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad_request"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServerError => write!(f, "server_error"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Figma API returned an error ({code}): {message}")]
    FigmaService {
        code: FigmaErrorCode,
        message: String,
        status: u16,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("HTTP server error: {0}")]
    Server(String),

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError {
            message: "Background task failed".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
