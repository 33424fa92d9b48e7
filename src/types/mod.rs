use thiserror::Error;

mod domain_types;
mod fetched;
mod ids;
mod locale;

pub use domain_types::*;
pub use fetched::*;
pub use ids::*;
pub use locale::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File key is required")]
    MissingFileKey,

    #[error("Node IDs are required")]
    MissingNodeIds,

    #[error("Invalid access token: {reason}")]
    InvalidAccessToken { reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported locale: {0} (expected 'en' or 'pt-BR')")]
    InvalidLocale(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),
}
