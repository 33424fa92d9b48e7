// src/api/mod.rs
//! Figma API interaction: the ability to retrieve design data from a file.
//!
//! Transport (`client`), payload parsing (`parser`, `responses`) and input
//! validation (`service`) are kept apart so each can be tested alone.

pub mod client;
pub mod parser;
pub mod responses;
mod service;

use crate::error::AppError;
use crate::types::{Fetched, FileKey, NodeIds};
use responses::{ComponentsResponse, StylesResponse};
use serde_json::Value;

/// The ability to retrieve design data from the Figma API.
///
/// Business logic depends on this trait, never on HTTP details. Inputs are
/// already validated; implementations only fetch and decode.
#[async_trait::async_trait]
pub trait FigmaRepository: Send + Sync {
    /// Raw `GET /files/:key` payload.
    async fn retrieve_file(&self, key: &FileKey) -> Result<Value, AppError>;

    /// Raw `GET /files/:key/nodes?ids=...` payload, keyed by node id.
    async fn retrieve_nodes(&self, key: &FileKey, ids: &NodeIds) -> Result<Value, AppError>;

    async fn retrieve_styles(&self, key: &FileKey) -> Result<Fetched<StylesResponse>, AppError>;

    async fn retrieve_components(
        &self,
        key: &FileKey,
    ) -> Result<Fetched<ComponentsResponse>, AppError>;
}

// Re-export the public interface
pub use client::FigmaHttpClient;
pub use service::FigmaService;
