// src/api/service.rs
//! Validating adapter over a [`FigmaRepository`].
//!
//! Callers hand in raw strings from the HTTP layer or the CLI; this is the
//! one place they are checked before any request goes out.

use super::responses::{ComponentsResponse, StylesResponse};
use super::{FigmaHttpClient, FigmaRepository};
use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::types::{Fetched, FileKey, NodeIds};
use serde_json::Value;
use std::sync::Arc;

/// Entry point for the four Figma operations.
#[derive(Clone)]
pub struct FigmaService {
    repository: Arc<dyn FigmaRepository>,
}

impl FigmaService {
    /// Wraps an existing repository (an HTTP client or a test double).
    pub fn new(repository: Arc<dyn FigmaRepository>) -> Self {
        Self { repository }
    }

    /// Builds the service over the HTTP client.
    ///
    /// Fails with a configuration error when no access token is configured.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, AppError> {
        let client = FigmaHttpClient::new(config)?;
        log::info!("Figma client ready (base URL: {})", config.api_base_url);
        Ok(Self::new(Arc::new(client)))
    }

    /// Fetches the file document; the payload is returned unchanged.
    pub async fn file(&self, file_key: &str) -> Result<Value, AppError> {
        let key = FileKey::parse(file_key)?;
        self.repository
            .retrieve_file(&key)
            .await
            .inspect_err(|e| log::error!("Error fetching Figma file {}: {}", key, e))
    }

    /// Fetches specific nodes; the payload is returned unchanged.
    pub async fn nodes<S>(&self, file_key: &str, node_ids: &[S]) -> Result<Value, AppError>
    where
        S: AsRef<str> + Sync,
    {
        let key = FileKey::parse(file_key)?;
        let ids = NodeIds::new(node_ids)?;
        self.repository
            .retrieve_nodes(&key, &ids)
            .await
            .inspect_err(|e| log::error!("Error fetching Figma nodes for {}: {}", key, e))
    }

    pub async fn styles(&self, file_key: &str) -> Result<Fetched<StylesResponse>, AppError> {
        let key = FileKey::parse(file_key)?;
        self.repository
            .retrieve_styles(&key)
            .await
            .inspect_err(|e| log::error!("Error fetching Figma styles for {}: {}", key, e))
    }

    pub async fn components(
        &self,
        file_key: &str,
    ) -> Result<Fetched<ComponentsResponse>, AppError> {
        let key = FileKey::parse(file_key)?;
        self.repository
            .retrieve_components(&key)
            .await
            .inspect_err(|e| log::error!("Error fetching Figma components for {}: {}", key, e))
    }
}
