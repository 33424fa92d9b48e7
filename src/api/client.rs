// src/api/client.rs
//! Pure HTTP client wrapper for the Figma REST API.
//!
//! A thin wrapper around reqwest that handles authentication and the
//! request/response round trip. Payload interpretation lives in `parser`.

use super::parser::{parse_json_payload, parse_meta_listing};
use super::responses::{ComponentsResponse, StylesResponse};
use crate::config::ServiceConfig;
use crate::constants::FIGMA_TOKEN_HEADER;
use crate::error::AppError;
use crate::types::{AccessToken, Fetched, FileKey, NodeIds, ValidatedUrl};
use reqwest::{header, Client, Response};
use serde_json::Value;

/// A thin wrapper around reqwest Client for Figma API requests.
#[derive(Debug, Clone)]
pub struct FigmaHttpClient {
    client: Client,
    base_url: ValidatedUrl,
}

impl FigmaHttpClient {
    /// Creates a new HTTP client with Figma API authentication.
    ///
    /// Fails before any request is made when no access token is configured.
    pub fn new(config: &ServiceConfig) -> Result<Self, AppError> {
        let token = config.access_token.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration("Figma access token is not configured".to_string())
        })?;

        let client = Client::builder()
            .default_headers(Self::create_headers(token)?)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Creates the default headers for Figma API requests.
    fn create_headers(token: &AccessToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            FIGMA_TOKEN_HEADER,
            header::HeaderValue::from_str(token.as_str()).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid access token format: {}", e))
            })?,
        );

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `segments` - Path segments below the base URL, each percent-encoded
    /// * `query` - Query parameters appended to the URL
    pub async fn get(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Response, AppError> {
        let url = self.base_url.join_segments(segments)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).query(query).send().await?;

        log::debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::FigmaRepository for FigmaHttpClient {
    async fn retrieve_file(&self, key: &FileKey) -> Result<Value, AppError> {
        let response = self.get(&["files", key.as_str()], &[]).await?;
        parse_json_payload(extract_response_text(response).await?)
    }

    async fn retrieve_nodes(&self, key: &FileKey, ids: &NodeIds) -> Result<Value, AppError> {
        let response = self
            .get(&["files", key.as_str(), "nodes"], &[("ids", ids.to_query_value())])
            .await?;
        parse_json_payload(extract_response_text(response).await?)
    }

    async fn retrieve_styles(&self, key: &FileKey) -> Result<Fetched<StylesResponse>, AppError> {
        let response = self.get(&["files", key.as_str(), "styles"], &[]).await?;
        parse_meta_listing(extract_response_text(response).await?, "styles")
    }

    async fn retrieve_components(
        &self,
        key: &FileKey,
    ) -> Result<Fetched<ComponentsResponse>, AppError> {
        let response = self
            .get(&["files", key.as_str(), "components"], &[])
            .await?;
        parse_meta_listing(extract_response_text(response).await?, "components")
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
