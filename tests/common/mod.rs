// tests/common/mod.rs
//! In-memory Figma API for integration tests.
//!
//! Responses are stored as raw HTTP bodies keyed by endpoint and decoded by
//! the crate's own parsers, so tests exercise the same decoding as production.

#![allow(dead_code)]

use figma2docs::api::parser::{parse_json_payload, parse_meta_listing};
use figma2docs::{
    ApiResponse, AppError, ComponentsResponse, Fetched, FigmaRepository, FigmaService, FileKey,
    NodeIds, StylesResponse,
};
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const FILE_KEY: &str = "brandkit123";

/// Mock repository that answers from stored bodies instead of the network.
#[derive(Clone, Default)]
pub struct MockFigmaRepository {
    responses: Arc<RwLock<HashMap<String, (StatusCode, String)>>>,
    requests: Arc<AtomicUsize>,
}

impl MockFigmaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository serving the "Brand Kit" fixtures under [`FILE_KEY`].
    pub async fn brand_kit() -> Self {
        let repo = Self::new();
        repo.respond(
            &format!("files/{}", FILE_KEY),
            StatusCode::OK,
            include_str!("../fixtures/api_responses/file_brand_kit.json"),
        )
        .await;
        repo.respond(
            &format!("files/{}/styles", FILE_KEY),
            StatusCode::OK,
            include_str!("../fixtures/api_responses/styles_brand_kit.json"),
        )
        .await;
        repo.respond(
            &format!("files/{}/components", FILE_KEY),
            StatusCode::OK,
            include_str!("../fixtures/api_responses/components_brand_kit.json"),
        )
        .await;
        repo
    }

    pub async fn respond(&self, endpoint: &str, status: StatusCode, body: &str) {
        self.responses
            .write()
            .await
            .insert(endpoint.to_string(), (status, body.to_string()));
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn service(&self) -> FigmaService {
        FigmaService::new(Arc::new(self.clone()))
    }

    async fn get(&self, endpoint: String) -> ApiResponse<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let (status, data) = self
            .responses
            .read()
            .await
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| {
                (
                    StatusCode::NOT_FOUND,
                    r#"{"status":404,"err":"Not found"}"#.to_string(),
                )
            });
        ApiResponse {
            data,
            status,
            url: format!("mock://{}", endpoint),
        }
    }
}

#[async_trait::async_trait]
impl FigmaRepository for MockFigmaRepository {
    async fn retrieve_file(&self, key: &FileKey) -> Result<Value, AppError> {
        parse_json_payload(self.get(format!("files/{}", key)).await)
    }

    async fn retrieve_nodes(&self, key: &FileKey, ids: &NodeIds) -> Result<Value, AppError> {
        parse_json_payload(
            self.get(format!("files/{}/nodes?ids={}", key, ids.to_query_value()))
                .await,
        )
    }

    async fn retrieve_styles(&self, key: &FileKey) -> Result<Fetched<StylesResponse>, AppError> {
        parse_meta_listing(self.get(format!("files/{}/styles", key)).await, "styles")
    }

    async fn retrieve_components(
        &self,
        key: &FileKey,
    ) -> Result<Fetched<ComponentsResponse>, AppError> {
        parse_meta_listing(
            self.get(format!("files/{}/components", key)).await,
            "components",
        )
    }
}

/// A unique, not-yet-created directory under the system temp dir.
pub fn scratch_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("figma2docs_{}_{}", label, uuid::Uuid::new_v4()))
}

/// Relative paths of every file under `root`, sorted.
pub fn files_under(root: &std::path::Path) -> Vec<String> {
    fn walk(dir: &std::path::Path, root: &std::path::Path, out: &mut Vec<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(&path, root, out);
            } else if let Ok(relative) = path.strip_prefix(root) {
                out.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
