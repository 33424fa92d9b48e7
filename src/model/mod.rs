// src/model/mod.rs
//! Normalized design-system records.
//!
//! Records are created fresh for every generation run from API payloads and
//! are never mutated afterwards.

pub mod normalize;

use crate::types::FileKey;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// What the generator needs to know about the file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    /// The file key the payload was fetched for.
    pub id: String,
    pub name: String,
    pub last_modified: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl FileMetadata {
    /// Reads the metadata out of a raw `GET /files/:key` payload.
    ///
    /// The name falls back to the document node's name, then to the file key.
    pub fn from_payload(key: &FileKey, payload: &Value) -> Self {
        let text = |pointer: &str| {
            payload
                .pointer(pointer)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        FileMetadata {
            id: key.as_str().to_string(),
            name: text("/name")
                .or_else(|| text("/document/name"))
                .unwrap_or_else(|| key.as_str().to_string()),
            last_modified: text("/lastModified"),
            thumbnail_url: text("/thumbnailUrl"),
        }
    }
}

/// A published style, keyed by its node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Lower-cased style type: `fill`, `text`, `effect`, `grid`.
    #[serde(rename = "type")]
    pub style_type: String,
    pub file_key: String,
    pub node_id: String,
    pub remote: bool,
}

/// A published component, keyed by its node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub file_key: String,
    pub node_id: String,
    pub remote: bool,
    pub thumbnail_url: String,
}

/// Counts reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GenerationStats {
    pub styles: usize,
    pub components: usize,
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    pub output_dir: PathBuf,
    pub file_key: String,
    pub stats: GenerationStats,
}
