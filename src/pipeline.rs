// src/pipeline.rs
//! Pipeline capability traits covering the three stages of a documentation run.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::api::responses::{ComponentsResponse, StylesResponse};
use crate::error::AppError;
use crate::formatting::DocumentationInput;
use crate::model::FileMetadata;
use crate::output::{OutputPlan, OutputReport};
use crate::types::{Fetched, FileKey};

/// Raw results of the three fetches a run needs.
#[derive(Debug, Clone)]
pub struct DesignSnapshot {
    pub file: FileMetadata,
    pub styles: Fetched<StylesResponse>,
    pub components: Fetched<ComponentsResponse>,
}

/// Retrieves everything a run documents for one file.
#[async_trait::async_trait]
pub trait DesignSource {
    async fn fetch(&self, key: &FileKey) -> Result<DesignSnapshot, AppError>;
}

/// Plans the documentation tree for normalized records.
pub trait DocumentationComposer {
    fn compose(&self, input: &DocumentationInput) -> Result<OutputPlan, AppError>;
}

/// Writes a planned documentation tree.
#[async_trait::async_trait]
pub trait DocumentationDelivery {
    async fn deliver(&self, plan: OutputPlan) -> Result<OutputReport, AppError>;
}
