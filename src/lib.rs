// src/lib.rs
//! figma2docs library: proxies the Figma REST API and turns a file's
//! published styles and components into Markdown documentation.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling:** `AppError`, `FigmaErrorCode`, `ValidationError`
//! - **Configuration:** `CommandLineInput`, `Command`, `ServiceConfig`
//! - **Domain model:** `FileMetadata`, `StyleRecord`, `ComponentRecord`, `GenerationResult`
//! - **Domain types:** `FileKey`, `NodeIds`, `AccessToken`, `Fetched`, `Locale`
//! - **API client:** `FigmaRepository`, `FigmaHttpClient`, `FigmaService`
//! - **Documentation:** `DesignSystemService`, `compose_documentation`, `deliver`
//! - **HTTP server:** `ApiServer`, `Route`, `dispatch`

pub mod api;
mod config;
mod constants;
mod design_system;
mod error;
mod formatting;
pub mod model;
mod output;
mod pipeline;
mod server;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, FigmaErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{Command, CommandLineInput, ServiceConfig};

// --- Domain Model ---
pub use crate::model::{
    ComponentRecord, FileMetadata, GenerationResult, GenerationStats, StyleRecord,
};

// --- Domain Types ---
pub use crate::types::{AccessToken, Fetched, FileKey, Labels, Locale, NodeIds, ValidatedUrl};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    responses::{ComponentsResponse, RawComponent, RawStyle, StylesResponse},
    FigmaHttpClient, FigmaRepository, FigmaService,
};

// --- Documentation ---
pub use crate::design_system::DesignSystemService;
pub use crate::formatting::{compose_documentation, DocumentTemplates, DocumentationInput};
pub use crate::output::{deliver, DeliveryTarget, ExecutionStats, OutputPlan, OutputReport};

// --- Pipeline Traits ---
pub use crate::pipeline::{DesignSnapshot, DesignSource, DocumentationComposer, DocumentationDelivery};

// --- HTTP Server ---
pub use crate::server::{dispatch, ApiReply, ApiServer, AppState, Route};
