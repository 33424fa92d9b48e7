// src/design_system.rs
//! Orchestrates one documentation run: fetch, normalize, compose, deliver.

use crate::api::FigmaService;
use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::formatting::{compose_documentation, DocumentTemplates, DocumentationInput};
use crate::model::normalize::{normalize_components, normalize_styles};
use crate::model::{FileMetadata, GenerationResult, GenerationStats};
use crate::output::{deliver, OutputPlan, OutputReport};
use crate::pipeline::{DesignSnapshot, DesignSource, DocumentationComposer, DocumentationDelivery};
use crate::types::{FileKey, Locale};
use std::path::{Path, PathBuf};
use std::time::Instant;
use uuid::Uuid;

/// Generates Markdown documentation for a Figma file's styles and components.
pub struct DesignSystemService {
    figma: FigmaService,
    output_dir: PathBuf,
    locale: Locale,
    templates: DocumentTemplates,
}

impl DesignSystemService {
    pub fn new(
        figma: FigmaService,
        output_dir: impl Into<PathBuf>,
        locale: Locale,
    ) -> Result<Self, AppError> {
        Ok(Self {
            figma,
            output_dir: output_dir.into(),
            locale,
            templates: DocumentTemplates::new()?,
        })
    }

    /// Builds the service with the output directory and locale from `config`.
    pub fn from_config(figma: FigmaService, config: &ServiceConfig) -> Result<Self, AppError> {
        Self::new(figma, config.output_dir.clone(), config.locale)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Runs the full pipeline for `file_key`.
    ///
    /// The first failure aborts the run. Fetching and composing finish
    /// before the output directory is touched.
    pub async fn generate(&self, file_key: &str) -> Result<GenerationResult, AppError> {
        let key = FileKey::parse(file_key)?;
        let run_id = Uuid::new_v4();
        let started = Instant::now();
        log::info!("[{}] Generating documentation for file {}", run_id, key);

        let snapshot = self.fetch(&key).await.inspect_err(|e| {
            log::error!("[{}] Fetch failed: {}", run_id, e);
        })?;

        let input = DocumentationInput {
            styles: normalize_styles(&snapshot.styles),
            components: normalize_components(&snapshot.components),
            file: snapshot.file,
        };
        log::info!(
            "[{}] '{}': {} styles, {} components",
            run_id,
            input.file.name,
            input.styles.len(),
            input.components.len()
        );

        let plan = self.compose(&input)?;
        let report = DocumentationDelivery::deliver(self, plan)
            .await
            .inspect_err(|e| log::error!("[{}] Writing documentation failed: {}", run_id, e))?;

        log::info!(
            "[{}] Wrote {} files to {} in {}ms",
            run_id,
            report.stats.files_written,
            self.output_dir.display(),
            started.elapsed().as_millis()
        );

        Ok(GenerationResult {
            success: true,
            output_dir: self.output_dir.clone(),
            file_key: key.as_str().to_string(),
            stats: GenerationStats {
                styles: input.styles.len(),
                components: input.components.len(),
            },
        })
    }
}

#[async_trait::async_trait]
impl DesignSource for DesignSystemService {
    async fn fetch(&self, key: &FileKey) -> Result<DesignSnapshot, AppError> {
        let (file, styles, components) = futures::try_join!(
            self.figma.file(key.as_str()),
            self.figma.styles(key.as_str()),
            self.figma.components(key.as_str()),
        )?;

        Ok(DesignSnapshot {
            file: FileMetadata::from_payload(key, &file),
            styles,
            components,
        })
    }
}

impl DocumentationComposer for DesignSystemService {
    fn compose(&self, input: &DocumentationInput) -> Result<OutputPlan, AppError> {
        compose_documentation(input, &self.output_dir, self.locale.labels(), &self.templates)
    }
}

#[async_trait::async_trait]
impl DocumentationDelivery for DesignSystemService {
    async fn deliver(&self, plan: OutputPlan) -> Result<OutputReport, AppError> {
        deliver(plan).await
    }
}
