// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where file I/O operations occur,
//! keeping the rest of the codebase pure and testable.

use super::types::*;
use crate::error::AppError;
use std::path::Path;
use std::time::Instant;

/// Delivers the output plan, performing all I/O operations in order.
///
/// The first failing operation aborts delivery and its error is returned
/// unchanged; operations already performed are not rolled back.
pub async fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let mut report = OutputReport::new();
    let start_time = Instant::now();

    log::info!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in &plan.operations {
        let bytes_written = execute_operation(operation).await.inspect_err(|e| {
            log::error!("Operation failed: {}", e);
        })?;
        report.record(operation, bytes_written);
    }

    report.stats.total_duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Output plan complete: {} files, {} directories, {} bytes in {}ms",
        report.stats.files_written,
        report.stats.directories_created,
        report.stats.bytes_written,
        report.stats.total_duration_ms
    );

    Ok(report)
}

/// Executes a single output operation.
async fn execute_operation(operation: &DeliveryTarget) -> Result<usize, AppError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content).await,
        DeliveryTarget::CreateDirectory { path } => {
            create_directory(path).await?;
            Ok(0)
        }
    }
}

/// Writes content to a file.
async fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, content).await?;

    log::debug!("Wrote file: {}", path.display());
    Ok(content.len())
}

/// Creates a directory.
async fn create_directory(path: &Path) -> Result<(), AppError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => {
            log::debug!("Directory already exists: {}", path.display());
            return Ok(());
        }
        Ok(_) => {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("Path exists but is not a directory: {}", path.display()),
            )));
        }
        Err(_) => {}
    }

    tokio::fs::create_dir_all(path).await?;
    log::debug!("Created directory: {}", path.display());
    Ok(())
}
