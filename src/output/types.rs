// src/output/types.rs
//! Type definitions for output operations.
//!
//! A documentation run is first planned as an immutable list of operations
//! and only then executed, so everything that can fail without touching the
//! disk fails before the first directory is created.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Represents a complete output plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPlan {
    /// Operations in execution order
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    /// Creates a new empty output plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the plan.
    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }

    /// Appends an operation in place.
    pub fn push(&mut self, operation: DeliveryTarget) {
        self.operations.push(operation);
    }

    /// Paths of every planned file, in write order.
    pub fn file_paths(&self) -> Vec<&Path> {
        self.operations
            .iter()
            .filter_map(|op| match op {
                DeliveryTarget::WriteFile { path, .. } => Some(path.as_path()),
                DeliveryTarget::CreateDirectory { .. } => None,
            })
            .collect()
    }

    /// File paths planned more than once, in the order the repeats occur.
    ///
    /// A repeated path means a later page overwrites an earlier one.
    pub fn duplicate_file_paths(&self) -> Vec<&Path> {
        let mut seen = HashSet::new();
        self.file_paths()
            .into_iter()
            .filter(|path| !seen.insert(*path))
            .collect()
    }

    /// Content planned for `path`, if any.
    pub fn content_of(&self, path: &Path) -> Option<&str> {
        self.operations.iter().find_map(|op| match op {
            DeliveryTarget::WriteFile { path: p, content } if p == path => Some(content.as_str()),
            _ => None,
        })
    }
}

/// Represents a single output operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Write content to a file, replacing it if present
    WriteFile { path: PathBuf, content: String },
    /// Create a directory and its parents if absent
    CreateDirectory { path: PathBuf },
}

/// Result of executing an output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub stats: ExecutionStats,
}

impl OutputReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one performed operation.
    pub fn record(&mut self, operation: &DeliveryTarget, bytes_written: usize) {
        match operation {
            DeliveryTarget::WriteFile { .. } => self.stats.files_written += 1,
            DeliveryTarget::CreateDirectory { .. } => self.stats.directories_created += 1,
        }
        self.stats.bytes_written += bytes_written;
    }
}

/// Execution statistics.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    pub files_written: usize,
    pub directories_created: usize,
    pub bytes_written: usize,
    pub total_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &str) -> DeliveryTarget {
        DeliveryTarget::WriteFile {
            path: PathBuf::from(path),
            content: String::new(),
        }
    }

    #[test]
    fn test_duplicate_file_paths() {
        let plan = OutputPlan::new()
            .with_operation(DeliveryTarget::CreateDirectory {
                path: PathBuf::from("/docs"),
            })
            .with_operation(write("/docs/a.md"))
            .with_operation(write("/docs/b.md"))
            .with_operation(write("/docs/a.md"));

        assert_eq!(plan.duplicate_file_paths(), vec![Path::new("/docs/a.md")]);
        assert!(OutputPlan::new()
            .with_operation(write("/docs/a.md"))
            .duplicate_file_paths()
            .is_empty());
    }
}
