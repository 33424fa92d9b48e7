// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Plans are built by pure functions in `formatting`; `writer` is the only
//! code that touches the filesystem.

mod paths;
mod types;
mod writer;

// Re-export the public interface
pub use paths::{page_file_name, sanitize_segment};
pub use types::{DeliveryTarget, ExecutionStats, OutputPlan, OutputReport};
pub use writer::deliver;
