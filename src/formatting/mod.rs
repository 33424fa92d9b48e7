// src/formatting/mod.rs
//! Renders normalized design-system records into Markdown pages.

mod composer;
mod templates;
pub mod text;

pub use self::composer::{compose_documentation, DocumentationInput};
pub use self::templates::DocumentTemplates;
