// src/formatting/templates.rs
//! Handlebars templates for every generated page.
//!
//! Templates are compiled once per service and rendered with escaping
//! disabled, since the output is Markdown rather than HTML. Optional lines
//! and link lists are prepared by the caller; the only block helper is the
//! group loop, whose closing tag sits at the end of the template.

use crate::error::AppError;
use handlebars::Handlebars;
use serde::Serialize;

pub const INDEX_PAGE: &str = "index";
pub const STYLES_README: &str = "styles_readme";
pub const STYLE_PAGE: &str = "style_page";
pub const COMPONENTS_README: &str = "components_readme";
pub const COMPONENT_PAGE: &str = "component_page";

const INDEX_TEMPLATE: &str = "# {{name}} - {{labels.design_system}}\n\n\
## {{labels.overview}}\n\n\
{{labels.overview_body}}\n\
{{last_modified_line}}\n\
## {{labels.styles}}\n\n\
{{labels.total_styles}}: {{style_count}}\n\n\
## {{labels.components}}\n\n\
{{labels.total_components}}: {{component_count}}\n";

const STYLES_README_TEMPLATE: &str = "# {{labels.styles}}\n\n\
{{#each groups}}## {{title}}\n\n{{links}}\n{{/each}}";

const STYLE_PAGE_TEMPLATE: &str = "# {{name}}\n\n\
**{{labels.style_type}}:** {{type_title}}\n\n\
**{{labels.node_id}}:** {{node_id}}\n\n\
{{description}}\n";

const COMPONENTS_README_TEMPLATE: &str = "# {{labels.components}}\n\n{{links}}";

const COMPONENT_PAGE_TEMPLATE: &str = "# {{name}}\n\n\
**{{labels.node_id}}:** {{node_id}}\n\n\
**{{labels.remote}}:** {{remote}}\n\n\
{{description}}\n\
{{thumbnail_line}}";

/// Compiled page templates.
pub struct DocumentTemplates {
    registry: Handlebars<'static>,
}

impl DocumentTemplates {
    /// Compiles all page templates.
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for (name, source) in [
            (INDEX_PAGE, INDEX_TEMPLATE),
            (STYLES_README, STYLES_README_TEMPLATE),
            (STYLE_PAGE, STYLE_PAGE_TEMPLATE),
            (COMPONENTS_README, COMPONENTS_README_TEMPLATE),
            (COMPONENT_PAGE, COMPONENT_PAGE_TEMPLATE),
        ] {
            registry
                .register_template_string(name, source)
                .map_err(|e| AppError::TemplateRenderError {
                    name: name.to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self { registry })
    }

    /// Renders one page template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, AppError> {
        self.registry
            .render(name, data)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_templates_compile() {
        assert!(DocumentTemplates::new().is_ok());
    }

    #[test]
    fn test_markdown_is_not_html_escaped() {
        let templates = DocumentTemplates::new().unwrap();
        let page = templates
            .render(
                STYLE_PAGE,
                &json!({
                    "labels": { "style_type": "Type", "node_id": "Node ID" },
                    "name": "Black & White <primary>",
                    "type_title": "Fill",
                    "node_id": "1:1",
                    "description": "Use \"sparingly\""
                }),
            )
            .unwrap();
        assert_eq!(
            page,
            "# Black & White <primary>\n\n**Type:** Fill\n\n**Node ID:** 1:1\n\nUse \"sparingly\"\n"
        );
    }

    #[test]
    fn test_strict_mode_rejects_missing_fields() {
        let templates = DocumentTemplates::new().unwrap();
        let err = templates.render(STYLE_PAGE, &json!({})).unwrap_err();
        assert!(matches!(err, AppError::TemplateRenderError { .. }));
    }
}
