// src/formatting/composer.rs
//! Turns normalized records into an output plan.
//!
//! Nothing here touches the filesystem. Every page is rendered up front so
//! that a template failure aborts the run before the first directory exists.

use super::templates::{
    DocumentTemplates, COMPONENTS_README, COMPONENT_PAGE, INDEX_PAGE, STYLES_README, STYLE_PAGE,
};
use super::text::{display_timestamp, start_case};
use crate::constants::{
    ASSETS_DIR, COMPONENTS_DIR, INDEX_FILE, SECTION_INDEX_FILE, STYLES_DIR, UNTITLED,
};
use crate::error::AppError;
use crate::model::{ComponentRecord, FileMetadata, StyleRecord};
use crate::output::{page_file_name, sanitize_segment, DeliveryTarget, OutputPlan};
use crate::types::Labels;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;

/// Everything a documentation run renders.
#[derive(Debug, Clone)]
pub struct DocumentationInput {
    pub file: FileMetadata,
    pub styles: Vec<StyleRecord>,
    pub components: Vec<ComponentRecord>,
}

#[derive(Serialize)]
struct IndexView<'a> {
    labels: &'a Labels,
    name: &'a str,
    last_modified_line: String,
    style_count: usize,
    component_count: usize,
}

#[derive(Serialize)]
struct GroupView {
    title: String,
    links: String,
}

#[derive(Serialize)]
struct StylesReadmeView<'a> {
    labels: &'a Labels,
    groups: Vec<GroupView>,
}

#[derive(Serialize)]
struct StylePageView<'a> {
    labels: &'a Labels,
    name: &'a str,
    type_title: String,
    node_id: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct ComponentsReadmeView<'a> {
    labels: &'a Labels,
    links: String,
}

#[derive(Serialize)]
struct ComponentPageView<'a> {
    labels: &'a Labels,
    name: &'a str,
    node_id: &'a str,
    remote: &'a str,
    description: &'a str,
    thumbnail_line: String,
}

/// Plans the full documentation tree under `root`.
///
/// Operations are ordered so that each directory is created before the
/// files inside it: root, assets, index, styles (one directory per type
/// group, then its pages), styles README, components and their pages,
/// components README.
pub fn compose_documentation(
    input: &DocumentationInput,
    root: &Path,
    labels: &Labels,
    templates: &DocumentTemplates,
) -> Result<OutputPlan, AppError> {
    let mut plan = OutputPlan::new()
        .with_operation(DeliveryTarget::CreateDirectory {
            path: root.to_path_buf(),
        })
        .with_operation(DeliveryTarget::CreateDirectory {
            path: root.join(ASSETS_DIR),
        });

    plan.push(DeliveryTarget::WriteFile {
        path: root.join(INDEX_FILE),
        content: render_index(input, labels, templates)?,
    });

    compose_styles(&mut plan, &input.styles, &root.join(STYLES_DIR), labels, templates)?;
    compose_components(
        &mut plan,
        &input.components,
        &root.join(COMPONENTS_DIR),
        labels,
        templates,
    )?;

    for path in plan.duplicate_file_paths() {
        log::warn!(
            "Page {} is planned more than once; the later record overwrites it",
            path.display()
        );
    }

    log::debug!(
        "Composed {} operations for '{}'",
        plan.operations.len(),
        input.file.name
    );
    Ok(plan)
}

fn render_index(
    input: &DocumentationInput,
    labels: &Labels,
    templates: &DocumentTemplates,
) -> Result<String, AppError> {
    let last_modified_line = input
        .file
        .last_modified
        .as_deref()
        .map(|raw| format!("\n**{}:** {}\n", labels.last_modified, display_timestamp(raw)))
        .unwrap_or_default();

    templates.render(
        INDEX_PAGE,
        &IndexView {
            labels,
            name: &input.file.name,
            last_modified_line,
            style_count: input.styles.len(),
            component_count: input.components.len(),
        },
    )
}

/// Groups styles by type, keeping the order in which each type first appears.
fn group_by_type(styles: &[StyleRecord]) -> IndexMap<&str, Vec<&StyleRecord>> {
    let mut groups: IndexMap<&str, Vec<&StyleRecord>> = IndexMap::new();
    for style in styles {
        groups.entry(style.style_type.as_str()).or_default().push(style);
    }
    groups
}

fn compose_styles(
    plan: &mut OutputPlan,
    styles: &[StyleRecord],
    dir: &Path,
    labels: &Labels,
    templates: &DocumentTemplates,
) -> Result<(), AppError> {
    plan.push(DeliveryTarget::CreateDirectory {
        path: dir.to_path_buf(),
    });

    let groups = group_by_type(styles);
    let mut readme_groups = Vec::with_capacity(groups.len());

    for (style_type, members) in &groups {
        let type_segment = sanitize_segment(style_type);
        let type_dir = dir.join(&type_segment);
        let type_title = group_title(style_type);

        plan.push(DeliveryTarget::CreateDirectory {
            path: type_dir.clone(),
        });

        let mut links = String::new();
        for style in members {
            let file_name = page_file_name(&style.id);
            let content = templates.render(
                STYLE_PAGE,
                &StylePageView {
                    labels,
                    name: &style.name,
                    type_title: type_title.clone(),
                    node_id: &style.node_id,
                    description: description_or_placeholder(&style.description, labels),
                },
            )?;
            plan.push(DeliveryTarget::WriteFile {
                path: type_dir.join(&file_name),
                content,
            });
            push_link(&mut links, &style.name, &format!("{}/{}", type_segment, file_name));
        }

        readme_groups.push(GroupView {
            title: type_title,
            links,
        });
    }

    plan.push(DeliveryTarget::WriteFile {
        path: dir.join(SECTION_INDEX_FILE),
        content: templates.render(
            STYLES_README,
            &StylesReadmeView {
                labels,
                groups: readme_groups,
            },
        )?,
    });
    Ok(())
}

fn compose_components(
    plan: &mut OutputPlan,
    components: &[ComponentRecord],
    dir: &Path,
    labels: &Labels,
    templates: &DocumentTemplates,
) -> Result<(), AppError> {
    plan.push(DeliveryTarget::CreateDirectory {
        path: dir.to_path_buf(),
    });

    let mut links = String::new();
    for component in components {
        let file_name = page_file_name(&component.id);
        let thumbnail_line = if component.thumbnail_url.is_empty() {
            String::new()
        } else {
            format!("\n![Thumbnail]({})\n", component.thumbnail_url)
        };

        let content = templates.render(
            COMPONENT_PAGE,
            &ComponentPageView {
                labels,
                name: &component.name,
                node_id: &component.node_id,
                remote: if component.remote { labels.yes } else { labels.no },
                description: description_or_placeholder(&component.description, labels),
                thumbnail_line,
            },
        )?;
        plan.push(DeliveryTarget::WriteFile {
            path: dir.join(&file_name),
            content,
        });
        push_link(&mut links, &component.name, &file_name);
    }

    plan.push(DeliveryTarget::WriteFile {
        path: dir.join(SECTION_INDEX_FILE),
        content: templates.render(COMPONENTS_README, &ComponentsReadmeView { labels, links })?,
    });
    Ok(())
}

/// Heading of a style type group; blank types share the `untitled` directory's name.
fn group_title(style_type: &str) -> String {
    match start_case(style_type) {
        title if title.is_empty() => start_case(UNTITLED),
        title => title,
    }
}

/// Appends one `- [name](target)` list line.
fn push_link(links: &mut String, name: &str, target: &str) {
    links.push_str(&format!("- [{}]({})\n", name, target));
}

fn description_or_placeholder<'a>(description: &'a str, labels: &'a Labels) -> &'a str {
    if description.trim().is_empty() {
        labels.no_description
    } else {
        description
    }
}
