//! Pure mappings from raw API entries to [`StyleRecord`] and [`ComponentRecord`].
//!
//! None of these functions fail: a missing field becomes an empty string
//! (or `false` for flags) and flows through to the rendered pages as such.

use super::{ComponentRecord, StyleRecord};
use crate::api::responses::{ComponentsResponse, RawComponent, RawStyle, StylesResponse};
use crate::types::Fetched;

pub fn normalize_style(style: &RawStyle) -> StyleRecord {
    let node_id = style.node_id.clone().unwrap_or_default();
    StyleRecord {
        id: node_id.clone(),
        name: style.name.clone().unwrap_or_default(),
        description: style.description.clone().unwrap_or_default(),
        style_type: style
            .style_type
            .as_deref()
            .unwrap_or_default()
            .to_lowercase(),
        file_key: style.file_key.clone().unwrap_or_default(),
        node_id,
        remote: style.remote.unwrap_or(false),
    }
}

pub fn normalize_component(component: &RawComponent) -> ComponentRecord {
    let node_id = component.node_id.clone().unwrap_or_default();
    ComponentRecord {
        id: node_id.clone(),
        name: component.name.clone().unwrap_or_default(),
        description: component.description.clone().unwrap_or_default(),
        file_key: component.file_key.clone().unwrap_or_default(),
        node_id,
        remote: component.remote.unwrap_or(false),
        thumbnail_url: component.thumbnail_url.clone().unwrap_or_default(),
    }
}

/// An absent listing normalizes to no records.
pub fn normalize_styles(fetched: &Fetched<StylesResponse>) -> Vec<StyleRecord> {
    fetched
        .as_data()
        .map(|response| response.meta.styles.iter().map(normalize_style).collect())
        .unwrap_or_default()
}

pub fn normalize_components(fetched: &Fetched<ComponentsResponse>) -> Vec<ComponentRecord> {
    fetched
        .as_data()
        .map(|response| {
            response
                .meta
                .components
                .iter()
                .map(normalize_component)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_style(value: serde_json::Value) -> RawStyle {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_style_defaults() {
        let style = raw_style(json!({ "node_id": "1:1", "name": "X", "style_type": "FILL" }));
        let record = normalize_style(&style);
        assert_eq!(
            record,
            StyleRecord {
                id: "1:1".to_string(),
                name: "X".to_string(),
                description: String::new(),
                style_type: "fill".to_string(),
                file_key: String::new(),
                node_id: "1:1".to_string(),
                remote: false,
            }
        );
    }

    #[test]
    fn test_style_normalization_is_repeatable() {
        let style = raw_style(json!({
            "node_id": "3:4",
            "name": "Heading",
            "style_type": "TEXT",
            "description": "Large titles",
            "file_key": "abc",
            "remote": true
        }));
        let first = normalize_style(&style);
        let second = normalize_style(&style);
        assert_eq!(first, second);
        assert_eq!(first.style_type, "text");
        assert!(first.remote);

        // Re-normalizing an already lower-cased type leaves it unchanged.
        let again = raw_style(json!({ "node_id": "3:4", "style_type": first.style_type }));
        assert_eq!(normalize_style(&again).style_type, "text");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let record = normalize_style(&RawStyle::default());
        assert_eq!(record.id, "");
        assert_eq!(record.style_type, "");
        assert!(!record.remote);
    }

    #[test]
    fn test_component_defaults() {
        let component: RawComponent =
            serde_json::from_value(json!({ "node_id": "2:2", "name": "Button" })).unwrap();
        let record = normalize_component(&component);
        assert_eq!(record.id, "2:2");
        assert_eq!(record.node_id, "2:2");
        assert_eq!(record.description, "");
        assert_eq!(record.thumbnail_url, "");
        assert!(!record.remote);
    }

    #[test]
    fn test_empty_listing_yields_no_records() {
        assert!(normalize_styles(&Fetched::Empty).is_empty());
        assert!(normalize_components(&Fetched::Empty).is_empty());

        let listing = Fetched::Data(StylesResponse::from_styles(vec![
            raw_style(json!({ "node_id": "1:1", "style_type": "FILL" })),
            raw_style(json!({ "node_id": "1:2", "style_type": "EFFECT" })),
        ]));
        let records = normalize_styles(&listing);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].style_type, "effect");
    }
}
