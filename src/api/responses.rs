// src/api/responses.rs
//! Typed views of the Figma API payloads the generator consumes.
//!
//! Every field Figma may omit is optional, and unknown fields are kept in
//! `extra` so a proxied payload serializes back with its original content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A published style as listed by `GET /files/:key/styles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A published component as listed by `GET /files/:key/components`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{ "meta": { "styles": [...] }, ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylesResponse {
    pub meta: StylesMeta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylesMeta {
    pub styles: Vec<RawStyle>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{ "meta": { "components": [...] }, ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentsResponse {
    pub meta: ComponentsMeta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentsMeta {
    pub components: Vec<RawComponent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StylesResponse {
    pub fn from_styles(styles: Vec<RawStyle>) -> Self {
        Self {
            meta: StylesMeta {
                styles,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }
}

impl ComponentsResponse {
    pub fn from_components(components: Vec<RawComponent>) -> Self {
        Self {
            meta: ComponentsMeta {
                components,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }
}

/// Error body returned by Figma on non-2xx responses.
///
/// Figma uses either `{ "status": 404, "err": "Not found" }` or
/// `{ "status": 403, "error": true, "message": "Invalid token" }`.
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FigmaErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.err.as_deref().or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_envelope_shape() {
        assert_eq!(
            serde_json::to_value(StylesResponse::default()).unwrap(),
            json!({ "meta": { "styles": [] } })
        );
        assert_eq!(
            serde_json::to_value(ComponentsResponse::default()).unwrap(),
            json!({ "meta": { "components": [] } })
        );
    }

    #[test]
    fn test_unknown_fields_survive_proxying() {
        let payload = json!({
            "status": 200,
            "error": false,
            "meta": {
                "styles": [{
                    "key": "k1",
                    "node_id": "1:1",
                    "name": "Primary",
                    "style_type": "FILL",
                    "sort_position": "a",
                    "user": { "handle": "designer" }
                }]
            }
        });
        let parsed: StylesResponse = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(parsed.meta.styles[0].node_id.as_deref(), Some("1:1"));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), payload);
    }

    #[test]
    fn test_error_body_message() {
        let body: FigmaErrorBody =
            serde_json::from_value(json!({ "status": 404, "err": "Not found" })).unwrap();
        assert_eq!(body.message(), Some("Not found"));

        let body: FigmaErrorBody = serde_json::from_value(
            json!({ "status": 403, "error": true, "message": "Invalid token" }),
        )
        .unwrap();
        assert_eq!(body.message(), Some("Invalid token"));
    }
}
