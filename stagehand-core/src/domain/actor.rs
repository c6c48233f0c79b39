//! Actor domain types
//!
//! An actor is a packaged job definition hosted on the remote platform. The
//! relay only reads actor metadata; it never executes actor logic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actor summary as returned by the platform's listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One page of the platform's actor listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorPage {
    #[serde(default)]
    pub total: u64,
    pub items: Vec<Actor>,
}

/// Full actor record including its declared input schema, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub input_schema: Option<InputSchema>,
}

/// Declared input schema for an actor: field name to field definition.
///
/// Read-only metadata used by the form layer to render editable fields; the
/// relay itself treats submitted input as opaque JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSchema {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, InputField>,
    #[serde(default)]
    pub required: Vec<String>,
}

/// Definition of a single input field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(rename = "enum", default)]
    pub allowed_values: Option<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_schema_deserializes() {
        let schema: InputSchema = serde_json::from_str(
            r#"{
                "title": "Scraper input",
                "properties": {
                    "url": {"type": "string", "title": "Start URL"},
                    "mode": {"type": "string", "enum": ["fast", "full"]}
                },
                "required": ["url"]
            }"#,
        )
        .unwrap();

        assert_eq!(schema.title.as_deref(), Some("Scraper input"));
        assert_eq!(schema.required, vec!["url"]);

        let mode = &schema.properties["mode"];
        assert_eq!(mode.field_type, "string");
        assert_eq!(mode.allowed_values.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_actor_detail_without_schema() {
        let detail: ActorDetail =
            serde_json::from_str(r#"{"id":"a1","name":"web-scraper"}"#).unwrap();
        assert_eq!(detail.id, "a1");
        assert!(detail.input_schema.is_none());
    }
}
