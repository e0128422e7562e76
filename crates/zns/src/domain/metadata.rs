//! Metadata Normalization
//!
//! Metadata documents come in many shapes. [`NormalizedMetadata::from_document`]
//! reduces any JSON value to the canonical record; missing, empty or
//! mistyped fields become `None` and unknown fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::gateway::IpfsGateway;

/// Canonical metadata record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub animation_url: Option<String>,
    pub attributes: Option<Value>,
}

impl NormalizedMetadata {
    /// Map a raw document to the canonical shape
    ///
    /// Precedence is fixed: `title` before `name`, `image` before
    /// `image_full`. Image and animation URLs go through the gateway.
    pub fn from_document(doc: &Value, gateway: &IpfsGateway) -> Self {
        let title = first_text(doc, &["title", "name"]);
        let description = first_text(doc, &["description"]);
        let image_url =
            first_text(doc, &["image", "image_full"]).map(|url| gateway.normalize_url(&url));
        let animation_url =
            first_text(doc, &["animation_url"]).map(|url| gateway.normalize_url(&url));
        let attributes = doc.get("attributes").filter(|v| !v.is_null()).cloned();

        Self {
            title,
            description,
            image_url,
            animation_url,
            attributes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// First field among `keys` holding a non-empty string
fn first_text(doc: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| doc.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Whether a fetched body counts as "no document"
pub fn is_blank_document(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}
