use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A hosted site registered with the provider.
///
/// Only `id` and `name` are inspected by this tool. The provider attaches a
/// lot more to the payload and changes it over time, so the rest is kept
/// as-is in `extra` rather than pinned to a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of a deploy upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deploy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Provider-side lifecycle state, e.g. "uploading", "processing", "ready".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
