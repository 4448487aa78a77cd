//! Pipeline reference as embedded in other resources.

use serde::{Deserialize, Serialize};

/// A pipeline as it appears inside a pipeline group.
///
/// Only the name is typed. Every other field the server sends (label
/// template, materials, stages, links) is kept untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Pipeline {
    /// The pipeline name.
    pub name: String,

    /// Remaining fields, as sent by the server.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Pipeline {
    /// Returns an untyped field by name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}
