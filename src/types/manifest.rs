use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const VERSION_FIELD: &str = "version_number";

/// Manifest document kept as an ordered field map so unknown fields survive a rewrite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub fields: Map<String, Value>,
}

impl Manifest {
    pub fn version_number(&self) -> Option<&str> {
        self.fields.get(VERSION_FIELD).and_then(Value::as_str)
    }

    /// Replaces `version_number` in place, keeping its position in the field order.
    pub fn set_version_number(&mut self, version: &str) {
        self.fields
            .insert(VERSION_FIELD.to_string(), Value::String(version.to_string()));
    }
}
