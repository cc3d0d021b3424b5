use crate::error::ModpackError;
use crate::types::manifest::{Manifest, VERSION_FIELD};
use crate::utils::{fs as ufs, semver::Version};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads a manifest file.
///
/// ### Parameters
/// - `path`: The path of the manifest JSON file
///
pub fn load_manifest(path: &Path) -> Result<Manifest, ModpackError> {
    if !path.is_file() {
        return Err(ModpackError::not_found("Manifest", path));
    }
    let txt = fs::read_to_string(path)
        .map_err(|e| ModpackError::io(format!("Failed to read {}", path.display()), e))?;
    let value: Value = serde_json::from_str(&txt).map_err(|e| {
        ModpackError::Format(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;
    match value {
        Value::Object(fields) => Ok(Manifest { fields }),
        other => Err(ModpackError::Format(format!(
            "Invalid manifest {}: expected a JSON object, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

/// Rewrites a manifest file with every field, in order, as indented JSON.
///
/// ### Parameters
/// - `path`: The path of the manifest JSON file
/// - `manifest`: The manifest to persist
///
pub fn save_manifest(path: &Path, manifest: &Manifest) -> Result<(), ModpackError> {
    let mut txt = serde_json::to_string_pretty(manifest)
        .map_err(|e| ModpackError::Format(format!("Failed to serialize manifest: {}", e)))?;
    txt.push('\n');
    ufs::write_atomic(path, txt.as_bytes())
}

/// Reads and parses the `version_number` field of a manifest.
pub fn manifest_version(manifest: &Manifest, path: &Path) -> Result<Version, ModpackError> {
    match manifest.fields.get(VERSION_FIELD) {
        Some(Value::String(s)) => Version::parse(s),
        Some(other) => Err(ModpackError::Format(format!(
            "Field '{}' in {} must be a string, found {}",
            VERSION_FIELD,
            path.display(),
            json_kind(other)
        ))),
        None => Err(ModpackError::Format(format!(
            "Field '{}' missing from {}",
            VERSION_FIELD,
            path.display()
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
