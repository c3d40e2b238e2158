//! Version fields in JSON manifests (tauri.conf.json, package.json).

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::BumpError;

/// Read the string at `key_path`, if present.
pub fn read_version(path: &Path, content: &str, key_path: &[&str]) -> Result<Option<String>, BumpError> {
    let json = parse(path, content)?;

    let mut node = &json;
    for key in key_path {
        match node.get(key) {
            Some(next) => node = next,
            None => return Ok(None),
        }
    }

    Ok(node.as_str().map(String::from))
}

/// Set the string at `key_path` and return the re-serialized document.
///
/// Every object along the path except the last key must already exist; the
/// final key is inserted when missing. Key order of the original document is
/// kept. Output is pretty-printed with 2-space indentation and a trailing
/// newline.
pub fn set_version(
    path: &Path,
    content: &str,
    key_path: &[&str],
    version: &str,
) -> Result<String, BumpError> {
    let mut json = parse(path, content)?;

    let Some((last, parents)) = key_path.split_last() else {
        return Err(update_failed(path, "Empty key path".into()));
    };

    let mut object = as_object_mut(path, &mut json, "document root")?;
    for key in parents {
        let child = object
            .get_mut(*key)
            .ok_or_else(|| update_failed(path, format!("Missing `{}` object", key)))?;
        object = as_object_mut(path, child, key)?;
    }

    object.insert((*last).to_string(), Value::String(version.to_string()));

    let output = serde_json::to_string_pretty(&json)
        .map_err(|e| update_failed(path, format!("Failed to serialize JSON: {}", e)))?;

    Ok(format!("{}\n", output))
}

fn parse(path: &Path, content: &str) -> Result<Value, BumpError> {
    serde_json::from_str(content).map_err(|e| update_failed(path, format!("Invalid JSON: {}", e)))
}

fn as_object_mut<'a>(
    path: &Path,
    value: &'a mut Value,
    what: &str,
) -> Result<&'a mut Map<String, Value>, BumpError> {
    value
        .as_object_mut()
        .ok_or_else(|| update_failed(path, format!("Expected `{}` to be a JSON object", what)))
}

fn update_failed(path: &Path, reason: String) -> BumpError {
    BumpError::ManifestUpdateFailed {
        path: path.to_path_buf(),
        reason,
    }
}
