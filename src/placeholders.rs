//! Loading of the optional placeholder file (`template.config.json`).
//!
//! The file is a JSON object mapping placeholder keys to replacement values.
//! A missing file means "no extra placeholders"; a broken one is reported
//! and ignored so the run can still rename the project.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::ProjectError;
use crate::models::{PlaceholderMap, PlaceholderValue};
use crate::Result;

/// Load the placeholder file at `path`, falling back to an empty map.
pub fn load(path: &Path) -> PlaceholderMap {
    match try_load(path) {
        Ok(Some(map)) => {
            debug!(path = %path.display(), keys = map.len(), "Loaded placeholder file");
            map
        }
        Ok(None) => {
            debug!(path = %path.display(), "No placeholder file found");
            PlaceholderMap::new()
        }
        Err(e) => {
            warn!(error = %e, "Ignoring placeholder file");
            eprintln!("⚠️  {}; continuing without extra placeholders", e);
            PlaceholderMap::new()
        }
    }
}

/// Strict form of [`load`]: `Ok(None)` when the file does not exist.
pub fn try_load(path: &Path) -> Result<Option<PlaceholderMap>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path).map_err(|source| ProjectError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&raw)
        .map(Some)
        .map_err(|message| ProjectError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
}

fn parse(raw: &str) -> std::result::Result<PlaceholderMap, String> {
    let object: Map<String, Value> = match serde_json::from_str(raw) {
        Ok(Value::Object(object)) => object,
        Ok(_) => return Err("expected a JSON object at the top level".to_string()),
        Err(e) => return Err(e.to_string()),
    };

    Ok(object
        .into_iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key, PlaceholderValue::from(value)))
        .collect())
}
