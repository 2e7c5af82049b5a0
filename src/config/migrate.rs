//! Detection and back-filling of configuration keys added in newer releases.

use super::{
    default_column_warning_threshold, default_log_level, default_min_session_minutes,
    default_session_width,
};
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key the current release understands, with its default value.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("session_width", Value::from(default_session_width())),
        (
            "min_session_minutes",
            Value::from(default_min_session_minutes()),
        ),
        (
            "column_warning_threshold",
            Value::from(default_column_warning_threshold() as u64),
        ),
        ("log_level", Value::from(default_log_level())),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    Ok(yaml.as_mapping().cloned().unwrap_or_default())
}

/// Keys missing from the config file at `path`.
///
/// A missing file reports nothing: defaults apply in full.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let map = read_mapping(path)?;
    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(*k))
        .map(|(k, _)| k)
        .collect())
}

/// Add missing keys with their default values, keeping everything else.
/// Returns the keys that were added.
pub fn migrate_config(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut map = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, default) in expected_keys() {
        if !map.contains_key(key) {
            map.insert(Value::from(key), default);
            added.push(key);
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
        tracing::info!(keys = ?added, "config migrated");
    }

    Ok(added)
}
