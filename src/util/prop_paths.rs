//! Dotted-path helpers over JSON property trees.

#[cfg(test)]
#[path = "prop_paths_test.rs"]
mod prop_paths_test;

use thiserror::Error;

/// Why a free-form property path was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path was empty.
    #[error("property path is empty")]
    Empty,
    /// The path contains a character outside `[a-zA-Z0-9.]`.
    #[error("property path contains invalid character {0:?}")]
    InvalidChar(char),
    /// The path has an empty segment, e.g. `a..b` or a trailing dot.
    #[error("property path has an empty segment")]
    EmptySegment,
}

/// Checks a user-typed path against the allowed charset and segment shape.
/// Schema-declared paths are trusted and skip this.
pub fn validate_path(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    if let Some(bad) = path.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '.') {
        return Err(PathError::InvalidChar(bad));
    }
    if path.split('.').any(str::is_empty) {
        return Err(PathError::EmptySegment);
    }
    Ok(())
}

pub fn value_at_path<'a>(tree: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = tree;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn value_at_path_mut<'a>(
    tree: &'a mut serde_json::Value,
    path: &str,
) -> Option<&'a mut serde_json::Value> {
    let mut current = tree;
    for segment in path.split('.') {
        current = current.as_object_mut()?.get_mut(segment)?;
    }
    Some(current)
}

/// Builds the sparse single-path object carrying `value` at `path`, e.g.
/// `overlay_with_value("style.margin", json!(10))` yields
/// `{"style": {"margin": 10}}`.
pub fn overlay_with_value(path: &str, value: serde_json::Value) -> serde_json::Value {
    let mut overlay = value;
    for segment in path.rsplit('.') {
        let mut wrapper = serde_json::Map::new();
        wrapper.insert(segment.to_owned(), overlay);
        overlay = serde_json::Value::Object(wrapper);
    }
    overlay
}

/// Deep-merges `overlay` into `target`: objects merge per key, everything
/// else replaces. Keys not named by the overlay are left untouched.
pub fn merge_overlay(target: &mut serde_json::Value, overlay: &serde_json::Value) {
    let Some(incoming) = overlay.as_object() else {
        *target = overlay.clone();
        return;
    };
    if !target.is_object() {
        *target = serde_json::json!({});
    }
    if let Some(existing) = target.as_object_mut() {
        for (key, value) in incoming {
            if value.is_object() {
                let slot = existing
                    .entry(key.clone())
                    .or_insert(serde_json::Value::Null);
                merge_overlay(slot, value);
            } else {
                existing.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Removes the leaf addressed by `path`. Absent paths are a no-op; emptied
/// parent objects are left in place. Returns whether a value was removed.
pub fn remove_at_path(tree: &mut serde_json::Value, path: &str) -> bool {
    let target = match path.rsplit_once('.') {
        Some((parent, leaf)) => value_at_path_mut(tree, parent).map(|v| (v, leaf)),
        None => Some((tree, path)),
    };
    let Some((serde_json::Value::Object(map), leaf)) = target else {
        return false;
    };
    map.shift_remove(leaf).is_some()
}

/// Interprets raw text as a scalar: an all-`[0-9.]` string that parses as a
/// number wins, then the boolean literals, then plain text.
pub fn infer_scalar(raw: &str) -> serde_json::Value {
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit() || c == '.') {
        if let Some(number) = parse_number(raw) {
            return number;
        }
    }
    match raw {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        _ => serde_json::Value::String(raw.to_owned()),
    }
}

fn parse_number(raw: &str) -> Option<serde_json::Value> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(number_scalar)
}

/// Wraps a float as a JSON number, collapsing integral values to integers
/// so `42.0` round-trips as `42`. Non-finite input maps to JSON null;
/// callers screen it out first.
pub fn number_scalar(value: f64) -> serde_json::Value {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        serde_json::Value::from(value as i64)
    } else {
        serde_json::Value::from(value)
    }
}

/// Renders a scalar for an input field: strings unquoted, everything else
/// in JSON notation.
pub fn display_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
