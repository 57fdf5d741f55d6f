//! One-level flattening of a node's property tree into editable rows.

#[cfg(test)]
#[path = "prop_list_test.rs"]
mod prop_list_test;

use crate::util::prop_paths::overlay_with_value;

/// A single editable property row in the free-form list.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    /// Dotted path addressing the value, one or two segments deep.
    pub path: String,
    /// Current scalar at that path.
    pub value: serde_json::Value,
    /// Prebuilt single-path overlay carrying the current value.
    pub overlay: serde_json::Value,
}

/// Flattens `props` into rows: top-level scalars as `key`, scalars exactly
/// one object level down as `key.child`. Deeper objects, arrays, and nulls
/// are not enumerated. Row order follows the map's authoring order.
pub fn option_entries(props: &serde_json::Value) -> Vec<OptionEntry> {
    let mut entries = Vec::new();
    let Some(map) = props.as_object() else {
        return entries;
    };
    for (key, value) in map {
        match value {
            serde_json::Value::Object(children) => {
                for (child_key, child) in children {
                    if is_editable_scalar(child) {
                        entries.push(entry_for(format!("{key}.{child_key}"), child));
                    }
                }
            }
            other => {
                if is_editable_scalar(other) {
                    entries.push(entry_for(key.clone(), other));
                }
            }
        }
    }
    entries
}

fn is_editable_scalar(value: &serde_json::Value) -> bool {
    matches!(
        value,
        serde_json::Value::String(_) | serde_json::Value::Number(_) | serde_json::Value::Bool(_)
    )
}

fn entry_for(path: String, value: &serde_json::Value) -> OptionEntry {
    OptionEntry {
        overlay: overlay_with_value(&path, value.clone()),
        value: value.clone(),
        path,
    }
}
