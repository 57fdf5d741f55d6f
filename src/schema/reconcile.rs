//! Resolves the style schema against a node's current property values.
//!
//! DESIGN
//! ======
//! This is a pure read-model pass: given the declared groups, the node's
//! props, and a view-state snapshot, it produces exactly what the quick-style
//! tab renders. Nothing here mutates state; toggles and edits go back out
//! through the store dispatcher.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use crate::schema::catalog::{StyleDeclaration, StyleGroup};
use crate::state::panel::PanelState;
use crate::util::prop_paths::{overlay_with_value, value_at_path};

/// One declaration resolved against the current tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRow {
    /// The declaration this row renders.
    pub declaration: StyleDeclaration,
    /// Current value when set, otherwise the declared default.
    pub effective: serde_json::Value,
    /// Single-path overlay carrying the effective value, ready to commit.
    pub overlay: serde_json::Value,
    /// Whether the path resolves to a value in the current tree.
    pub is_set: bool,
}

/// One group resolved for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSection {
    /// Group key, also the expansion-state key.
    pub key: String,
    /// Section title.
    pub title: String,
    /// How many of the group's declarations are set on the node.
    pub set_count: usize,
    /// Expansion read from the view-state snapshot.
    pub expanded: bool,
    /// Resolved rows in declared order.
    pub rows: Vec<StyleRow>,
}

/// Resolves every declared group against `props`. Groups without
/// declarations are dropped; everything else keeps its declared order.
pub fn style_sections(
    groups: &[StyleGroup],
    props: &serde_json::Value,
    panel: &PanelState,
) -> Vec<StyleSection> {
    groups
        .iter()
        .filter(|group| !group.styles.is_empty())
        .map(|group| {
            let rows: Vec<StyleRow> = group
                .styles
                .iter()
                .map(|declaration| style_row(declaration, props))
                .collect();
            let set_count = rows.iter().filter(|row| row.is_set).count();
            StyleSection {
                key: group.key.clone(),
                title: group.title.clone(),
                set_count,
                expanded: panel.is_section_expanded(&group.key),
                rows,
            }
        })
        .collect()
}

fn style_row(declaration: &StyleDeclaration, props: &serde_json::Value) -> StyleRow {
    let current = value_at_path(props, &declaration.path);
    let is_set = current.is_some();
    let effective = current
        .cloned()
        .unwrap_or_else(|| declaration.default_value.clone());
    StyleRow {
        overlay: overlay_with_value(&declaration.path, effective.clone()),
        effective,
        is_set,
        declaration: declaration.clone(),
    }
}
