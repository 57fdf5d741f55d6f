//! Workspace state: the node whose properties the panel edits.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use serde::{Deserialize, Serialize};

use crate::util::prop_paths::{merge_overlay, remove_at_path};

/// A UI-builder node as supplied by the host document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Host-assigned identifier, stable across edits.
    pub key: String,
    /// Component kind, e.g. `"button"` or `"card"`.
    pub kind: String,
    /// Open-ended property tree: scalars plus one level of nested maps.
    pub props: serde_json::Value,
}

/// Selection state shared through context.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceState {
    /// Node currently selected for editing, if any.
    pub current: Option<ComponentNode>,
}

impl WorkspaceState {
    pub fn select(&mut self, node: ComponentNode) {
        self.current = Some(node);
    }

    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    pub fn current_key(&self) -> Option<&str> {
        self.current.as_ref().map(|node| node.key.as_str())
    }

    /// Deep-merges a single-path overlay into the selected node's props.
    /// Returns `false` when `key` no longer names the selected node.
    pub fn change_option(&mut self, key: &str, overlay: &serde_json::Value) -> bool {
        let Some(node) = self.current.as_mut().filter(|node| node.key == key) else {
            return false;
        };
        merge_overlay(&mut node.props, overlay);
        true
    }

    /// Removes the leaf at `path` from the selected node's props. An absent
    /// path is accepted and leaves the tree unchanged.
    pub fn delete_option(&mut self, key: &str, path: &str) -> bool {
        let Some(node) = self.current.as_mut().filter(|node| node.key == key) else {
            return false;
        };
        remove_at_path(&mut node.props, path);
        true
    }
}
