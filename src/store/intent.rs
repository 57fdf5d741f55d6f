//! Store intents: the value-carrying operations the panel can issue.

use crate::state::panel::PanelTab;

/// One store operation, carrying everything needed to apply it. Intents are
/// fire-and-forget; the panel never waits on a result.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreIntent {
    /// Merge a single-path overlay into the named node's props.
    ChangeOption {
        component_key: String,
        overlay: serde_json::Value,
    },
    /// Remove the value at a path from the named node's props.
    DeleteOption {
        component_key: String,
        path: String,
    },
    /// Switch the panel's active tab.
    SetActiveTab { tab: PanelTab },
    /// Flip one style section's expansion.
    ToggleStyleSection { group_key: String },
}
