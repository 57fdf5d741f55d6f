//! Shared intent emission helpers.
//!
//! Every edit the panel makes goes through here as a `StoreIntent`. Each
//! public function snapshots the selected node at call time, builds exactly
//! one intent, and hands it to the store signals. Stale intents (the node
//! changed between render and dispatch) are dropped when applied, so a
//! dispatch can never write into the wrong node.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use leptos::prelude::{GetUntracked, Update};

use crate::app::StoreHandle;
use crate::state::panel::{PanelState, PanelTab};
use crate::state::workspace::{ComponentNode, WorkspaceState};
use crate::store::intent::StoreIntent;
use crate::util::prop_paths::{infer_scalar, overlay_with_value, validate_path};

/// Build a change intent carrying the node key and a single-path overlay.
fn change_option_intent(node: &ComponentNode, overlay: serde_json::Value) -> StoreIntent {
    StoreIntent::ChangeOption {
        component_key: node.key.clone(),
        overlay,
    }
}

/// Build a delete intent for the bare path, no value attached.
fn delete_option_intent(node: &ComponentNode, path: &str) -> StoreIntent {
    StoreIntent::DeleteOption {
        component_key: node.key.clone(),
        path: path.to_owned(),
    }
}

/// Build the intent behind a set/unset checkbox. Checked writes the overlay
/// the row currently displays; unchecked removes the value so the declared
/// default shows again.
fn toggle_style_intent(
    node: &ComponentNode,
    path: &str,
    overlay: serde_json::Value,
    checked: bool,
) -> StoreIntent {
    if checked {
        change_option_intent(node, overlay)
    } else {
        delete_option_intent(node, path)
    }
}

/// Build the intent for a user-declared property. The path must pass
/// validation; the raw text is interpreted as number, boolean, or string,
/// in that order.
fn add_declared_property_intent(
    node: &ComponentNode,
    path: &str,
    raw: &str,
) -> Option<StoreIntent> {
    validate_path(path).ok()?;
    Some(change_option_intent(
        node,
        overlay_with_value(path, infer_scalar(raw)),
    ))
}

/// Applies workspace-addressed intents; panel intents are ignored here.
pub fn apply_workspace_intent(workspace: &mut WorkspaceState, intent: &StoreIntent) {
    match intent {
        StoreIntent::ChangeOption {
            component_key,
            overlay,
        } => {
            if !workspace.change_option(component_key, overlay) {
                log::debug!("dropping change for stale node {component_key}");
            }
        }
        StoreIntent::DeleteOption {
            component_key,
            path,
        } => {
            if !workspace.delete_option(component_key, path) {
                log::debug!("dropping delete for stale node {component_key}");
            }
        }
        _ => {}
    }
}

/// Applies panel-addressed intents; workspace intents are ignored here.
pub fn apply_panel_intent(panel: &mut PanelState, intent: &StoreIntent) {
    match intent {
        StoreIntent::SetActiveTab { tab } => panel.select_tab(Some(*tab)),
        StoreIntent::ToggleStyleSection { group_key } => panel.toggle_section(group_key),
        _ => {}
    }
}

fn current_node(store: StoreHandle) -> Option<ComponentNode> {
    store.workspace.get_untracked().current
}

fn send(store: StoreHandle, intent: StoreIntent) {
    log::debug!("store intent: {intent:?}");
    match &intent {
        StoreIntent::ChangeOption { .. } | StoreIntent::DeleteOption { .. } => {
            store
                .workspace
                .update(|workspace| apply_workspace_intent(workspace, &intent));
        }
        StoreIntent::SetActiveTab { .. } | StoreIntent::ToggleStyleSection { .. } => {
            store.panel.update(|panel| apply_panel_intent(panel, &intent));
        }
    }
}

/// Emit a change for the selected node. No-op when nothing is selected.
pub fn change_option(store: StoreHandle, overlay: serde_json::Value) {
    let Some(node) = current_node(store) else {
        return;
    };
    send(store, change_option_intent(&node, overlay));
}

/// Emit a delete for the selected node. No-op when nothing is selected.
pub fn delete_option(store: StoreHandle, path: &str) {
    let Some(node) = current_node(store) else {
        return;
    };
    send(store, delete_option_intent(&node, path));
}

/// Emit the change-or-delete behind a style row's set/unset checkbox.
pub fn toggle_style(store: StoreHandle, path: &str, overlay: serde_json::Value, checked: bool) {
    let Some(node) = current_node(store) else {
        return;
    };
    send(store, toggle_style_intent(&node, path, overlay, checked));
}

/// Emit a change for a user-typed path and raw value. Invalid paths are
/// discarded without touching the store.
pub fn add_declared_property(store: StoreHandle, path: &str, raw: &str) {
    let Some(node) = current_node(store) else {
        return;
    };
    match add_declared_property_intent(&node, path, raw) {
        Some(intent) => send(store, intent),
        None => log::debug!("rejecting property path {path:?}"),
    }
}

/// Emit a tab switch. An unresolved tab leaves the panel where it is.
pub fn select_tab(store: StoreHandle, tab: Option<PanelTab>) {
    let Some(tab) = tab else {
        return;
    };
    send(store, StoreIntent::SetActiveTab { tab });
}

/// Emit an expansion flip for one style section.
pub fn toggle_style_section(store: StoreHandle, group_key: &str) {
    send(
        store,
        StoreIntent::ToggleStyleSection {
            group_key: group_key.to_owned(),
        },
    );
}
