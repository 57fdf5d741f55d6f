use super::*;
use crate::util::prop_list::option_entries;

fn make_node(key: &str, props: serde_json::Value) -> ComponentNode {
    ComponentNode {
        key: key.to_owned(),
        kind: "button".to_owned(),
        props,
    }
}

fn selected(node: ComponentNode) -> WorkspaceState {
    WorkspaceState {
        current: Some(node),
    }
}

// ====== Intent builders ======

#[test]
fn change_option_intent_snapshots_the_node_key() {
    let node = make_node("n1", serde_json::json!({}));
    let intent = change_option_intent(&node, serde_json::json!({ "label": "Send" }));
    assert_eq!(
        intent,
        StoreIntent::ChangeOption {
            component_key: "n1".to_owned(),
            overlay: serde_json::json!({ "label": "Send" }),
        }
    );
}

#[test]
fn delete_option_intent_carries_the_bare_path() {
    let node = make_node("n1", serde_json::json!({}));
    let intent = delete_option_intent(&node, "style.margin");
    assert_eq!(
        intent,
        StoreIntent::DeleteOption {
            component_key: "n1".to_owned(),
            path: "style.margin".to_owned(),
        }
    );
}

#[test]
fn toggle_style_intent_checked_writes_the_displayed_overlay() {
    let node = make_node("n1", serde_json::json!({}));
    let intent = toggle_style_intent(&node, "margin", serde_json::json!({ "margin": 0 }), true);
    assert_eq!(
        intent,
        StoreIntent::ChangeOption {
            component_key: "n1".to_owned(),
            overlay: serde_json::json!({ "margin": 0 }),
        }
    );
}

#[test]
fn toggle_style_intent_unchecked_deletes_the_path() {
    let node = make_node("n1", serde_json::json!({ "margin": 10 }));
    let intent = toggle_style_intent(&node, "margin", serde_json::json!({ "margin": 10 }), false);
    assert_eq!(
        intent,
        StoreIntent::DeleteOption {
            component_key: "n1".to_owned(),
            path: "margin".to_owned(),
        }
    );
}

#[test]
fn add_declared_property_intent_infers_numbers() {
    let node = make_node("n1", serde_json::json!({}));
    let intent = add_declared_property_intent(&node, "a.b", "42");
    assert_eq!(
        intent,
        Some(StoreIntent::ChangeOption {
            component_key: "n1".to_owned(),
            overlay: serde_json::json!({ "a": { "b": 42 } }),
        })
    );
}

#[test]
fn add_declared_property_intent_infers_booleans_and_strings() {
    let node = make_node("n1", serde_json::json!({}));
    assert_eq!(
        add_declared_property_intent(&node, "visible", "true"),
        Some(StoreIntent::ChangeOption {
            component_key: "n1".to_owned(),
            overlay: serde_json::json!({ "visible": true }),
        })
    );
    assert_eq!(
        add_declared_property_intent(&node, "label", "Send"),
        Some(StoreIntent::ChangeOption {
            component_key: "n1".to_owned(),
            overlay: serde_json::json!({ "label": "Send" }),
        })
    );
}

#[test]
fn add_declared_property_intent_rejects_invalid_paths() {
    let node = make_node("n1", serde_json::json!({}));
    assert_eq!(add_declared_property_intent(&node, "bad path!", "42"), None);
    assert_eq!(add_declared_property_intent(&node, "a..b", "42"), None);
    assert_eq!(add_declared_property_intent(&node, "", "42"), None);
}

// ====== Applying intents ======

#[test]
fn apply_workspace_intent_merges_changes() {
    let mut workspace = selected(make_node("n1", serde_json::json!({ "style": { "padding": 2 } })));
    apply_workspace_intent(
        &mut workspace,
        &StoreIntent::ChangeOption {
            component_key: "n1".to_owned(),
            overlay: serde_json::json!({ "style": { "margin": 10 } }),
        },
    );
    let props = &workspace.current.as_ref().unwrap().props;
    assert_eq!(props["style"]["margin"], serde_json::json!(10));
    assert_eq!(props["style"]["padding"], serde_json::json!(2));
}

#[test]
fn apply_workspace_intent_deletes_paths() {
    let mut workspace = selected(make_node("n1", serde_json::json!({ "margin": 10 })));
    apply_workspace_intent(
        &mut workspace,
        &StoreIntent::DeleteOption {
            component_key: "n1".to_owned(),
            path: "margin".to_owned(),
        },
    );
    assert_eq!(
        workspace.current.as_ref().unwrap().props,
        serde_json::json!({})
    );
}

#[test]
fn apply_workspace_intent_ignores_stale_keys_and_panel_intents() {
    let mut workspace = selected(make_node("n2", serde_json::json!({ "margin": 10 })));
    apply_workspace_intent(
        &mut workspace,
        &StoreIntent::ChangeOption {
            component_key: "n1".to_owned(),
            overlay: serde_json::json!({ "margin": 0 }),
        },
    );
    apply_workspace_intent(
        &mut workspace,
        &StoreIntent::SetActiveTab {
            tab: PanelTab::Properties,
        },
    );
    assert_eq!(
        workspace.current.as_ref().unwrap().props,
        serde_json::json!({ "margin": 10 })
    );
}

#[test]
fn apply_panel_intent_switches_tabs_and_toggles_sections() {
    let mut panel = PanelState::default();
    apply_panel_intent(
        &mut panel,
        &StoreIntent::SetActiveTab {
            tab: PanelTab::Properties,
        },
    );
    apply_panel_intent(
        &mut panel,
        &StoreIntent::ToggleStyleSection {
            group_key: "spacing".to_owned(),
        },
    );
    assert_eq!(panel.active_tab, PanelTab::Properties);
    assert!(panel.is_section_expanded("spacing"));
}

#[test]
fn apply_panel_intent_ignores_workspace_intents() {
    let mut panel = PanelState::default();
    apply_panel_intent(
        &mut panel,
        &StoreIntent::DeleteOption {
            component_key: "n1".to_owned(),
            path: "margin".to_owned(),
        },
    );
    assert_eq!(panel.active_tab, PanelTab::QuickStyle);
    assert!(panel.expanded_sections.is_empty());
}

// ====== End to end ======

#[test]
fn added_property_shows_up_in_the_enumerated_list() {
    let node = make_node("n1", serde_json::json!({}));
    let mut workspace = selected(node.clone());
    let intent = add_declared_property_intent(&node, "a.b", "42").unwrap();
    apply_workspace_intent(&mut workspace, &intent);
    let entries = option_entries(&workspace.current.as_ref().unwrap().props);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "a.b");
    assert_eq!(entries[0].value, serde_json::json!(42));
}

#[test]
fn deleting_an_enumerated_row_removes_it_from_the_next_render() {
    let node = make_node(
        "n1",
        serde_json::json!({ "label": "Send", "style": { "margin": 10 } }),
    );
    let mut workspace = selected(node.clone());
    let entries = option_entries(&node.props);
    let target = entries.iter().find(|e| e.path == "style.margin").unwrap();

    let intent = delete_option_intent(&node, &target.path);
    apply_workspace_intent(&mut workspace, &intent);

    let after = option_entries(&workspace.current.as_ref().unwrap().props);
    assert_eq!(after.len(), 1);
    assert!(after.iter().all(|entry| entry.path != "style.margin"));
}

#[test]
fn toggling_a_style_off_then_on_restores_the_default() {
    let node = make_node("n1", serde_json::json!({ "margin": 10 }));
    let mut workspace = selected(node.clone());
    let off = toggle_style_intent(&node, "margin", serde_json::json!({ "margin": 10 }), false);
    apply_workspace_intent(&mut workspace, &off);
    assert_eq!(
        workspace.current.as_ref().unwrap().props,
        serde_json::json!({})
    );

    let bare = workspace.current.clone().unwrap();
    let on = toggle_style_intent(&bare, "margin", serde_json::json!({ "margin": 0 }), true);
    apply_workspace_intent(&mut workspace, &on);
    assert_eq!(
        workspace.current.as_ref().unwrap().props,
        serde_json::json!({ "margin": 0 })
    );
}
