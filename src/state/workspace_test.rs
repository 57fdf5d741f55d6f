use super::*;

fn make_node(key: &str, props: serde_json::Value) -> ComponentNode {
    ComponentNode {
        key: key.to_owned(),
        kind: "button".to_owned(),
        props,
    }
}

#[test]
fn workspace_starts_with_no_selection() {
    let state = WorkspaceState::default();
    assert!(state.current.is_none());
    assert_eq!(state.current_key(), None);
}

#[test]
fn select_and_clear_update_the_current_node() {
    let mut state = WorkspaceState::default();
    state.select(make_node("n1", serde_json::json!({})));
    assert_eq!(state.current_key(), Some("n1"));
    state.clear_selection();
    assert!(state.current.is_none());
}

#[test]
fn change_option_merges_the_overlay_into_props() {
    let mut state = WorkspaceState::default();
    state.select(make_node("n1", serde_json::json!({ "style": { "padding": 2 } })));
    let applied = state.change_option("n1", &serde_json::json!({ "style": { "margin": 10 } }));
    assert!(applied);
    let props = &state.current.as_ref().unwrap().props;
    assert_eq!(props["style"]["margin"], serde_json::json!(10));
    assert_eq!(props["style"]["padding"], serde_json::json!(2));
}

#[test]
fn change_option_initializes_non_object_props() {
    let mut state = WorkspaceState::default();
    state.select(make_node("n1", serde_json::Value::Null));
    assert!(state.change_option("n1", &serde_json::json!({ "label": "Send" })));
    let props = &state.current.as_ref().unwrap().props;
    assert_eq!(props["label"], serde_json::json!("Send"));
}

#[test]
fn change_option_drops_stale_node_keys() {
    let mut state = WorkspaceState::default();
    state.select(make_node("n2", serde_json::json!({ "label": "Send" })));
    assert!(!state.change_option("n1", &serde_json::json!({ "label": "Go" })));
    assert_eq!(
        state.current.as_ref().unwrap().props["label"],
        serde_json::json!("Send")
    );
}

#[test]
fn change_option_without_a_selection_is_rejected() {
    let mut state = WorkspaceState::default();
    assert!(!state.change_option("n1", &serde_json::json!({ "label": "Go" })));
}

#[test]
fn delete_option_removes_the_leaf_and_accepts_absent_paths() {
    let mut state = WorkspaceState::default();
    state.select(make_node("n1", serde_json::json!({ "style": { "margin": 10 } })));
    assert!(state.delete_option("n1", "style.margin"));
    assert!(state.delete_option("n1", "style.margin"));
    let props = &state.current.as_ref().unwrap().props;
    assert_eq!(props["style"], serde_json::json!({}));
}

#[test]
fn delete_option_drops_stale_node_keys() {
    let mut state = WorkspaceState::default();
    state.select(make_node("n2", serde_json::json!({ "style": { "margin": 10 } })));
    assert!(!state.delete_option("n1", "style.margin"));
    assert_eq!(
        state.current.as_ref().unwrap().props["style"]["margin"],
        serde_json::json!(10)
    );
}
