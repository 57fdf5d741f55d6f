//! Root application component with context providers and a demo workspace.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::options_panel::OptionsPanel;
use crate::schema::catalog::StyleCatalog;
use crate::state::panel::PanelState;
use crate::state::workspace::{ComponentNode, WorkspaceState};

/// Handle to the host-owned store signals, provided through context.
///
/// Everything the panel reads comes from these two signals, and every edit
/// goes back into them through `store::dispatch`. A host embedding the panel
/// provides its own handle; the demo `App` below creates one.
#[derive(Clone, Copy)]
pub struct StoreHandle {
    /// Selection and property data.
    pub workspace: RwSignal<WorkspaceState>,
    /// Panel view state.
    pub panel: RwSignal<PanelState>,
}

impl StoreHandle {
    /// Creates both state signals with their defaults.
    pub fn new() -> Self {
        Self {
            workspace: RwSignal::new(WorkspaceState::default()),
            panel: RwSignal::new(PanelState::default()),
        }
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides the store handle and style catalog contexts, seeds a demo node,
/// and mounts the panel next to a minimal selection toolbar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = StoreHandle::new();
    provide_context(store);
    provide_context(StyleCatalog::default());

    store.workspace.update(|workspace| workspace.select(demo_node()));

    let select_demo = move |_| {
        store.workspace.update(|workspace| workspace.select(demo_node()));
    };
    let clear_selection = move |_| {
        store.workspace.update(WorkspaceState::clear_selection);
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/options-panel.css"/>
        <Title text="Options Panel"/>

        <main class="workbench">
            <div class="workbench__toolbar">
                <button class="btn" on:click=select_demo>"Select demo node"</button>
                <button class="btn" on:click=clear_selection>"Deselect"</button>
            </div>
            <OptionsPanel/>
        </main>
    }
}

/// Demo node so the panel has something to edit when mounted standalone.
fn demo_node() -> ComponentNode {
    ComponentNode {
        key: "demo-button".to_owned(),
        kind: "button".to_owned(),
        props: serde_json::json!({
            "label": "Send",
            "disabled": false,
            "style": {
                "marginTop": 8,
                "backgroundColor": "#3b82c4",
            },
        }),
    }
}
