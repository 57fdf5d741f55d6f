//! # options-panel
//!
//! Leptos property-editing panel for a visual UI builder. The panel shows
//! the selected node's properties two ways: a schema-driven "Quick style"
//! tab of grouped controls with defaults, and a free-form "Properties" tab
//! listing every scalar up to one nesting level deep. All edits are
//! dispatched to the host store as single-path overlay changes or bare-path
//! deletes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component, store handle, context providers |
//! | [`components`] | Panel, rows, and leaf input controls |
//! | [`schema`] | Style declarations, default catalog, reconciler |
//! | [`state`] | Workspace selection and panel view state |
//! | [`store`] | Store intents and the dispatch boundary |
//! | [`util`] | Dotted-path and enumeration helpers |

pub mod app;
pub mod components;
pub mod schema;
pub mod state;
pub mod store;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
