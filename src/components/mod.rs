//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the panel chrome and leaf controls while reading shared
//! state from Leptos context providers and writing through `store::dispatch`.

pub mod option_row;
pub mod options_panel;
pub mod style_inputs;
