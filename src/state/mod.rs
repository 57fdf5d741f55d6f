//! Shared application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data held in `RwSignal`s and provided via
//! context; reducers mutate them only through dispatched store intents.

pub mod panel;
pub mod workspace;
