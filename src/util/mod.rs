//! Utility helpers shared across panel modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions over `serde_json::Value` trees, kept free of signals and
//! DOM concerns so the editing semantics stay testable on their own.

pub mod prop_list;
pub mod prop_paths;
