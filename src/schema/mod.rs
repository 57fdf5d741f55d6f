//! Style schema: declaration model and value reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog declares what is editable; the reconciler resolves those
//! declarations against a node's current props into render-ready sections.

pub mod catalog;
pub mod reconcile;
