//! Store boundary: intents and their dispatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel never mutates state directly. It emits `StoreIntent` values
//! through `dispatch`, which applies them to the host-owned state signals.

pub mod dispatch;
pub mod intent;
