//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page and component logic so
//! the rest of the crate renders identically on the server.

pub mod browser;
pub mod viewport;
