//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with no browser dependencies so it can be unit tested
//! natively. Components wrap it in signals.

pub mod contact_form;
pub mod visibility;
