//! Shared agency data model for the Velan Properties site.
//!
//! This crate owns the content that both `server` and `client` render: the
//! featured property listings, the agency contact details with the WhatsApp
//! deep-link builder, and the static marketing copy. Everything here is
//! `'static` and free of I/O so it compiles unchanged for the browser build.

pub mod contact;
pub mod content;
pub mod property;

pub use contact::{AGENCY, ContactDetails, DEFAULT_WHATSAPP_MESSAGE, whatsapp_link};
pub use property::{ListingError, ListingType, PropertyListing, featured, find, ids_are_unique};
