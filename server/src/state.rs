//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only borrows `'static` content from the `agency` crate, so cloning it per
//! request is free and no locking is needed.

use agency::{AGENCY, ContactDetails, PropertyListing};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub listings: &'static [PropertyListing],
    pub contact: ContactDetails,
}

impl AppState {
    #[must_use]
    pub fn new(listings: &'static [PropertyListing], contact: ContactDetails) -> Self {
        Self { listings, contact }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(agency::featured(), AGENCY)
    }
}
