//! Featured property listings.
//!
//! DESIGN
//! ======
//! The listing set is a compile-time constant. Nothing creates, edits or
//! removes listings at runtime, so callers borrow `&'static` records instead
//! of cloning them. Display fields (`price`, `area`, `location`) are opaque
//! strings rendered verbatim; only the room counts are numeric.

#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`ListingType`] from its display string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    /// The string is not one of `For Sale`, `For Rent` or `Investment`.
    #[error("unknown listing type: {0}")]
    UnknownType(String),
}

/// Category of a listing, shown as a badge on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "Investment")]
    Investment,
}

impl ListingType {
    /// Badge text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ForSale => "For Sale",
            Self::ForRent => "For Rent",
            Self::Investment => "Investment",
        }
    }

    /// CSS modifier suffix for the badge (`listing-badge--{modifier}`).
    #[must_use]
    pub fn badge_modifier(self) -> &'static str {
        match self {
            Self::ForSale => "sale",
            Self::ForRent => "rent",
            Self::Investment => "investment",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "For Sale" => Ok(Self::ForSale),
            "For Rent" => Ok(Self::ForRent),
            "Investment" => Ok(Self::Investment),
            other => Err(ListingError::UnknownType(other.to_owned())),
        }
    }
}

/// A single featured property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyListing {
    /// Stable identifier, unique within [`featured`].
    pub id: u32,
    pub title: &'static str,
    /// Price as displayed, without currency symbol (e.g. `"2,200/month"`).
    pub price: &'static str,
    pub location: &'static str,
    pub bedrooms: u32,
    pub parking: u32,
    /// Floor area with its unit embedded (e.g. `"2,800 sq ft"`).
    pub area: &'static str,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    /// External image URL, loaded by the browser.
    pub image: &'static str,
}

impl PropertyListing {
    /// Price pill text shown over the card image.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    #[must_use]
    pub fn bedrooms_label(&self) -> String {
        format!("{} Beds", self.bedrooms)
    }

    #[must_use]
    pub fn parking_label(&self) -> String {
        format!("{} Parking", self.parking)
    }
}

static FEATURED: [PropertyListing; 6] = [
    PropertyListing {
        id: 1,
        title: "Modern Family Villa",
        price: "450,000",
        location: "Riverside Gardens, Property City",
        bedrooms: 4,
        parking: 2,
        area: "2,800 sq ft",
        listing_type: ListingType::ForSale,
        image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&w=800&q=80",
    },
    PropertyListing {
        id: 2,
        title: "Luxury Apartment",
        price: "2,200/month",
        location: "Downtown District, Property City",
        bedrooms: 2,
        parking: 1,
        area: "1,200 sq ft",
        listing_type: ListingType::ForRent,
        image: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=800&q=80",
    },
    PropertyListing {
        id: 3,
        title: "Cozy Suburban Home",
        price: "320,000",
        location: "Green Valley, Property City",
        bedrooms: 3,
        parking: 2,
        area: "2,100 sq ft",
        listing_type: ListingType::ForSale,
        image: "https://images.unsplash.com/photo-1570129477492-45c003edd2be?auto=format&fit=crop&w=800&q=80",
    },
    PropertyListing {
        id: 4,
        title: "Penthouse Suite",
        price: "4,500/month",
        location: "Skyline Heights, Property City",
        bedrooms: 3,
        parking: 2,
        area: "2,000 sq ft",
        listing_type: ListingType::ForRent,
        image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=800&q=80",
    },
    PropertyListing {
        id: 5,
        title: "Investment Property",
        price: "180,000",
        location: "Commercial District, Property City",
        bedrooms: 2,
        parking: 1,
        area: "1,000 sq ft",
        listing_type: ListingType::Investment,
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=800&q=80",
    },
    PropertyListing {
        id: 6,
        title: "Family Townhouse",
        price: "380,000",
        location: "Heritage Park, Property City",
        bedrooms: 3,
        parking: 2,
        area: "2,300 sq ft",
        listing_type: ListingType::ForSale,
        image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?auto=format&fit=crop&w=800&q=80",
    },
];

/// The featured listings, in display order.
#[must_use]
pub fn featured() -> &'static [PropertyListing] {
    &FEATURED
}

/// Look up a featured listing by id.
#[must_use]
pub fn find(id: u32) -> Option<&'static PropertyListing> {
    FEATURED.iter().find(|listing| listing.id == id)
}

/// `true` when no two listings share an id.
#[must_use]
pub fn ids_are_unique(listings: &[PropertyListing]) -> bool {
    let mut seen = HashSet::with_capacity(listings.len());
    listings.iter().all(|listing| seen.insert(listing.id))
}
