//! Card for one featured listing.
//!
//! DESIGN
//! ======
//! `PropertyCardModel` holds every string the card displays, derived from a
//! `PropertyListing` with no reformatting of the display fields. The
//! component only lays those strings out, so the card content is testable
//! without a DOM.

#[cfg(test)]
#[path = "property_card_test.rs"]
mod property_card_test;

use agency::PropertyListing;
use agency::content::Icon;
use leptos::prelude::*;

use crate::components::icon::SvgIcon;

/// Display strings for a listing card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyCardModel {
    pub id: u32,
    pub title: String,
    pub price: String,
    pub location: String,
    pub bedrooms: String,
    pub parking: String,
    pub area: String,
    pub badge: String,
    pub badge_class: String,
    pub image: String,
}

impl PropertyCardModel {
    #[must_use]
    pub fn from_listing(listing: &PropertyListing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.to_owned(),
            price: listing.price_label(),
            location: listing.location.to_owned(),
            bedrooms: listing.bedrooms_label(),
            parking: listing.parking_label(),
            area: listing.area.to_owned(),
            badge: listing.listing_type.as_str().to_owned(),
            badge_class: format!("listing-badge listing-badge--{}", listing.listing_type.badge_modifier()),
            image: listing.image.to_owned(),
        }
    }
}

/// One card model per listing, in input order.
#[must_use]
pub fn card_models(listings: &[PropertyListing]) -> Vec<PropertyCardModel> {
    listings.iter().map(PropertyCardModel::from_listing).collect()
}

#[component]
pub fn PropertyCard(
    model: PropertyCardModel,
    #[prop(into)] card_class: Signal<String>,
    #[prop(into)] delay_style: String,
) -> impl IntoView {
    let PropertyCardModel { id, title, price, location, bedrooms, parking, area, badge, badge_class, image } = model;
    let alt = title.clone();

    view! {
        <article class=move || card_class.get() style=delay_style data-listing-id=id.to_string()>
            <div class="property-card__media">
                <img class="property-card__image" src=image alt=alt loading="lazy"/>
                <span class=badge_class>{badge}</span>
                <span class="property-card__price">{price}</span>
            </div>
            <div class="property-card__body">
                <h3 class="card__title">{title}</h3>
                <div class="property-card__location">
                    <SvgIcon icon=Icon::MapPin class="icon--small"/>
                    <span>{location}</span>
                </div>
                <div class="property-card__facts">
                    <span class="property-card__fact">
                        <SvgIcon icon=Icon::Bed class="icon--small"/>
                        {bedrooms}
                    </span>
                    <span class="property-card__fact">
                        <SvgIcon icon=Icon::Car class="icon--small"/>
                        {parking}
                    </span>
                    <span class="property-card__fact">
                        <SvgIcon icon=Icon::Maximize class="icon--small"/>
                        {area}
                    </span>
                </div>
            </div>
        </article>
    }
}
