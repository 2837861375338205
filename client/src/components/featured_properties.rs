//! Featured listings grid.

use agency::PropertyListing;
use leptos::prelude::*;

use crate::components::property_card::{PropertyCard, card_models};
use crate::components::reveal::use_section_visible;
use crate::components::section_heading::SectionHeading;
use crate::state::visibility::{Reveal, reveal_class, stagger_style};

/// Renders one card per listing, in the order given.
#[component]
pub fn FeaturedProperties(listings: &'static [PropertyListing]) -> impl IntoView {
    let visible = use_section_visible("properties");

    view! {
        <section id="properties" class="section section--muted">
            <div class="container">
                <SectionHeading
                    title="Featured Properties"
                    subtitle="Discover our handpicked selection of premium properties"
                    visible=visible
                />
                <div class="grid grid--3">
                    {card_models(listings)
                        .into_iter()
                        .enumerate()
                        .map(|(index, model)| {
                            let card_class = Signal::derive(move || {
                                format!("card property-card {}", reveal_class(visible.get(), Reveal::Up))
                            });
                            view! { <PropertyCard model=model card_class=card_class delay_style=stagger_style(index, 200)/> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
