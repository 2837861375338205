//! Buy / sell / rent / invest service cards.

use agency::content::SERVICES;
use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::components::reveal::use_section_visible;
use crate::components::section_heading::SectionHeading;
use crate::state::visibility::{Reveal, reveal_class, stagger_style};

#[component]
pub fn ServicesSection() -> impl IntoView {
    let visible = use_section_visible("services");

    view! {
        <section id="services" class="section">
            <div class="container">
                <SectionHeading
                    title="Our Services"
                    subtitle="Comprehensive real estate solutions tailored to your needs"
                    visible=visible
                />
                <div class="grid grid--4">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            let tone = service.tone.unwrap_or("blue");
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "card service-card service-card--{tone} {}",
                                            reveal_class(visible.get(), Reveal::Up),
                                        )
                                    }
                                    style=stagger_style(index, 150)
                                >
                                    <SvgIcon icon=service.icon class="service-card__icon"/>
                                    <h3 class="card__title">{service.title}</h3>
                                    <p class="card__text">{service.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
