//! Reasons to choose the agency, sliding in from the right.

use agency::content::REASONS;
use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::components::reveal::use_section_visible;
use crate::components::section_heading::SectionHeading;
use crate::state::visibility::{Reveal, reveal_class, stagger_style};

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    let visible = use_section_visible("why-choose-us");

    view! {
        <section id="why-choose-us" class="section">
            <div class="container">
                <SectionHeading
                    title="Why Choose Velan Properties?"
                    subtitle="Your success is our commitment"
                    visible=visible
                />
                <div class="reasons">
                    {REASONS
                        .iter()
                        .enumerate()
                        .map(|(index, reason)| {
                            view! {
                                <div
                                    class=move || format!("reason {}", reveal_class(visible.get(), Reveal::FromRight))
                                    style=stagger_style(index, 200)
                                >
                                    <SvgIcon icon=reason.icon class="reason__icon"/>
                                    <div>
                                        <h3 class="card__title">{reason.title}</h3>
                                        <p class="card__text">{reason.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
