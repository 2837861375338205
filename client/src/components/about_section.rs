//! About the agency, with three highlight cards.

use agency::content::ABOUT_HIGHLIGHTS;
use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::components::reveal::use_section_visible;
use crate::components::section_heading::SectionHeading;
use crate::state::visibility::{Reveal, reveal_class, stagger_style};

#[component]
pub fn AboutSection() -> impl IntoView {
    let visible = use_section_visible("about");

    view! {
        <section id="about" class="section section--muted">
            <div class="container">
                <SectionHeading
                    title="About Velan Properties"
                    subtitle="We are a trusted real estate service provider committed to helping you find the perfect property. With years of experience and local expertise, we ensure transparent, reliable, and smart investment solutions."
                    visible=visible
                />
                <div class="grid grid--3">
                    {ABOUT_HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <div
                                    class=move || format!("card highlight-card {}", reveal_class(visible.get(), Reveal::Up))
                                    style=stagger_style(index, 200)
                                >
                                    <SvgIcon icon=item.icon class="highlight-card__icon"/>
                                    <h3 class="card__title">{item.title}</h3>
                                    <p class="card__text">{item.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
