//! Full-height hero banner with the primary calls to action.

use agency::content::HERO_IMAGE;
use leptos::prelude::*;

use crate::components::reveal::use_section_visible;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::state::visibility::{Reveal, reveal_class};
use crate::util::browser::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let visible = use_section_visible("home");
    let class_for = move |extra: &'static str| {
        move || format!("{extra} {}", reveal_class(visible.get(), Reveal::Up))
    };

    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop" style=format!("background-image: url(\"{HERO_IMAGE}\")")></div>
            <div class="hero__scrim"></div>
            <div class="hero__content">
                <h1 class=class_for("hero__title")>
                    "Your Trusted Partner in " <span class="accent">"Real Estate"</span>
                </h1>
                <p class=class_for("hero__lead reveal--delay-300")>
                    "Find your dream home with our expert guidance and transparent service"
                </p>
                <div class=class_for("hero__actions reveal--delay-500")>
                    <WhatsAppButton label="Chat on WhatsApp" large=true/>
                    <button
                        class="btn btn--outline btn--large"
                        on:click=move |_| scroll_to_section("properties")
                    >
                        "Explore Properties"
                    </button>
                </div>
            </div>
        </section>
    }
}
