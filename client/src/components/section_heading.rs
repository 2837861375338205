//! Centered section title with a lead paragraph.

use leptos::prelude::*;

use crate::state::visibility::{Reveal, reveal_class};

#[component]
pub fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
    visible: Memo<bool>,
    #[prop(optional)] inverted: bool,
) -> impl IntoView {
    view! {
        <div class=move || format!("section-heading {}", reveal_class(visible.get(), Reveal::Up))>
            <h2 class="section-heading__title" class:section-heading__title--inverted=inverted>
                {title}
            </h2>
            <p class="section-heading__subtitle">{subtitle}</p>
        </div>
    }
}
