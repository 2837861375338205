//! Two-tone agency wordmark.

use leptos::prelude::*;

#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <div class="brand">
            "Velan " <span class="brand__accent">"Properties"</span>
        </div>
    }
}
