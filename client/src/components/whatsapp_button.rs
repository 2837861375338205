//! WhatsApp call-to-action button.

use agency::AGENCY;
use agency::content::Icon;
use leptos::prelude::*;

use crate::components::icon::SvgIcon;

/// Link that opens the agency chat in a new browsing context.
#[component]
pub fn WhatsAppButton(
    #[prop(into)] label: String,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    view! {
        <a
            class="btn btn--whatsapp"
            class:btn--large=large
            href=AGENCY.whatsapp_link()
            target="_blank"
            rel="noopener noreferrer"
        >
            <SvgIcon icon=Icon::Message class="btn__icon"/>
            {label}
        </a>
    }
}
