//! Fixed top navigation bar.

use agency::content::NAV_LINKS;
use leptos::prelude::*;

use crate::components::brand::Brand;
use crate::components::whatsapp_button::WhatsAppButton;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="site-header__nav container">
                <Brand/>
                <div class="site-header__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a class="site-header__link" href=link.href>{link.label}</a> })
                        .collect::<Vec<_>>()}
                </div>
                <WhatsAppButton label="WhatsApp"/>
            </nav>
        </header>
    }
}
