//! Page footer with quick links and contact info.

use agency::AGENCY;
use agency::content::{FOOTER_LINKS, FOOTER_SERVICES};
use leptos::prelude::*;

use crate::components::brand::Brand;
use crate::components::whatsapp_button::WhatsAppButton;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <div>
                    <Brand/>
                    <p class="site-footer__text">
                        "Your trusted partner in real estate, helping you find the perfect property."
                    </p>
                    <WhatsAppButton label="WhatsApp"/>
                </div>
                <div>
                    <h4 class="site-footer__heading">"Quick Links"</h4>
                    <ul class="site-footer__list">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <h4 class="site-footer__heading">"Services"</h4>
                    <ul class="site-footer__list">
                        {FOOTER_SERVICES
                            .iter()
                            .map(|label| view! { <li><a href="#services">{*label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <h4 class="site-footer__heading">"Contact Info"</h4>
                    <div class="site-footer__list">
                        <p>{AGENCY.whatsapp_number}</p>
                        <p>{AGENCY.footer_email}</p>
                        <p>{AGENCY.address}</p>
                    </div>
                </div>
            </div>
            <div class="site-footer__legal">
                <p>"© 2024 Velan Properties. All rights reserved."</p>
            </div>
        </footer>
    }
}
