//! The single marketing page.

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::featured_properties::FeaturedProperties;
use crate::components::hero::Hero;
use crate::components::services_section::ServicesSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::why_choose_us::WhyChooseUs;
use crate::state::visibility::{ObserverConfig, VisibilitySet};
use crate::util::viewport::{SectionObserver, observe_sections};

/// Home page. Starts the section observer once mounted in the browser and
/// disconnects it on teardown.
#[component]
pub fn HomePage() -> impl IntoView {
    let visibility = expect_context::<RwSignal<VisibilitySet>>();
    let observer = StoredValue::new_local(None::<SectionObserver>);

    // Effects only run after hydration, so the server never touches the DOM.
    Effect::new(move || {
        let handle = observe_sections(ObserverConfig::default(), move |reports| {
            visibility.maybe_update(|set| set.apply(&reports) > 0);
        });
        observer.set_value(handle);
    });

    on_cleanup(move || {
        observer.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.disconnect();
            }
        });
    });

    view! {
        <div class="home-page">
            <SiteHeader/>
            <main>
                <Hero/>
                <AboutSection/>
                <ServicesSection/>
                <FeaturedProperties listings=agency::featured()/>
                <WhyChooseUs/>
                <ContactSection/>
            </main>
            <SiteFooter/>
        </div>
    }
}
