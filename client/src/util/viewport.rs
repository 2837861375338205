//! Viewport intersection observer for scroll-reveal sections.
//!
//! Watches every element carrying an `id` and forwards intersection batches
//! as [`IntersectionReport`]s. Requires a browser environment; non-hydrate
//! builds never create an observer.
//!
//! TRADE-OFFS
//! ==========
//! Observer creation is best-effort. If the browser lacks
//! `IntersectionObserver` the page simply keeps sections in their initial
//! state rather than failing hydration.

use crate::state::visibility::{IntersectionReport, ObserverConfig};

#[cfg(feature = "hydrate")]
type EntriesCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live observer handle. Owns the JS callback so it outlives the observer.
pub struct SectionObserver {
    #[cfg(feature = "hydrate")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "hydrate")]
    _callback: EntriesCallback,
}

impl SectionObserver {
    /// Stop all further callbacks.
    pub fn disconnect(&self) {
        #[cfg(feature = "hydrate")]
        self.observer.disconnect();
    }
}

/// Observe every `[id]` element in the document.
///
/// Returns `None` outside the browser or when the observer cannot be created.
pub fn observe_sections(
    config: ObserverConfig,
    on_reports: impl Fn(Vec<IntersectionReport>) + 'static,
) -> Option<SectionObserver> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast as _, JsValue};

        let document = web_sys::window()?.document()?;

        let callback = EntriesCallback::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let reports: Vec<IntersectionReport> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionReport::new(entry.target().id(), entry.is_intersecting()))
                    .collect();
                if !reports.is_empty() {
                    on_reports(reports);
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

        let nodes = document.query_selector_all("[id]").ok()?;
        let mut observed = 0_u32;
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }
        log::debug!("observing {observed} sections at threshold {}", config.threshold);

        Some(SectionObserver { observer, _callback: callback })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, on_reports);
        None
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;

    #[test]
    fn observe_sections_is_none_outside_browser() {
        let handle = observe_sections(ObserverConfig::default(), |_| {});
        assert!(handle.is_none());
    }
}
