//! Hook connecting section components to the shared visibility flags.

use leptos::prelude::*;

use crate::state::visibility::VisibilitySet;

/// Memoized "has this section been revealed" flag.
///
/// Falls back to always-hidden when no [`VisibilitySet`] context is provided,
/// which keeps components renderable in isolation.
pub fn use_section_visible(id: &'static str) -> Memo<bool> {
    let visibility = use_context::<RwSignal<VisibilitySet>>();
    Memo::new(move |_| visibility.is_some_and(|set| set.with(|v| v.is_visible(id))))
}
