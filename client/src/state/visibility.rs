//! Scroll-reveal visibility flags.
//!
//! DESIGN
//! ======
//! Each section id maps to a one-way flag: it starts hidden and flips to
//! visible on the first intersecting report, then never reverts. Repeated or
//! non-intersecting reports are no-ops, so the observer callback can forward
//! every batch without deduplication. The set is only written by that
//! callback and read by render closures on the same event loop.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::collections::HashSet;

/// Fraction of a section that must be on screen before it is revealed.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Settings for the section observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Intersection ratio in `0.0..=1.0`.
    pub threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

impl ObserverConfig {
    /// Config with `threshold` clamped into `0.0..=1.0`.
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        Self { threshold }
    }
}

/// One entry of an observer batch, reduced to what the page needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionReport {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionReport {
    #[must_use]
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self { id: id.into(), is_intersecting }
    }
}

/// Set of section ids that have been revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    visible: HashSet<String>,
}

impl VisibilitySet {
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Reveal `id`. Returns `true` only the first time.
    pub fn mark_visible(&mut self, id: &str) -> bool {
        if id.is_empty() || self.visible.contains(id) {
            return false;
        }
        self.visible.insert(id.to_owned())
    }

    /// Fold an observer batch into the set and return how many sections were
    /// newly revealed.
    pub fn apply(&mut self, reports: &[IntersectionReport]) -> usize {
        reports
            .iter()
            .filter(|report| report.is_intersecting)
            .filter(|report| self.mark_visible(&report.id))
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Direction an element slides in from when it is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Up,
    FromLeft,
    FromRight,
}

/// Transition classes for an element in a section with the given flag.
#[must_use]
pub fn reveal_class(visible: bool, reveal: Reveal) -> &'static str {
    match (reveal, visible) {
        (Reveal::Up, false) => "reveal reveal--up",
        (Reveal::Up, true) => "reveal reveal--up reveal--visible",
        (Reveal::FromLeft, false) => "reveal reveal--left",
        (Reveal::FromLeft, true) => "reveal reveal--left reveal--visible",
        (Reveal::FromRight, false) => "reveal reveal--right",
        (Reveal::FromRight, true) => "reveal reveal--right reveal--visible",
    }
}

/// Inline `transition-delay` for the `index`-th card of a staggered grid.
#[must_use]
pub fn stagger_style(index: usize, step_ms: usize) -> String {
    format!("transition-delay: {}ms", index * step_ms)
}
