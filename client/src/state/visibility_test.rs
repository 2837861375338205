use super::*;

// =============================================================
// VisibilitySet
// =============================================================

#[test]
fn sections_start_hidden() {
    let set = VisibilitySet::default();
    assert!(set.is_empty());
    for id in agency::content::SECTION_IDS {
        assert!(!set.is_visible(id));
    }
}

#[test]
fn first_intersection_reveals_section() {
    let mut set = VisibilitySet::default();
    let revealed = set.apply(&[IntersectionReport::new("about", true)]);
    assert_eq!(revealed, 1);
    assert!(set.is_visible("about"));
    assert!(!set.is_visible("services"));
}

#[test]
fn non_intersecting_report_does_not_reveal() {
    let mut set = VisibilitySet::default();
    assert_eq!(set.apply(&[IntersectionReport::new("contact", false)]), 0);
    assert!(!set.is_visible("contact"));
}

#[test]
fn visibility_never_reverts_after_leaving_viewport() {
    let mut set = VisibilitySet::default();
    set.apply(&[IntersectionReport::new("properties", true)]);
    set.apply(&[IntersectionReport::new("properties", false)]);
    assert!(set.is_visible("properties"));
}

#[test]
fn repeated_intersections_are_idempotent() {
    let mut set = VisibilitySet::default();
    assert!(set.mark_visible("home"));
    assert!(!set.mark_visible("home"));
    assert_eq!(set.apply(&[IntersectionReport::new("home", true)]), 0);
    assert_eq!(set.len(), 1);
}

#[test]
fn batch_counts_only_new_sections() {
    let mut set = VisibilitySet::default();
    set.mark_visible("home");
    let batch = [
        IntersectionReport::new("home", true),
        IntersectionReport::new("about", true),
        IntersectionReport::new("services", false),
        IntersectionReport::new("about", true),
        IntersectionReport::new("why-choose-us", true),
    ];
    assert_eq!(set.apply(&batch), 2);
    assert!(set.is_visible("why-choose-us"));
    assert!(!set.is_visible("services"));
}

#[test]
fn empty_id_is_ignored() {
    let mut set = VisibilitySet::default();
    assert!(!set.mark_visible(""));
    assert_eq!(set.apply(&[IntersectionReport::new("", true)]), 0);
    assert!(set.is_empty());
}

#[test]
fn reveal_order_does_not_matter() {
    let mut forward = VisibilitySet::default();
    let mut backward = VisibilitySet::default();
    for id in agency::content::SECTION_IDS {
        forward.mark_visible(id);
    }
    for id in agency::content::SECTION_IDS.iter().rev() {
        backward.mark_visible(id);
    }
    assert_eq!(forward, backward);
}

// =============================================================
// ObserverConfig
// =============================================================

#[test]
fn observer_config_default_threshold() {
    assert!((ObserverConfig::default().threshold - 0.1).abs() < f64::EPSILON);
}

#[test]
fn observer_config_clamps_threshold() {
    assert!((ObserverConfig::with_threshold(1.5).threshold - 1.0).abs() < f64::EPSILON);
    assert!(ObserverConfig::with_threshold(-0.2).threshold.abs() < f64::EPSILON);
    assert!((ObserverConfig::with_threshold(f64::NAN).threshold - DEFAULT_THRESHOLD).abs() < f64::EPSILON);
}

// =============================================================
// Classes
// =============================================================

#[test]
fn reveal_class_adds_visible_modifier() {
    assert_eq!(reveal_class(false, Reveal::Up), "reveal reveal--up");
    assert_eq!(reveal_class(true, Reveal::Up), "reveal reveal--up reveal--visible");
    assert!(reveal_class(true, Reveal::FromLeft).ends_with("reveal--visible"));
    assert!(!reveal_class(false, Reveal::FromRight).contains("reveal--visible"));
}

#[test]
fn stagger_style_scales_with_index() {
    assert_eq!(stagger_style(0, 200), "transition-delay: 0ms");
    assert_eq!(stagger_style(3, 150), "transition-delay: 450ms");
}
