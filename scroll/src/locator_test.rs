#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

fn page(tops: &[f64]) -> Vec<Section> {
    tops.iter()
        .enumerate()
        .map(|(i, top)| Section::new(format!("s{i}"), *top, 100.0))
        .collect()
}

fn portfolio() -> Vec<Section> {
    vec![
        Section::new("home", 0.0, 500.0),
        Section::new("about", 500.0, 500.0),
        Section::new("contact", 1000.0, 500.0),
    ]
}

fn advance_id<'a>(locator: &Locator, sections: &'a [Section], viewport: Viewport) -> Option<&'a str> {
    locator.advance(sections, viewport).map(|section| section.id.as_str())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_uses_literal_constants() {
    let locator = Locator::default();
    assert_eq!(locator.threshold, 200.0);
    assert_eq!(locator.anchor, 0.5);
}

#[test]
fn from_config_copies_tunables() {
    let config = PageConfig { highlight_threshold: 80.0, advance_anchor: 0.25, ..PageConfig::default() };
    assert_eq!(Locator::from_config(&config), Locator::new(80.0, 0.25));
}

// =============================================================
// Passive highlight policy
// =============================================================

#[test]
fn active_threshold_case() {
    let sections = page(&[0.0, 600.0]);
    let active = Locator::default().active(&sections, Viewport::new(350.0, 800.0));
    assert_eq!(active.map(|s| s.top), Some(0.0));
}

#[test]
fn active_switches_exactly_at_threshold() {
    let sections = page(&[0.0, 600.0]);
    let locator = Locator::default();
    assert_eq!(locator.active_id(&sections, Viewport::new(399.0, 800.0)), Some("s0"));
    assert_eq!(locator.active_id(&sections, Viewport::new(400.0, 800.0)), Some("s1"));
}

#[test]
fn active_is_none_above_first_section() {
    let sections = page(&[500.0, 900.0]);
    assert_eq!(Locator::default().active(&sections, Viewport::new(0.0, 800.0)), None);
}

#[test]
fn active_prefers_later_section_on_equal_tops() {
    let sections = vec![
        Section::new("intro", 0.0, 0.0),
        Section::new("hero", 0.0, 700.0),
        Section::new("work", 700.0, 700.0),
    ];
    assert_eq!(Locator::default().active_id(&sections, Viewport::new(0.0, 800.0)), Some("hero"));
}

#[test]
fn active_picks_last_section_at_bottom_of_page() {
    let sections = portfolio();
    assert_eq!(Locator::default().active_id(&sections, Viewport::new(5_000.0, 800.0)), Some("contact"));
}

#[test]
fn active_ignores_viewport_height() {
    let sections = portfolio();
    let locator = Locator::default();
    let short = locator.active_id(&sections, Viewport::new(320.0, 100.0));
    let tall = locator.active_id(&sections, Viewport::new(320.0, 4_000.0));
    assert_eq!(short, tall);
    assert_eq!(short, Some("about"));
}

#[test]
fn active_with_custom_threshold() {
    let sections = page(&[0.0, 600.0]);
    let locator = Locator::new(0.0, 0.5);
    assert_eq!(locator.active_id(&sections, Viewport::new(599.0, 800.0)), Some("s0"));
    assert_eq!(locator.active_id(&sections, Viewport::new(600.0, 800.0)), Some("s1"));
}

// =============================================================
// Advance policy
// =============================================================

#[test]
fn advance_wraps_to_first_section() {
    let sections = portfolio();
    let target = Locator::default().advance(&sections, Viewport::new(1100.0, 800.0));
    assert_eq!(target.map(|s| s.top), Some(0.0));
}

#[test]
fn advance_moves_forward_from_midpoint() {
    let sections = portfolio();
    let target = Locator::default().advance(&sections, Viewport::new(100.0, 400.0));
    assert_eq!(target.map(|s| s.top), Some(500.0));
}

#[test]
fn advance_requires_strictly_greater_top() {
    let sections = portfolio();
    // Reference lands exactly on `about`; the next one is `contact`.
    let target = advance_id(&Locator::default(), &sections, Viewport::new(300.0, 400.0));
    assert_eq!(target, Some("contact"));
}

#[test]
fn advance_from_top_of_page_skips_first_section() {
    let sections = portfolio();
    assert_eq!(advance_id(&Locator::default(), &sections, Viewport::new(0.0, 600.0)), Some("about"));
}

#[test]
fn advance_with_top_anchor() {
    let sections = portfolio();
    let locator = Locator::new(200.0, 0.0);
    assert_eq!(advance_id(&locator, &sections, Viewport::new(100.0, 4_000.0)), Some("about"));
}

#[test]
fn repeated_advance_cycles_through_every_section() {
    let sections = portfolio();
    let locator = Locator::default();
    let mut viewport = Viewport::new(0.0, 400.0);
    let mut visited = Vec::new();
    for _ in 0..4 {
        let target = locator.advance(&sections, viewport).unwrap();
        visited.push(target.id.clone());
        viewport.scroll_y = target.top;
    }
    assert_eq!(visited, ["about", "contact", "home", "about"]);
}

// =============================================================
// Empty list
// =============================================================

#[test]
fn empty_list_yields_none_for_both_policies() {
    let locator = Locator::default();
    let viewport = Viewport::new(1234.0, 800.0);
    assert_eq!(locator.active(&[], viewport), None);
    assert_eq!(locator.advance(&[], viewport), None);
}

// =============================================================
// Properties
// =============================================================

fn sorted_sections() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec(0.0_f64..10_000.0, 0..12).prop_map(|mut tops| {
        tops.sort_by(f64::total_cmp);
        page(&tops)
    })
}

proptest! {
    #[test]
    fn active_is_none_or_member(sections in sorted_sections(), scroll_y in -1_000.0_f64..12_000.0) {
        let viewport = Viewport::new(scroll_y, 800.0);
        if let Some(active) = Locator::default().active(&sections, viewport) {
            prop_assert!(sections.iter().any(|s| s.id == active.id));
        }
    }

    #[test]
    fn active_top_is_monotonic_in_scroll(
        sections in sorted_sections(),
        a in -1_000.0_f64..12_000.0,
        b in -1_000.0_f64..12_000.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let locator = Locator::default();
        let before = locator.active(&sections, Viewport::new(low, 800.0)).map(|s| s.top);
        let after = locator.active(&sections, Viewport::new(high, 800.0)).map(|s| s.top);
        if let Some(before) = before {
            prop_assert!(after.is_some_and(|after| after >= before));
        }
    }

    #[test]
    fn active_is_idempotent(sections in sorted_sections(), scroll_y in -1_000.0_f64..12_000.0) {
        let locator = Locator::default();
        let viewport = Viewport::new(scroll_y, 800.0);
        prop_assert_eq!(locator.active(&sections, viewport), locator.active(&sections, viewport));
    }

    #[test]
    fn advance_is_some_iff_list_non_empty(
        sections in sorted_sections(),
        scroll_y in -1_000.0_f64..12_000.0,
        height in 0.0_f64..2_000.0,
    ) {
        let target = Locator::default().advance(&sections, Viewport::new(scroll_y, height));
        prop_assert_eq!(target.is_some(), !sections.is_empty());
    }
}
