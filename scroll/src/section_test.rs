#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Section
// =============================================================

#[test]
fn section_new_accepts_str_and_string() {
    let a = Section::new("about", 10.0, 20.0);
    let b = Section::new(String::from("about"), 10.0, 20.0);
    assert_eq!(a, b);
}

#[test]
fn section_deserializes_from_json() {
    let s: Section = serde_json::from_str(r#"{"id":"home","top":0,"height":800}"#).unwrap();
    assert_eq!(s, Section::new("home", 0.0, 800.0));
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn viewport_default_is_top_of_page() {
    let v = Viewport::default();
    assert_eq!(v.scroll_y, 0.0);
    assert_eq!(v.height, 0.0);
}

#[test]
fn viewport_midpoint_is_half_height_below_scroll() {
    let v = Viewport::new(1100.0, 800.0);
    assert_eq!(v.anchor(0.5), 1500.0);
}

#[test]
fn viewport_anchor_zero_is_scroll_offset() {
    let v = Viewport::new(250.0, 900.0);
    assert_eq!(v.anchor(0.0), 250.0);
    assert_eq!(v.anchor(1.0), 1150.0);
}
