#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn absent_element_uses_defaults() {
    assert_eq!(parse(None), PageConfig::default());
}

#[test]
fn blank_element_uses_defaults() {
    assert_eq!(parse(Some("  \n ")), PageConfig::default());
}

#[test]
fn overrides_are_applied() {
    let config = parse(Some(r#"{ "highlightThreshold": 90, "toastDurationMs": 2500 }"#));
    assert_eq!(config.highlight_threshold, 90.0);
    assert_eq!(config.toast_duration_ms, 2_500);
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    assert_eq!(parse(Some("{ not json")), PageConfig::default());
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    assert_eq!(parse(Some(r#"{ "advanceAnchor": 3 }"#)), PageConfig::default());
}

#[cfg(not(feature = "browser"))]
#[test]
fn load_outside_browser_is_default() {
    assert_eq!(load(), PageConfig::default());
}
