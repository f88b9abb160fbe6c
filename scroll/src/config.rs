//! Tunable page constants.
//!
//! Every field defaults to the value the page has always used, so an empty
//! or absent configuration behaves exactly like the built-in constants. The
//! host may supply overrides as JSON (camelCase keys).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ADVANCE_ANCHOR, HIGHLIGHT_THRESHOLD_PX, NAVBAR_SCROLLED_AFTER_PX, PARALLAX_RATE, SCROLL_TOP_VISIBLE_AFTER_PX,
    SHARE_TEXT, TOAST_DURATION_MS,
};

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input is not valid JSON or has a field of the wrong type.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but its value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Passive highlight anticipation, in CSS pixels.
    pub highlight_threshold: f64,
    /// Fraction of viewport height used as the advance reference (0 = top, 1 = bottom).
    pub advance_anchor: f64,
    pub navbar_scrolled_after: f64,
    pub scroll_top_visible_after: f64,
    pub parallax_rate: f64,
    pub toast_duration_ms: u32,
    pub share_text: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            highlight_threshold: HIGHLIGHT_THRESHOLD_PX,
            advance_anchor: ADVANCE_ANCHOR,
            navbar_scrolled_after: NAVBAR_SCROLLED_AFTER_PX,
            scroll_top_visible_after: SCROLL_TOP_VISIBLE_AFTER_PX,
            parallax_rate: PARALLAX_RATE,
            toast_duration_ms: TOAST_DURATION_MS,
            share_text: SHARE_TEXT.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::Invalid`]
    /// for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("highlightThreshold", self.highlight_threshold),
            ("navbarScrolledAfter", self.navbar_scrolled_after),
            ("scrollTopVisibleAfter", self.scroll_top_visible_after),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be a non-negative number, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.advance_anchor) {
            return Err(ConfigError::Invalid(format!(
                "advanceAnchor must be within 0..=1, got {}",
                self.advance_anchor
            )));
        }
        if !self.parallax_rate.is_finite() {
            return Err(ConfigError::Invalid(format!("parallaxRate must be finite, got {}", self.parallax_rate)));
        }
        Ok(())
    }
}
