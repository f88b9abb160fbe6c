//! Page chrome derived from the scroll position: navbar shading, the
//! scroll-to-top button and the hero parallax offset.
//!
//! [`ChromeState`] only holds the on/off toggles, which change at two
//! scroll offsets. [`Parallax`] moves with every pixel and is written
//! straight to the hero text.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use crate::config::PageConfig;
use crate::section::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    /// Navbar carries the `scrolled` class.
    pub navbar_scrolled: bool,
    /// Scroll-to-top button is displayed.
    pub scroll_top_visible: bool,
}

impl ChromeState {
    /// Both thresholds are exclusive: sitting exactly on one keeps the element hidden.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, config: &PageConfig) -> Self {
        Self {
            navbar_scrolled: viewport.scroll_y > config.navbar_scrolled_after,
            scroll_top_visible: viewport.scroll_y > config.scroll_top_visible_after,
        }
    }

    /// CSS `display` value for the scroll-to-top button.
    #[must_use]
    pub fn scroll_top_display(&self) -> &'static str {
        if self.scroll_top_visible { "flex" } else { "none" }
    }
}

/// Vertical translation of the hero text, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parallax {
    pub offset: f64,
}

impl Parallax {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, config: &PageConfig) -> Self {
        Self { offset: viewport.scroll_y * config.parallax_rate }
    }

    /// CSS `transform` value for the hero text.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset)
    }
}
