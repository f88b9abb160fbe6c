//! Page sections and the scroll signal.
//!
//! A [`Section`] is one `<section>` of the page as measured by the host at
//! the moment of the query. The host builds a fresh slice of sections on
//! every event; nothing here caches layout, so a reflow is picked up by the
//! next read. [`Viewport`] is the scroll signal delivered with each event.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use serde::{Deserialize, Serialize};

/// A vertically ordered region of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Element id, matched against nav link fragments. Empty when the
    /// element has no id; such a section never matches a link.
    pub id: String,
    /// Distance from the document origin to the section's top edge, in CSS pixels.
    pub top: f64,
    /// Rendered height in CSS pixels.
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

/// Scroll position and visible height, read fresh on each scroll or resize.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Vertical scroll offset of the document, in CSS pixels.
    pub scroll_y: f64,
    /// Visible viewport height, in CSS pixels.
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    /// Document offset `fraction` of the way down the visible area.
    ///
    /// `anchor(0.5)` is the viewport midpoint.
    #[must_use]
    pub fn anchor(&self, fraction: f64) -> f64 {
        self.scroll_y + self.height * fraction
    }
}
