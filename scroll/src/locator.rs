//! Section locator: maps a scroll position to a section.
//!
//! Two policies share the same inputs but answer different questions, and
//! both must be kept:
//!
//! - [`Locator::active`] (passive highlight) picks the **last** section whose
//!   top is at or above `scroll_y + threshold`. The threshold lets the nav
//!   highlight switch a little before a section reaches the top edge, and
//!   taking the last match keeps the highlight stable inside a section.
//! - [`Locator::advance`] picks the **first** section whose top is strictly
//!   below the viewport anchor (the midpoint by default), wrapping to the
//!   first section once the anchor is past every section start. Repeated
//!   advances therefore cycle through the whole page.
//!
//! Both are pure: they borrow the section slice and return a reference into
//! it. An empty slice yields `None` from either policy.

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;

use crate::config::PageConfig;
use crate::consts::{ADVANCE_ANCHOR, HIGHLIGHT_THRESHOLD_PX};
use crate::section::{Section, Viewport};

/// Section lookup parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locator {
    /// Anticipation distance for the passive highlight, in CSS pixels.
    pub threshold: f64,
    /// Fraction of the viewport height used as the advance reference.
    pub anchor: f64,
}

impl Default for Locator {
    fn default() -> Self {
        Self { threshold: HIGHLIGHT_THRESHOLD_PX, anchor: ADVANCE_ANCHOR }
    }
}

impl Locator {
    #[must_use]
    pub fn new(threshold: f64, anchor: f64) -> Self {
        Self { threshold, anchor }
    }

    #[must_use]
    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.highlight_threshold, config.advance_anchor)
    }

    /// Section to highlight while scrolling freely.
    ///
    /// Sections sharing a `top` resolve to the later one in document order.
    #[must_use]
    pub fn active<'a>(&self, sections: &'a [Section], viewport: Viewport) -> Option<&'a Section> {
        let limit = viewport.scroll_y + self.threshold;
        sections.iter().rev().find(|section| section.top <= limit)
    }

    /// Section an explicit "next section" action should scroll to.
    #[must_use]
    pub fn advance<'a>(&self, sections: &'a [Section], viewport: Viewport) -> Option<&'a Section> {
        let reference = viewport.anchor(self.anchor);
        sections
            .iter()
            .find(|section| section.top > reference)
            .or_else(|| sections.first())
    }

    /// Id of the section returned by [`Locator::active`].
    #[must_use]
    pub fn active_id<'a>(&self, sections: &'a [Section], viewport: Viewport) -> Option<&'a str> {
        self.active(sections, viewport).map(|section| section.id.as_str())
    }
}
