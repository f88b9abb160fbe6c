//! Navigation links and the active-link synchronizer.
//!
//! [`NavLinks`] mirrors the page's `.nav-link` elements in document order.
//! [`ActiveLinkSync`] runs the passive locator policy on each scroll signal
//! and writes the answer into the link set; the host then copies each link's
//! `active` flag onto the matching element's class list.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::dispatch::{ScrollFrame, ScrollObserver};
use crate::locator::Locator;
use crate::section::{Section, Viewport};

/// One navigation link: its `href` and whether it is highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

impl NavLink {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into(), active: false }
    }

    /// Whether this link points at the section with id `section_id`.
    ///
    /// An empty id targets nothing, so a bare `#` link is never matched.
    #[must_use]
    pub fn targets(&self, section_id: &str) -> bool {
        !section_id.is_empty() && self.href.strip_prefix('#') == Some(section_id)
    }
}

/// Ordered set of navigation links. At most one is active after any update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLinks {
    links: Vec<NavLink>,
}

impl NavLinks {
    #[must_use]
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { links: hrefs.into_iter().map(NavLink::new).collect() }
    }

    /// Highlight the first link targeting `section_id` and clear the rest.
    ///
    /// `None` clears every link. Returns the index of the highlighted link.
    pub fn set_active_section(&mut self, section_id: Option<&str>) -> Option<usize> {
        let index = section_id.and_then(|id| self.links.iter().position(|link| link.targets(id)));
        self.set_active_index(index);
        index
    }

    /// Highlight the link at `index` (e.g. the one just clicked) and clear the rest.
    ///
    /// An out-of-range index clears every link.
    pub fn activate_index(&mut self, index: usize) -> Option<usize> {
        let index = (index < self.links.len()).then_some(index);
        self.set_active_index(index);
        index
    }

    fn set_active_index(&mut self, index: Option<usize>) {
        for (i, link) in self.links.iter_mut().enumerate() {
            link.active = Some(i) == index;
        }
    }

    /// Links in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, NavLink> {
        self.links.iter()
    }
}

/// Keeps [`NavLinks`] in step with the passive highlight policy.
#[derive(Debug, Clone, Default)]
pub struct ActiveLinkSync {
    pub locator: Locator,
    pub links: NavLinks,
}

impl ActiveLinkSync {
    #[must_use]
    pub fn new(locator: Locator, links: NavLinks) -> Self {
        Self { locator, links }
    }

    /// Recompute the active section and update the links.
    ///
    /// Returns the index of the highlighted link. Running it twice with the
    /// same inputs leaves the links unchanged.
    pub fn sync(&mut self, sections: &[Section], viewport: Viewport) -> Option<usize> {
        let active = self.locator.active_id(sections, viewport);
        self.links.set_active_section(active)
    }
}

impl ScrollObserver for ActiveLinkSync {
    fn on_scroll(&mut self, frame: &ScrollFrame<'_>) {
        self.sync(frame.sections, frame.viewport);
    }
}

/// Selector for an in-page anchor's target, or `None` for a bare `#` or an
/// external link.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href != "#").then_some(href)
}
