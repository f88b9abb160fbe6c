//! Mobile navigation menu state.
//!
//! The hamburger button and the `.nav-menu` list share one open flag; the
//! host mirrors it as the `active` class on both elements.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Events that can open or close the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger button was clicked.
    HamburgerClicked,
    /// A navigation link was clicked.
    LinkClicked,
    /// A click landed somewhere in the document.
    DocumentClicked {
        /// The click target is inside `.nav-container` or `.nav-menu`.
        inside_nav: bool,
    },
    /// Escape was pressed.
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Apply `event`. Returns `true` if the open flag changed.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        let next = match event {
            MenuEvent::HamburgerClicked => !self.open,
            MenuEvent::LinkClicked | MenuEvent::Escape => false,
            MenuEvent::DocumentClicked { inside_nav } => self.open && inside_nav,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}
