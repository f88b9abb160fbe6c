//! Page-wide UI state.
//!
//! Provided as `RwSignal<PageState>` context to the mounted widgets. Scroll
//! handlers write to it only when a chrome toggle flips, so widgets are not
//! re-rendered on every scroll tick. The parallax offset never lands here.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use scroll::chrome::ChromeState;
use scroll::menu::{MenuEvent, MenuState};
use scroll::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageState {
    pub chrome: ChromeState,
    pub menu: MenuState,
    pub theme: Theme,
}

impl PageState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Replace the scroll-derived chrome. Returns `true` if it differs.
    pub fn set_chrome(&mut self, chrome: ChromeState) -> bool {
        let changed = self.chrome != chrome;
        self.chrome = chrome;
        changed
    }

    /// Forward a menu event. Returns `true` if the menu opened or closed.
    pub fn apply_menu(&mut self, event: MenuEvent) -> bool {
        self.menu.apply(event)
    }
}
