//! Keyboard input: modifier keys and the page's shortcuts.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A keyboard key as reported by the browser's `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

/// Page-level keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `Ctrl + /`: open search.
    Search,
    /// `Escape`: close the navigation menu.
    CloseMenu,
}

impl Shortcut {
    #[must_use]
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Option<Self> {
        match key.0.as_str() {
            "/" if modifiers.ctrl => Some(Self::Search),
            "Escape" => Some(Self::CloseMenu),
            _ => None,
        }
    }

    /// Whether the browser's default handling must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Search)
    }
}
