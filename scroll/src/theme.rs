//! Dark-mode flag interpretation.
//!
//! The page is dark by default. Only an explicit stored `"false"` switches
//! it to the light theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::LIGHT_MODE_CLASS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interpret the stored flag; `None` means nothing is stored.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("false") { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class the body must carry for this theme, if any.
    #[must_use]
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Self::Dark => None,
            Self::Light => Some(LIGHT_MODE_CLASS),
        }
    }
}
