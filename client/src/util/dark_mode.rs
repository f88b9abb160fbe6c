//! Dark mode flag.
//!
//! Reads the `darkMode` flag from `localStorage` and marks the `<body>` with
//! `light-mode` when the visitor opted out of the dark theme. The page never
//! writes the flag; it is set by whoever hosts the page.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a blocked or missing `localStorage` reads
//! as "nothing stored", which keeps the default dark theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "browser")]
use scroll::consts::{DARK_MODE_STORAGE_KEY, LIGHT_MODE_CLASS};
use scroll::theme::Theme;

/// Read the stored theme preference.
pub fn read_preference() -> Theme {
    #[cfg(feature = "browser")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(DARK_MODE_STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "browser"))]
    {
        Theme::default()
    }
}

/// Add or remove the `light-mode` class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "browser")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let light = theme.body_class().is_some();
        if let Err(err) = body.class_list().toggle_with_force(LIGHT_MODE_CLASS, light) {
            log::warn!("dark mode: {err:?}");
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = theme;
    }
}

/// Read the preference and apply it. Returns the theme in effect.
pub fn init() -> Theme {
    let theme = read_preference();
    apply(theme);
    theme
}
