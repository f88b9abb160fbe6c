//! Shared constants for the scroll crate.

// ── Scroll thresholds ───────────────────────────────────────────

/// How far below the viewport top a section may start and still count as active.
pub const HIGHLIGHT_THRESHOLD_PX: f64 = 200.0;

/// Fraction of the viewport height added to `scroll_y` to get the advance reference.
pub const ADVANCE_ANCHOR: f64 = 0.5;

/// Scroll offset past which the navbar gets its `scrolled` class.
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 50.0;

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 300.0;

/// Hero text moves at this fraction of the scroll speed.
pub const PARALLAX_RATE: f64 = 0.5;

// ── Toast ───────────────────────────────────────────────────────

/// Lifetime of the contact-form success toast.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Text shown after a contact form submission.
pub const TOAST_MESSAGE: &str = "✓ Message sent! I'll get back to you within 24 hours.";

// ── Sharing ─────────────────────────────────────────────────────

/// Default text attached to share links.
pub const SHARE_TEXT: &str = "Check out this amazing portfolio!";

/// Popup window features for share links.
pub const SHARE_WINDOW_FEATURES: &str = "width=600,height=400";

// ── Selectors and classes ───────────────────────────────────────

/// Selector for page sections.
pub const SECTION_SELECTOR: &str = "section";

/// Selector for navigation links.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Class toggled on the active nav link, the open menu and the open hamburger.
pub const ACTIVE_CLASS: &str = "active";

/// Class added to the navbar once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class added to the body when dark mode is off.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// `localStorage` key holding the dark-mode flag.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// Selector for the fixed navbar.
pub const NAVBAR_SELECTOR: &str = ".navbar";

/// Selector for the hamburger button that opens the mobile menu.
pub const HAMBURGER_SELECTOR: &str = ".hamburger";

/// Selector for the navigation menu list.
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";

/// Selector for the navbar's inner container; clicks inside it keep the menu open.
pub const NAV_CONTAINER_SELECTOR: &str = ".nav-container";

/// Selector for elements that trigger the advance (next section) action.
pub const ADVANCE_TRIGGER_SELECTOR: &str = "[data-action=\"next-section\"], .scroll-indicator";

/// Selector for in-page anchors.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector for the hero block; parallax only runs when it exists.
pub const HERO_SELECTOR: &str = ".hero";

/// Selector for the hero text moved by the parallax effect.
pub const HERO_TEXT_SELECTOR: &str = ".hero .hero-text";

/// Element id of the contact form.
pub const CONTACT_FORM_ID: &str = "contactForm";
