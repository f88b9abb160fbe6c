//! Scroll tracking and page-widget logic for the portfolio page.
//!
//! This crate holds every decision the page makes, with no browser
//! dependency. The `client` crate reads the live document (section offsets,
//! scroll position, nav links) into the plain types defined here, asks this
//! crate what should change, and applies the answer to the DOM. Nothing in
//! here reads ambient globals, so every rule can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`section`] | Page sections and the viewport scroll signal |
//! | [`locator`] | Passive highlight policy and the advance (next section) policy |
//! | [`nav`] | Navigation link set and the active-link synchronizer |
//! | [`dispatch`] | Scroll-signal dispatcher with explicit subscriptions |
//! | [`chrome`] | Navbar, scroll-to-top and parallax state derived from scroll |
//! | [`menu`] | Mobile navigation menu open/close state |
//! | [`input`] | Keyboard modifiers and page shortcuts |
//! | [`contact`] | Contact form submission record |
//! | [`reveal`] | Reveal animations, stagger timing and lazy images |
//! | [`share`] | Share-button URL construction |
//! | [`theme`] | Dark-mode flag interpretation |
//! | [`telemetry`] | Page-view and load-timing records |
//! | [`config`] | Tunable page constants with literal defaults |
//! | [`consts`] | Shared constants (selectors, class names, defaults) |

pub mod chrome;
pub mod config;
pub mod consts;
pub mod contact;
pub mod dispatch;
pub mod input;
pub mod locator;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod section;
pub mod share;
pub mod telemetry;
pub mod theme;
