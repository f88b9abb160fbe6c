//! # client
//!
//! WebAssembly front end for the portfolio page. The page itself is static
//! HTML; this crate attaches behavior to it at load time.
//!
//! Every decision (which nav link is active, where "next section" lands,
//! when the navbar shades, what a share link looks like) is made by the
//! `scroll` crate from plain values. This crate only measures the document,
//! forwards events, and writes the answers back as classes, styles and
//! scroll calls. Browser code sits behind the `browser` feature so the
//! state and helper modules still build and test natively.

pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod components;
#[cfg(feature = "browser")]
pub mod handlers;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point run by the generated JS glue once the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    app::start();
}

/// Smooth-scroll to the next section below the viewport midpoint, wrapping
/// to the first section at the end of the page.
///
/// Exported for inline `onclick` handlers in the page markup.
#[cfg(feature = "browser")]
#[wasm_bindgen(js_name = scrollToNextSection)]
pub fn scroll_to_next_section() {
    if let Err(err) = handlers::nav::advance(&util::page_config::load()) {
        log::warn!("next section: {err}");
    }
}
