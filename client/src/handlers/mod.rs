//! DOM event bindings.
//!
//! Each module exposes an `install` function that looks up its elements,
//! attaches listeners for the lifetime of the page and returns a
//! [`crate::error::BindError`] if something it needs is missing. Decisions
//! are delegated to the `scroll` crate; these modules only translate between
//! events, plain values and DOM writes.

pub mod anchors;
pub mod contact;
pub mod keyboard;
pub mod nav;
pub mod reveal;
pub mod share;
pub mod tracking;
