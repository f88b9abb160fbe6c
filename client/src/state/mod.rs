//! Reactive page state shared with the Leptos widgets.

pub mod page;
