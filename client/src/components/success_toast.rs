//! Transient confirmation banner.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::util::dom;

#[component]
pub fn SuccessToast(message: &'static str) -> impl IntoView {
    view! { <div class="success-message">{message}</div> }
}

/// Mount a toast on `<body>` and remove it after `duration_ms`.
pub fn show(message: &'static str, duration_ms: u32) {
    let Some(body) = dom::document().ok().and_then(|doc| doc.body()) else {
        log::warn!("toast: document has no body");
        return;
    };
    let handle = leptos::mount::mount_to(body, move || view! { <SuccessToast message=message /> });
    Timeout::new(duration_ms, move || drop(handle)).forget();
}
