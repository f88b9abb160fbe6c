//! Floating button that returns to the top of the page.

use leptos::prelude::*;

use crate::state::page::PageState;
use crate::util::dom;

/// Shown once the page has scrolled past the configured offset.
#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let hovered = RwSignal::new(false);

    let display = move || page.get().chrome.scroll_top_display();
    let transform = move || if hovered.get() { "scale(1.1)" } else { "scale(1)" };

    view! {
        <button
            class="scroll-to-top"
            aria-label="Scroll to top"
            style:display=display
            style:transform=transform
            on:click=move |_| dom::scroll_to_top()
            on:mouseover=move |_| hovered.set(true)
            on:mouseout=move |_| hovered.set(false)
        >
            "↑"
        </button>
    }
}
