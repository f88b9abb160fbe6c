//! Startup: logging, config, theme, widgets and event bindings.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::Event;

use scroll::consts::SECTION_SELECTOR;
use scroll::locator::Locator;

use crate::components::scroll_to_top::ScrollToTopButton;
use crate::error::BindError;
use crate::handlers::{anchors, contact, keyboard, nav, reveal, share, tracking};
use crate::state::page::PageState;
use crate::util::{dark_mode, dom, page_config, telemetry};

/// Install logging, then initialize once the DOM is parsed.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger: {err}").into());
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("startup: {err}");
            return;
        }
    };
    if document.ready_state() == "loading" {
        if let Err(err) = dom::listen(&document, "DOMContentLoaded", |_: Event| init()) {
            log::error!("startup: {err}");
        }
    } else {
        init();
    }
}

fn init() {
    let config = page_config::load();
    let theme = dark_mode::init();
    let page = RwSignal::new(PageState::new(theme));

    leptos::mount::mount_to_body(move || {
        provide_context(page);
        view! { <ScrollToTopButton /> }
    });

    let nav_links = match dom::document().and_then(|doc| nav::NavLinkSet::collect(&doc, Locator::from_config(&config))) {
        Ok(set) => set,
        Err(err) => {
            log::warn!("nav links: {err}");
            nav::NavLinkSet::default()
        }
    };
    let link_count = nav_links.link_count();
    let nav_links = Rc::new(RefCell::new(nav_links));

    report("menu", nav::install_menu(page));
    report("nav links", nav::install_links(page, Rc::clone(&nav_links)));
    let triggers = report("next-section triggers", nav::install_advance(&config)).unwrap_or_default();
    report("scroll tracking", tracking::install(page, &config, nav_links));
    report("keyboard", keyboard::install(page));
    report("telemetry", telemetry::install());
    let anchors = report("anchors", anchors::install()).unwrap_or_default();
    let form = report("contact form", contact::install(&config)).unwrap_or_default();
    let shares = report("share buttons", share::install(&config)).unwrap_or_default();
    let reveal = report("reveal", reveal::install()).unwrap_or_default();

    let section_count = dom::document()
        .and_then(|doc| dom::query_all::<web_sys::HtmlElement>(&doc, SECTION_SELECTOR))
        .map_or(0, |sections| sections.len());

    log::info!(
        "portfolio ready: {section_count} sections, {link_count} nav links, {triggers} next-section triggers, \
         {anchors} anchors, {shares} share buttons, {} reveal targets, {} lazy images, contact form {}, {} theme",
        reveal.revealed,
        reveal.lazy_images,
        if form { "bound" } else { "absent" },
        if theme.is_dark() { "dark" } else { "light" },
    );
}

/// Log an installer failure and carry on with the rest of the page.
fn report<T>(widget: &str, result: Result<T, BindError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{widget}: {err}");
            None
        }
    }
}
