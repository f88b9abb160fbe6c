//! Navigation: menu toggling, link clicks and the advance action.
//!
//! Each concern installs separately so a page without a hamburger still
//! gets link highlighting and its "next section" triggers.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use scroll::config::PageConfig;
use scroll::consts::{
    ACTIVE_CLASS, ADVANCE_TRIGGER_SELECTOR, HAMBURGER_SELECTOR, NAV_CONTAINER_SELECTOR, NAV_LINK_SELECTOR,
    NAV_MENU_SELECTOR, SECTION_SELECTOR,
};
use scroll::locator::Locator;
use scroll::menu::MenuEvent;
use scroll::nav::{ActiveLinkSync, NavLinks};

use crate::error::BindError;
use crate::state::page::PageState;
use crate::util::dom;

/// The page's `.nav-link` elements paired with their synchronizer.
#[derive(Default)]
pub struct NavLinkSet {
    pub sync: ActiveLinkSync,
    elements: Vec<HtmlElement>,
}

/// Shared between the scroll tracker and the link click handlers.
pub type SharedNav = Rc<RefCell<NavLinkSet>>;

impl NavLinkSet {
    pub fn collect(document: &Document, locator: Locator) -> Result<Self, BindError> {
        let elements = dom::query_all::<HtmlElement>(document, NAV_LINK_SELECTOR)?;
        let hrefs = elements.iter().map(|el| el.get_attribute("href").unwrap_or_default());
        Ok(Self { sync: ActiveLinkSync::new(locator, NavLinks::new(hrefs)), elements })
    }

    /// Copy each link's active flag onto its element.
    pub fn render(&self) {
        for (el, link) in self.elements.iter().zip(self.sync.links.iter()) {
            dom::set_class(el, ACTIVE_CLASS, link.active);
        }
    }

    pub fn link_count(&self) -> usize {
        self.elements.len()
    }
}

/// Hamburger toggle and close-on-outside-click. Needs `.hamburger` and `.nav-menu`.
pub fn install_menu(page: RwSignal<PageState>) -> Result<(), BindError> {
    let document = dom::document()?;
    let hamburger = dom::require::<Element>(&document, HAMBURGER_SELECTOR)?;
    dom::require::<Element>(&document, NAV_MENU_SELECTOR)?;

    dom::listen(&hamburger, "click", move |_: web_sys::Event| {
        apply_menu(page, MenuEvent::HamburgerClicked);
    })?;
    dom::listen(&document, "click", move |ev: web_sys::Event| {
        let inside_nav = dom::event_element(&ev)
            .is_some_and(|el| is_within(&el, NAV_CONTAINER_SELECTOR) || is_within(&el, NAV_MENU_SELECTOR));
        apply_menu(page, MenuEvent::DocumentClicked { inside_nav });
    })
}

/// Clicking a nav link closes the menu and highlights that link.
pub fn install_links(page: RwSignal<PageState>, nav: SharedNav) -> Result<(), BindError> {
    let elements = nav.borrow().elements.clone();
    for (index, el) in elements.iter().enumerate() {
        let nav = Rc::clone(&nav);
        dom::listen(el, "click", move |_: web_sys::Event| {
            apply_menu(page, MenuEvent::LinkClicked);
            let mut nav = nav.borrow_mut();
            nav.sync.links.activate_index(index);
            nav.render();
        })?;
    }
    Ok(())
}

/// Bind every "next section" trigger. Returns how many were found.
pub fn install_advance(config: &PageConfig) -> Result<usize, BindError> {
    let document = dom::document()?;
    let triggers = dom::query_all::<Element>(&document, ADVANCE_TRIGGER_SELECTOR)?;
    for trigger in &triggers {
        let config = config.clone();
        dom::listen(trigger, "click", move |ev: web_sys::Event| {
            ev.prevent_default();
            if let Err(err) = advance(&config) {
                log::warn!("next section: {err}");
            }
        })?;
    }
    Ok(triggers.len())
}

/// Apply a menu event and mirror the open flag onto the menu and hamburger.
pub fn apply_menu(page: RwSignal<PageState>, event: MenuEvent) {
    let mut state = page.get_untracked();
    if !state.apply_menu(event) {
        return;
    }
    page.set(state);

    let Ok(document) = dom::document() else {
        return;
    };
    for selector in [NAV_MENU_SELECTOR, HAMBURGER_SELECTOR] {
        if let Ok(Some(el)) = document.query_selector(selector) {
            dom::set_class(&el, ACTIVE_CLASS, state.menu.is_open());
        }
    }
}

/// Smooth-scroll to the section the advance policy picks. No sections, no scroll.
pub fn advance(config: &PageConfig) -> Result<(), BindError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let elements = dom::query_all::<HtmlElement>(&document, SECTION_SELECTOR)?;
    let sections = dom::measure_sections(&elements);
    let viewport = dom::read_viewport(&window)?;

    let Some(target) = Locator::from_config(config).advance(&sections, viewport) else {
        return Ok(());
    };
    let index = sections.iter().position(|section| std::ptr::eq(section, target));
    if let Some(el) = index.and_then(|i| elements.get(i)) {
        dom::scroll_into_view(el);
    }
    Ok(())
}

fn is_within(el: &Element, selector: &str) -> bool {
    matches!(el.closest(selector), Ok(Some(_)))
}
