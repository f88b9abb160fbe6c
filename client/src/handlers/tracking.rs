//! Scroll tracking: feeds measured layout to the dispatcher once per frame.
//!
//! ARCHITECTURE
//! ============
//! Scroll and resize events only schedule work; the measurement and the
//! dispatch happen in the next animation frame, at most once per frame.
//! Observers are stateless between frames, so a coalesced event loses
//! nothing. Two observers are registered: the nav-link synchronizer and
//! the page chrome (navbar shading, scroll-to-top visibility, parallax).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement};

use scroll::chrome::{ChromeState, Parallax};
use scroll::config::PageConfig;
use scroll::consts::{HERO_SELECTOR, HERO_TEXT_SELECTOR, NAVBAR_SELECTOR, SCROLLED_CLASS, SECTION_SELECTOR};
use scroll::dispatch::{ScrollDispatcher, ScrollFrame};

use crate::error::BindError;
use crate::handlers::nav::SharedNav;
use crate::state::page::PageState;
use crate::util::dom;

type SharedDispatcher = Rc<RefCell<ScrollDispatcher>>;

pub fn install(page: RwSignal<PageState>, config: &PageConfig, nav: SharedNav) -> Result<(), BindError> {
    let window = dom::window()?;
    let document = dom::document()?;

    let mut dispatcher = ScrollDispatcher::new();
    dispatcher.subscribe(move |frame: &ScrollFrame<'_>| {
        let mut nav = nav.borrow_mut();
        nav.sync.sync(frame.sections, frame.viewport);
        nav.render();
    });
    dispatcher.subscribe(chrome_observer(page, config.clone(), &document)?);

    let dispatcher = Rc::new(RefCell::new(dispatcher));
    let pending = Rc::new(Cell::new(false));
    run_frame(&dispatcher)?;

    for event in ["scroll", "resize"] {
        let dispatcher = Rc::clone(&dispatcher);
        let pending = Rc::clone(&pending);
        dom::listen(&window, event, move |_: web_sys::Event| request_frame(&dispatcher, &pending))?;
    }
    Ok(())
}

fn chrome_observer(
    page: RwSignal<PageState>,
    config: PageConfig,
    document: &Document,
) -> Result<impl FnMut(&ScrollFrame<'_>) + 'static, BindError> {
    let navbar: Option<Element> = document.query_selector(NAVBAR_SELECTOR)?;
    let hero = document.query_selector(HERO_SELECTOR)?.is_some();
    let document = document.clone();

    Ok(move |frame: &ScrollFrame<'_>| {
        let chrome = ChromeState::from_viewport(frame.viewport, &config);
        if let Some(navbar) = &navbar {
            dom::set_class(navbar, SCROLLED_CLASS, chrome.navbar_scrolled);
        }
        if hero {
            match dom::query_all::<HtmlElement>(&document, HERO_TEXT_SELECTOR) {
                Ok(texts) => {
                    let transform = Parallax::from_viewport(frame.viewport, &config).transform();
                    for text in &texts {
                        dom::set_style(text, "transform", &transform);
                    }
                }
                Err(err) => log::warn!("parallax: {err}"),
            }
        }
        if page.with_untracked(|state| state.chrome != chrome) {
            page.update(|state| {
                state.set_chrome(chrome);
            });
        }
    })
}

fn request_frame(dispatcher: &SharedDispatcher, pending: &Rc<Cell<bool>>) {
    if pending.get() {
        return;
    }
    pending.set(true);

    let Some(window) = web_sys::window() else {
        pending.set(false);
        return;
    };

    let dispatcher_cb = Rc::clone(dispatcher);
    let pending_cb = Rc::clone(pending);
    let cb = Closure::once_into_js(move || {
        pending_cb.set(false);
        if let Err(err) = run_frame(&dispatcher_cb) {
            log::warn!("scroll frame: {err}");
        }
    });

    if let Err(err) = window.request_animation_frame(cb.unchecked_ref()) {
        log::debug!("requestAnimationFrame unavailable: {err:?}");
        pending.set(false);
        if let Err(err) = run_frame(dispatcher) {
            log::warn!("scroll frame: {err}");
        }
    }
}

/// Measure sections and viewport, then dispatch one frame.
fn run_frame(dispatcher: &SharedDispatcher) -> Result<(), BindError> {
    let window = dom::window()?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    let elements = dom::query_all::<HtmlElement>(&document, SECTION_SELECTOR)?;
    let sections = dom::measure_sections(&elements);
    let viewport = dom::read_viewport(&window)?;
    dispatcher.borrow_mut().dispatch(&ScrollFrame::new(&sections, viewport));
    Ok(())
}
