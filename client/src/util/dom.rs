//! Thin `web-sys` helpers: lookups, measurement, listeners and scrolling.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use scroll::section::{Section, Viewport};

use crate::error::BindError;

pub fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::NoWindow)
}

pub fn document() -> Result<Document, BindError> {
    window()?.document().ok_or(BindError::NoDocument)
}

/// All elements matching `selector` that are of type `T`, in document order.
pub fn query_all<T: JsCast>(root: &Document, selector: &str) -> Result<Vec<T>, BindError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// First element matching `selector`, or [`BindError::MissingElement`].
pub fn require<T: JsCast>(root: &Document, selector: &str) -> Result<T, BindError> {
    root.query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| BindError::MissingElement(selector.to_owned()))
}

/// Add or remove `class` on `el`, logging a failure instead of propagating it.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::warn!("class `{class}`: {err:?}");
    }
}

/// Set an inline style property, logging a failure instead of propagating it.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("style `{property}`: {err:?}");
    }
}

/// Measure `elements` into sections. Indices line up with the input.
pub fn measure_sections(elements: &[HtmlElement]) -> Vec<Section> {
    elements
        .iter()
        .map(|el| Section::new(el.id(), f64::from(el.offset_top()), f64::from(el.client_height())))
        .collect()
}

/// Current scroll offset and viewport height.
pub fn read_viewport(window: &Window) -> Result<Viewport, BindError> {
    let scroll_y = window.scroll_y()?;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(scroll_y, height))
}

/// Smoothly scroll `el` to the top of the viewport.
pub fn scroll_into_view(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll the window back to the top of the page.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
///
/// Events that are not a `T` are dropped.
pub fn listen<T, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), BindError>
where
    T: JsCast + 'static,
    F: FnMut(T) + 'static,
{
    let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<T>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// The element an event was dispatched to, if it is an element.
pub fn event_element(ev: &web_sys::Event) -> Option<Element> {
    ev.target().and_then(|t| t.dyn_into::<Element>().ok())
}
