//! Entrance animations and lazy images.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use scroll::reveal::{
    ANIMATE_IN_CLASS, BADGE_STAGGER, EXPERTISE_STAGGER, LAZY_IMAGE_SELECTOR, LAZY_SOURCE_ATTR, REVEAL_ROOT_MARGIN,
    REVEAL_SELECTOR, REVEAL_THRESHOLD, RevealAction, STYLESHEET, Stagger, TargetKind, on_intersection,
};

use crate::error::BindError;
use crate::util::dom;

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Counts of elements wired up, for the startup log.
#[derive(Debug, Default, Clone, Copy)]
pub struct RevealSummary {
    pub revealed: usize,
    pub lazy_images: usize,
}

pub fn install() -> Result<RevealSummary, BindError> {
    let document = dom::document()?;
    inject_stylesheet(&document)?;
    for stagger in [BADGE_STAGGER, EXPERTISE_STAGGER] {
        apply_stagger(&document, stagger)?;
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&REVEAL_THRESHOLD.into());
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let revealed = observe(&document, REVEAL_SELECTOR, TargetKind::Reveal, Some(&options))?;
    let lazy_images = observe(&document, LAZY_IMAGE_SELECTOR, TargetKind::LazyImage, None)?;
    Ok(RevealSummary { revealed, lazy_images })
}

fn inject_stylesheet(document: &Document) -> Result<(), BindError> {
    let head = document.head().ok_or_else(|| BindError::MissingElement("head".to_owned()))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}

fn apply_stagger(document: &Document, stagger: Stagger) -> Result<(), BindError> {
    for (index, el) in (0u32..).zip(dom::query_all::<HtmlElement>(document, stagger.selector)?) {
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "animation", &stagger.animation(index));
    }
    Ok(())
}

fn observe(
    document: &Document,
    selector: &str,
    kind: TargetKind,
    options: Option<&IntersectionObserverInit>,
) -> Result<usize, BindError> {
    let targets = dom::query_all::<Element>(document, selector)?;
    if targets.is_empty() {
        return Ok(0);
    }

    let cb: IntersectionCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter().filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok()) {
            let target = entry.target();
            let source = match kind {
                TargetKind::LazyImage => target.get_attribute(LAZY_SOURCE_ATTR),
                TargetKind::Reveal => None,
            };
            let Some(action) = on_intersection(kind, entry.is_intersecting(), source) else {
                continue;
            };
            apply(&target, action);
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match options {
        Some(options) => IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), options)?,
        None => IntersectionObserver::new(cb.as_ref().unchecked_ref())?,
    };
    cb.forget();
    for target in &targets {
        observer.observe(target);
    }
    Ok(targets.len())
}

fn apply(target: &Element, action: RevealAction) {
    match action {
        RevealAction::AnimateIn => dom::set_class(target, ANIMATE_IN_CLASS, true),
        RevealAction::LoadImage { src } => {
            if let Err(err) = target.set_attribute("src", &src) {
                log::warn!("lazy image {src}: {err:?}");
                return;
            }
            if let Err(err) = target.remove_attribute(LAZY_SOURCE_ATTR) {
                log::warn!("lazy image {src}: {err:?}");
            }
        }
        RevealAction::Unobserve => {}
    }
}
