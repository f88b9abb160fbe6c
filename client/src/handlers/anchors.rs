//! In-page anchor links scroll smoothly instead of jumping.

use web_sys::{Element, Event};

use scroll::consts::ANCHOR_SELECTOR;
use scroll::nav::anchor_target;

use crate::error::BindError;
use crate::util::dom;

pub fn install() -> Result<usize, BindError> {
    let document = dom::document()?;
    let anchors = dom::query_all::<Element>(&document, ANCHOR_SELECTOR)?;
    for anchor in &anchors {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        // A bare "#" keeps the browser's default.
        if anchor_target(&href).is_none() {
            continue;
        }
        let document = document.clone();
        dom::listen(anchor, "click", move |ev: Event| {
            ev.prevent_default();
            match document.query_selector(&href) {
                Ok(Some(target)) => dom::scroll_into_view(&target),
                Ok(None) => log::debug!("anchor {href}: no target"),
                Err(err) => log::warn!("anchor {href}: {err:?}"),
            }
        })?;
    }
    Ok(anchors.len())
}
