//! Share buttons open a LinkedIn or Twitter share window for this page.

use web_sys::{Element, Event};

use scroll::config::PageConfig;
use scroll::consts::SHARE_WINDOW_FEATURES;
use scroll::share::{SHARE_BUTTON_SELECTOR, SharePlatform};

use crate::error::BindError;
use crate::util::dom;

pub fn install(config: &PageConfig) -> Result<usize, BindError> {
    let document = dom::document()?;
    let buttons = dom::query_all::<Element>(&document, SHARE_BUTTON_SELECTOR)?;
    for button in &buttons {
        let Some(platform) = button.get_attribute("data-platform") else {
            log::debug!("share button without data-platform");
            continue;
        };
        let Some(platform) = SharePlatform::parse(&platform) else {
            log::warn!("share: unknown platform `{platform}`");
            continue;
        };
        let text = config.share_text.clone();
        dom::listen(button, "click", move |_: Event| {
            if let Err(err) = open(platform, &text) {
                log::warn!("share: {err}");
            }
        })?;
    }
    Ok(buttons.len())
}

fn open(platform: SharePlatform, text: &str) -> Result<(), BindError> {
    let window = dom::window()?;
    let page_url = window.location().href()?;
    let url = platform.share_url(&page_url, text, |s| String::from(js_sys::encode_uri_component(s)));
    if window.open_with_url_and_target_and_features(&url, "_blank", SHARE_WINDOW_FEATURES)?.is_none() {
        log::debug!("share window blocked");
    }
    Ok(())
}
