//! Contact form: log the submission, acknowledge it, reset.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use scroll::config::PageConfig;
use scroll::consts::{CONTACT_FORM_ID, TOAST_MESSAGE};
use scroll::contact::{ContactFields, ContactSubmission};

use crate::components::success_toast;
use crate::error::BindError;
use crate::util::dom;

const NAME_INPUT: &str = "input[type=\"text\"]";
const EMAIL_INPUT: &str = "input[type=\"email\"]";
const TITLE_INPUT: &str = "input[type=\"text\"]:nth-of-type(2)";
const MESSAGE_INPUT: &str = "textarea";

/// Bind the form if the page has one. Returns whether it was found.
pub fn install(config: &PageConfig) -> Result<bool, BindError> {
    let document = dom::document()?;
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return Ok(false);
    };
    let form: HtmlFormElement = form
        .dyn_into()
        .map_err(|_| BindError::MissingElement(format!("form#{CONTACT_FORM_ID}")))?;

    let toast_ms = config.toast_duration_ms;
    let target = form.clone();
    dom::listen(&target, "submit", move |ev: Event| {
        ev.prevent_default();
        submit(&form, toast_ms);
    })?;
    Ok(true)
}

fn submit(form: &HtmlFormElement, toast_ms: u32) {
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    let submission = match ContactSubmission::from_fields(read_fields(form), timestamp) {
        Ok(submission) => submission,
        Err(err) => {
            log::warn!("contact: {err}");
            return;
        }
    };
    match submission.to_json() {
        Ok(json) => log::info!("contact submission: {json}"),
        Err(err) => log::warn!("contact: {err}"),
    }
    success_toast::show(TOAST_MESSAGE, toast_ms);
    form.reset();
}

fn read_fields(form: &HtmlFormElement) -> ContactFields {
    ContactFields {
        name: input_value(form, NAME_INPUT),
        email: input_value(form, EMAIL_INPUT),
        project_title: input_value(form, TITLE_INPUT),
        message: form
            .query_selector(MESSAGE_INPUT)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
            .map(|el| el.value()),
    }
}

fn input_value(form: &HtmlFormElement, selector: &str) -> Option<String> {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|el| el.value())
}
