//! Errors raised while attaching behavior to the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure to bind a widget to the document.
///
/// Each installer returns this independently; startup logs it and carries
/// on with the remaining widgets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// A required element is absent. Holds the selector that matched nothing.
    #[error("missing element `{0}`")]
    MissingElement(String),
    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for BindError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
