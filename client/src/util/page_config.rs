//! Page configuration lookup.
//!
//! The page may embed overrides as
//! `<script type="application/json" id="page-config">{...}</script>`.
//! Without that element every constant keeps its default. A malformed
//! config is logged and ignored rather than blocking startup.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use scroll::config::PageConfig;

/// Id of the element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Interpret the raw text of the config element, if there is one.
pub fn parse(raw: Option<&str>) -> PageConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            PageConfig::default()
        }
    }
}

/// Read the config element from the live document.
pub fn load() -> PageConfig {
    #[cfg(feature = "browser")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse(raw.as_deref())
    }
    #[cfg(not(feature = "browser"))]
    {
        PageConfig::default()
    }
}
