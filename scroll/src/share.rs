//! Share-button link construction.
//!
//! URL components are escaped by a caller-supplied encoder so the host can
//! use the browser's own `encodeURIComponent`.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Selector for share buttons; each carries a `data-platform` attribute.
pub const SHARE_BUTTON_SELECTOR: &str = ".share-btn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    LinkedIn,
    Twitter,
}

impl SharePlatform {
    /// Parse a `data-platform` value. Unknown platforms yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "linkedin" => Some(Self::LinkedIn),
            "twitter" => Some(Self::Twitter),
            _ => None,
        }
    }

    /// Share URL for `page_url`, escaping each component with `encode`.
    #[must_use]
    pub fn share_url(self, page_url: &str, text: &str, encode: impl Fn(&str) -> String) -> String {
        match self {
            Self::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={}", encode(page_url))
            }
            Self::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                encode(text),
                encode(page_url)
            ),
        }
    }
}
