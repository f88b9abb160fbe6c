//! Reveal-on-scroll animations and lazy image loading.
//!
//! Both are driven by intersection callbacks: the host observes the matching
//! elements, calls [`on_intersection`] for each entry and applies the
//! returned action. Every target fires once and is then unobserved.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Elements that slide in the first time they become visible.
pub const REVEAL_SELECTOR: &str = ".badge, .expertise-card, .highlight-card, .timeline-content";

/// Class that triggers the slide-in animation.
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Images whose real source is deferred until they are visible.
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Attribute holding the deferred image source.
pub const LAZY_SOURCE_ATTR: &str = "data-src";

/// Intersection ratio at which a reveal target counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the observed area so targets reveal 100px above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Utility styles injected into `<head>` once at startup.
pub const STYLESHEET: &str = r"
@keyframes slideInLeft {
    from { opacity: 0; transform: translateX(-30px); }
    to { opacity: 1; transform: translateX(0); }
}

.animate-in {
    animation: slideInLeft 0.6s ease forwards !important;
}

.success-message {
    position: fixed;
    top: 100px;
    right: 30px;
    background: linear-gradient(135deg, #06d6a0 0%, #00d4ff 100%);
    color: #0a0e27;
    padding: 1.5rem 2rem;
    border-radius: 10px;
    font-weight: 700;
    box-shadow: 0 10px 30px rgba(6, 214, 160, 0.4);
    z-index: 2000;
    animation: slideInRight 0.5s ease;
}

.scroll-to-top {
    position: fixed;
    bottom: 30px;
    right: 30px;
    width: 50px;
    height: 50px;
    background: linear-gradient(135deg, #00d4ff 0%, #8338ec 100%);
    color: #0a0e27;
    border: none;
    border-radius: 50%;
    font-size: 1.5rem;
    cursor: pointer;
    align-items: center;
    justify-content: center;
    z-index: 999;
    transition: all 0.3s ease;
    box-shadow: 0 5px 20px rgba(0, 212, 255, 0.3);
}

.hamburger.active span:nth-child(1) {
    transform: rotate(45deg) translate(10px, 10px);
}

.hamburger.active span:nth-child(2) {
    opacity: 0;
}

.hamburger.active span:nth-child(3) {
    transform: rotate(-45deg) translate(7px, -7px);
}
";

/// What kind of observed element an intersection entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Reveal,
    LazyImage,
}

/// Change to apply to an element that became visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealAction {
    /// Add [`ANIMATE_IN_CLASS`], then unobserve.
    AnimateIn,
    /// Move the deferred source into `src`, drop [`LAZY_SOURCE_ATTR`], then unobserve.
    LoadImage { src: String },
    /// Visible lazy image without a deferred source: just unobserve.
    Unobserve,
}

/// Decide what to do with one intersection entry.
///
/// `lazy_source` is the element's [`LAZY_SOURCE_ATTR`] value and only
/// matters for [`TargetKind::LazyImage`]. Entries that are not
/// intersecting yield `None`.
#[must_use]
pub fn on_intersection(kind: TargetKind, is_intersecting: bool, lazy_source: Option<String>) -> Option<RevealAction> {
    if !is_intersecting {
        return None;
    }
    Some(match kind {
        TargetKind::Reveal => RevealAction::AnimateIn,
        TargetKind::LazyImage => match lazy_source {
            Some(src) => RevealAction::LoadImage { src },
            None => RevealAction::Unobserve,
        },
    })
}

/// Staggered entrance animation for a group of siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Selector for the group.
    pub selector: &'static str,
    /// Animation duration in seconds.
    pub duration_s: f64,
    /// Extra delay per element index, in seconds.
    pub step_s: f64,
}

/// Skill badges: 0.5s slide, 50ms apart.
pub const BADGE_STAGGER: Stagger = Stagger { selector: ".badge", duration_s: 0.5, step_s: 0.05 };

/// Expertise cards: 0.6s slide, 100ms apart.
pub const EXPERTISE_STAGGER: Stagger = Stagger { selector: ".expertise-card", duration_s: 0.6, step_s: 0.1 };

impl Stagger {
    /// CSS `animation` value for the element at `index` within the group.
    #[must_use]
    pub fn animation(&self, index: u32) -> String {
        let delay = f64::from(index) * self.step_s;
        format!("slideInLeft {}s ease {}s forwards", self.duration_s, delay)
    }
}
