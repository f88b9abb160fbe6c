//! Page-view and load-timing records. These are logged locally and never sent.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub page: String,
    pub timestamp: String,
    pub user_agent: String,
}

/// Navigation timing marks, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationTiming {
    pub navigation_start: f64,
    pub response_end: f64,
    pub dom_content_loaded_event_end: f64,
    pub load_event_end: f64,
}

/// Durations relative to navigation start, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMetrics {
    pub total_load_ms: f64,
    pub dom_content_loaded_ms: f64,
    /// Response end; the closest mark navigation timing has to first paint.
    pub first_paint_ms: f64,
}

impl LoadMetrics {
    /// `None` until the load event has finished, when `load_event_end` is still zero.
    #[must_use]
    pub fn from_timing(timing: NavigationTiming) -> Option<Self> {
        if timing.load_event_end <= 0.0 {
            return None;
        }
        let since_start = |mark: f64| mark - timing.navigation_start;
        Some(Self {
            total_load_ms: since_start(timing.load_event_end),
            dom_content_loaded_ms: since_start(timing.dom_content_loaded_event_end),
            first_paint_ms: since_start(timing.response_end),
        })
    }
}
