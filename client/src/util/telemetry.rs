//! Page-view and load-time logging.
//!
//! Nothing leaves the browser; records go to the console logger.

use gloo_timers::callback::Timeout;

use scroll::telemetry::{LoadMetrics, NavigationTiming, PageView};

use crate::error::BindError;
use crate::util::dom;

/// Log the page view now and the load timings once loading has finished.
pub fn install() -> Result<(), BindError> {
    log_page_view()?;
    let window = dom::window()?;
    dom::listen(&window, "load", |_: web_sys::Event| {
        // loadEventEnd is only filled in after the load handlers return.
        Timeout::new(0, log_load_metrics).forget();
    })
}

fn log_page_view() -> Result<(), BindError> {
    let window = dom::window()?;
    let view = PageView {
        page: window.location().pathname()?,
        timestamp: String::from(js_sys::Date::new_0().to_iso_string()),
        user_agent: window.navigator().user_agent()?,
    };
    match serde_json::to_string(&view) {
        Ok(json) => log::info!("page view: {json}"),
        Err(err) => log::warn!("page view: {err}"),
    }
    Ok(())
}

fn log_load_metrics() {
    let Some(timing) = web_sys::window().and_then(|w| w.performance()).map(|p| p.timing()) else {
        return;
    };
    let timing = NavigationTiming {
        navigation_start: timing.navigation_start(),
        response_end: timing.response_end(),
        dom_content_loaded_event_end: timing.dom_content_loaded_event_end(),
        load_event_end: timing.load_event_end(),
    };
    if let Some(metrics) = LoadMetrics::from_timing(timing) {
        log::info!(
            "page load: total {}ms, DOM content loaded {}ms, first paint {}ms",
            metrics.total_load_ms,
            metrics.dom_content_loaded_ms,
            metrics.first_paint_ms
        );
    }
}
