//! Browser helpers shared by the handlers and widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue (storage, config lookup, DOM queries)
//! so handlers stay short and the non-DOM parts remain testable natively.

pub mod dark_mode;
#[cfg(feature = "browser")]
pub mod dom;
pub mod page_config;
#[cfg(feature = "browser")]
pub mod telemetry;
