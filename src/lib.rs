#![doc(test(attr(deny(warnings))))]

//! Finance Core turns already-fetched movements and budgets into monthly
//! summaries, period buckets, balance series and month-end forecasts, and
//! remembers which budget alerts the user has already seen or dismissed.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod notifications;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
