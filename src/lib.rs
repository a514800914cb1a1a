#![doc(test(attr(deny(warnings))))]

//! Crowdfund Core offers the ledger, derived-metrics, and reporting
//! primitives for tracking a single real-estate crowdfunding project.

pub mod cli;
pub mod config;
pub mod errors;
pub mod eval;
pub mod project;
pub mod reports;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Crowdfund Core tracing initialized.");
    });
}
