#![doc(test(attr(deny(warnings))))]

//! Subscription Core validates billing subscription terms and expands them
//! into invoice schedules with a total amount due.

pub mod cli;
pub mod config;
pub mod errors;
pub mod subscription;
pub mod utils;

pub use errors::{CliError, ConfigError, SubscriptionError};
pub use subscription::{
    InvoiceSummary, Subscription, SubscriptionBuilder, SubscriptionRequest, SubscriptionType,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Subscription Core tracing initialized.");
    });
}
