#![doc(test(attr(deny(warnings))))]

//! Nestora tracks rental properties, their units, the leases signed on those
//! units and the rent payments recorded against each lease, and rolls them up
//! into a rent-roll report. This crate hosts the interactive shell; the
//! business rules live in `nestora-core`.

pub mod cli;
pub mod errors;
pub mod utils;

pub use nestora_config as config;
pub use nestora_core as core;
pub use nestora_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Nestora tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
