//! Logging setup helpers and the error-to-log bridge.
//!
//! Provides `env_logger`-based initialization and a convenience for
//! emitting a rendered causal chain through the standard `log` crate.

use super::chain::format;
use log::error;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize logging once at application startup.
///
/// Sets up `env_logger` from the environment; configure levels via the
/// `RUST_LOG` environment variable, e.g. `RUST_LOG=errtrace=debug`.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .init();
    });
}

/// Initialize logging for test environments.
///
/// Safe to call from multiple tests; initialization conflicts are
/// ignored.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// Log an error's full causal chain at error level.
pub fn log_error_chain(operation: &str, err: &(dyn std::error::Error + 'static)) {
    error!("{operation} failed:\n{}", format(Some(err)));
}
