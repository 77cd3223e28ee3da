//! Logging initialization for unit tests.
//!
//! Integration tests use `backend_test_support::logging::init` directly;
//! this thin wrapper keeps unit tests on the same configuration.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
