//! Cross-module test suites.

mod backend_tests;
mod property_tests;

/// Install a log subscriber for the current test when `RUST_LOG` is set.
///
/// Safe to call from every test; only the first call installs anything.
pub(crate) fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer())
            .with(EnvFilter::from_default_env())
            .try_init();
    }
}
