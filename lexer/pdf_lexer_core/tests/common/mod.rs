//! Shared helpers for integration tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Route scanner logs to the test harness.
///
/// Enable with `RUST_LOG=pdf_lexer_core=debug` or `RUST_LOG=pdf_lexer_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}
