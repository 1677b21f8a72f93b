//! Logging initialization for test binaries.
//!
//! Unit tests and integration tests both route through [`init`], usually
//! via a `#[ctor::ctor]` hook, so any test binary can be re-run with
//! `TEST_LOG=debug` without touching code.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter for test output: `TEST_LOG` wins over `RUST_LOG`, and with
/// neither set the default is a quiet `warn`.
fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the test subscriber. Idempotent and race-safe: repeated calls
/// are no-ops, and losing the subscriber race to another initializer does
/// not panic.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer() // keeps output capturable by cargo/nextest
            .without_time()
            .try_init()
            .ok();
    });
}
