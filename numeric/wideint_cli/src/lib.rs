//! Wideint CLI
//!
//! Evaluates single operations on `BigInt`, `Int64` and `Word64` values from
//! the shell. `main.rs` only dispatches; every command lives in [`commands`]
//! and returns its output as a string so it can be tested without a process.

pub mod commands;
pub mod config;
pub mod error;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=wideint=trace` to see
/// the long division steps.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
