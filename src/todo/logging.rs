//! Diagnostic tracing, off unless asked for.
//!
//! Reads `RUST_LOG` (defaults to `warn`) and writes compact lines to stderr,
//! so stdout carries only command output.
//!
//! ```bash
//! RUST_LOG=todo=debug todo add "buy milk"
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
