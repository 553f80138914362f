//! Diagnostic logging for the `shello` binary.
//!
//! Logs go to stderr so they never mix with command output on stdout. The
//! level comes from `RUST_LOG` and defaults to `warn`.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .ok();
}
