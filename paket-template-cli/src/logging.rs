//! Logging setup.
//!
//! Logs go to stderr so command output on stdout stays parseable.
//! `RUST_LOG` takes precedence over the `-v` flag.

use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default filter directive.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Ignore the error if a subscriber is already set (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
