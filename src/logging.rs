// src/logging.rs
// =============================================================================
// Sets up tracing for the binary.
//
// Logs go to stderr so stdout only ever carries the command's real output
// (tables, JSON, outlines). RUST_LOG takes precedence; otherwise the level
// follows the number of -v flags.
// =============================================================================

use tracing_subscriber::EnvFilter;

/// Default level for a given `-v` count
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber; later calls do nothing
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
