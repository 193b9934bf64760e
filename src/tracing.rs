//! Tracing setup for the command-line tool
//!
//! What each level shows:
//! - `warn` (console default): rejected keystrokes during a replay, invalid
//!   validation patterns, an unreadable config file
//! - `info`: every value that passed validation and was emitted
//! - `debug`: each edit transition (`text@caret -> text@caret` with its intent),
//!   ignored edits, template changes
//! - `trace`: inserts that found no placeholder slot
//!
//! `RUST_LOG=maskline::field=debug` narrows console output to the field session.
//! The file at `~/.config/maskline/logs/maskline.log` (daily rotation) always
//! records `debug`, so a replay can be reconstructed after the fact.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so replay output on stdout stays clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "maskline.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
