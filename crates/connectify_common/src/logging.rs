//! Logging utilities for the Connectify application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the Connectify application. It includes functions for initializing the
//! tracing subscriber and small helpers for logging results.

use tracing::{error, info, warn, Level};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with a specific log level.
///
/// The level applies to every `connectify*` target; `RUST_LOG` may add further
/// directives. Calling this twice is harmless, the second call is ignored.
///
/// # Arguments
///
/// * `level` - The minimum log level to display.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("connectify={}", level).parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    // try_init: a global default subscriber may already be set (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Parses a configured level name, falling back to INFO for missing or unknown values.
///
/// # Examples
///
/// ```
/// use connectify_common::logging::parse_level;
///
/// assert_eq!(parse_level(Some("debug")), tracing::Level::DEBUG);
/// assert_eq!(parse_level(Some("loud")), tracing::Level::INFO);
/// assert_eq!(parse_level(None), tracing::Level::INFO);
/// ```
pub fn parse_level(level: Option<&str>) -> Level {
    match level {
        Some(name) => name.trim().parse::<Level>().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using INFO", name);
            Level::INFO
        }),
        None => Level::INFO,
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Success is logged at INFO, failure at WARN.
///
/// # Returns
///
/// The original result, allowing this function to be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => warn!("{}: {}", error_context, e),
    }
    result
}
