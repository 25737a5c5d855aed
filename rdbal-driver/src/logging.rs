//! Logging setup.
//!
//! Drivers log through the `tracing` macros. Nothing is printed unless the
//! application installs a subscriber, either its own or the one built here
//! (feature `tracing-subscriber`), controlled by:
//!
//! - `RDBAL_DEBUG=true|1|yes` - enable debug logging
//! - `RDBAL_LOG_LEVEL=trace|debug|info|warn|error` - explicit level
//! - `RDBAL_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! Connection strings are only ever logged with the password redacted.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Output format of the built-in subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human readable output.
    Pretty,
    /// Single-line human readable output.
    Compact,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "compact" => Self::Compact,
            _ => Self::Json,
        }
    }
}

fn truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn parse_level(value: &str) -> Option<&'static str> {
    match value.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Check if `RDBAL_DEBUG` enables debug logging.
pub fn is_debug_enabled() -> bool {
    env::var("RDBAL_DEBUG").map(|v| truthy(&v)).unwrap_or(false)
}

/// Resolve the log level from `RDBAL_LOG_LEVEL`, falling back to `debug`
/// when `RDBAL_DEBUG` is set and `warn` otherwise.
pub fn log_level() -> &'static str {
    env::var("RDBAL_LOG_LEVEL")
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(if is_debug_enabled() { "debug" } else { "warn" })
}

/// Resolve the output format from `RDBAL_LOG_FORMAT`.
pub fn log_format() -> LogFormat {
    env::var("RDBAL_LOG_FORMAT")
        .map(|v| LogFormat::parse(&v))
        .unwrap_or_default()
}

/// Install the built-in subscriber. Only the first call has an effect, and
/// nothing is installed unless `RDBAL_DEBUG` or `RDBAL_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("RDBAL_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = log_level();
            let filter = EnvFilter::try_new(format!(
                "rdbal={level},rdbal_driver={level},rdbal_sqlanywhere={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let result = match log_format() {
                LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
                LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
                LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
            };

            if result.is_ok() {
                tracing::info!(level, format = ?log_format(), "rdbal logging initialized");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("COMPACT"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("xml"), LogFormat::Json);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(parse_level("TRACE"), Some("trace"));
        assert_eq!(parse_level("warn"), Some("warn"));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_truthy() {
        assert!(truthy("true"));
        assert!(truthy("YES"));
        assert!(truthy("1"));
        assert!(!truthy("0"));
        assert!(!truthy("off"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
