//! Error types shared by every driver.

use smol_str::SmolStr;
use thiserror::Error;

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// An engine-specific error raised by the underlying client library.
///
/// Each driver wraps its own error type in [`DriverError::Driver`] so that
/// callers see a single error kind regardless of the engine.
pub trait DriverException: std::error::Error + Send + Sync + 'static {
    /// Vendor error code, if the engine reported one.
    fn error_code(&self) -> Option<i32> {
        None
    }

    /// Five-character SQLSTATE, if the engine reported one.
    fn sql_state(&self) -> Option<&str> {
        None
    }
}

/// Errors that can occur while resolving parameters or opening a connection.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The underlying engine failed to establish a connection.
    #[error("an exception occurred in driver '{driver}': {source}")]
    Driver {
        /// Identity token of the driver that failed.
        driver: SmolStr,
        /// Vendor error code reported by the engine.
        code: Option<i32>,
        /// SQLSTATE reported by the engine.
        sql_state: Option<String>,
        /// The original engine error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Connection parameters could not be resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// No driver is registered under the requested name.
    #[error("unknown driver: {0}")]
    UnknownDriver(String),

    /// Environment variable expansion failed.
    #[error("environment variable '{name}': {message}")]
    Env {
        /// Variable name.
        name: String,
        /// What went wrong.
        message: String,
    },

    /// Reading a configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Wrap an engine error raised by the driver called `driver`.
    pub fn driver(driver: impl Into<SmolStr>, source: impl DriverException) -> Self {
        Self::Driver {
            driver: driver.into(),
            code: source.error_code(),
            sql_state: source.sql_state().map(String::from),
            source: Box::new(source),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an environment expansion error.
    pub fn env(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Env {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from a failed connection attempt.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Driver { .. })
    }

    /// Check if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Env { .. })
    }

    /// Name of the driver that raised the wrapped engine error.
    pub fn driver_name(&self) -> Option<&str> {
        match self {
            Self::Driver { driver, .. } => Some(driver.as_str()),
            _ => None,
        }
    }

    /// Vendor error code of the wrapped engine error.
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::Driver { code, .. } => *code,
            _ => None,
        }
    }

    /// SQLSTATE of the wrapped engine error.
    pub fn sql_state(&self) -> Option<&str> {
        match self {
            Self::Driver { sql_state, .. } => sql_state.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[derive(Debug, Error)]
    #[error("login failed")]
    struct LoginFailed;

    impl DriverException for LoginFailed {
        fn error_code(&self) -> Option<i32> {
            Some(-103)
        }

        fn sql_state(&self) -> Option<&str> {
            Some("28000")
        }
    }

    #[test]
    fn test_driver_error_wraps_cause() {
        let err = DriverError::driver("sqlanywheredsn", LoginFailed);

        assert!(err.is_connection_error());
        assert_eq!(err.driver_name(), Some("sqlanywheredsn"));
        assert_eq!(err.error_code(), Some(-103));
        assert_eq!(err.sql_state(), Some("28000"));
        assert_eq!(
            err.to_string(),
            "an exception occurred in driver 'sqlanywheredsn': login failed"
        );

        let source = err.source().expect("cause is preserved");
        assert_eq!(source.to_string(), "login failed");
    }

    #[test]
    fn test_config_error() {
        let err = DriverError::config("database name is required");
        assert!(err.is_config_error());
        assert!(!err.is_connection_error());
        assert_eq!(err.error_code(), None);
        assert_eq!(
            err.to_string(),
            "configuration error: database name is required"
        );
    }

    #[test]
    fn test_env_error_display() {
        let err = DriverError::env("DB_PASSWORD", "not set");
        assert_eq!(
            err.to_string(),
            "environment variable 'DB_PASSWORD': not set"
        );
    }
}
