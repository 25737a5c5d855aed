//! Error types for SQL Anywhere operations.

use rdbal_driver::DriverException;
use thiserror::Error;

/// Result type for SQL Anywhere operations.
pub type SqlAnywhereResult<T> = Result<T, SqlAnywhereError>;

/// Errors raised by the SQL Anywhere client library.
#[derive(Error, Debug)]
pub enum SqlAnywhereError {
    /// The client library refused to open the connection.
    #[error(
        "SQLSTATE[{}] [{}] {message}",
        .sql_state.as_deref().unwrap_or("HY000"),
        .code.unwrap_or(0)
    )]
    Connect {
        /// Native error code.
        code: Option<i32>,
        /// SQLSTATE.
        sql_state: Option<String>,
        /// Diagnostic message.
        message: String,
    },

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SqlAnywhereError {
    /// Create a connect error with only a message.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            code: None,
            sql_state: None,
            message: message.into(),
        }
    }

    /// Create a connect error carrying the native diagnostics.
    pub fn connect_with(
        sql_state: impl Into<String>,
        code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::Connect {
            code: Some(code),
            sql_state: Some(sql_state.into()),
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl DriverException for SqlAnywhereError {
    fn error_code(&self) -> Option<i32> {
        match self {
            Self::Connect { code, .. } => *code,
            Self::Internal(_) => None,
        }
    }

    fn sql_state(&self) -> Option<&str> {
        match self {
            Self::Connect { sql_state, .. } => sql_state.as_deref(),
            Self::Internal(_) => None,
        }
    }
}

#[cfg(feature = "odbc")]
impl From<odbc_api::Error> for SqlAnywhereError {
    fn from(err: odbc_api::Error) -> Self {
        match err {
            odbc_api::Error::Diagnostics { record, .. } => Self::Connect {
                code: Some(record.native_error),
                sql_state: Some(record.state.as_str().to_string()),
                message: record.to_string(),
            },
            other => Self::connect(other.to_string()),
        }
    }
}
