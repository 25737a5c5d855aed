//! # rdbal-sqlanywhere
//!
//! SQL Anywhere driver for rdbal that connects either through a named data
//! source (DSN) or by host and port.
//!
//! The driver renders a SQL Anywhere connection string from
//! [`ConnectionParams`](rdbal_driver::ConnectionParams) and hands it to a
//! [`Connector`]. With the `odbc` feature, `OdbcConnector` opens it through
//! the ODBC driver manager.
//!
//! ## Connection strings
//!
//! ```rust
//! use rdbal_driver::ConnectionParams;
//! use rdbal_sqlanywhere::SqlAnywhereConfig;
//!
//! let params = ConnectionParams::new()
//!     .dsn("MyDataSource")
//!     .host("ignored")
//!     .dbname("mydb")
//!     .user("u")
//!     .password("")
//!     .option("CharSet", "utf8");
//!
//! let config = SqlAnywhereConfig::from_params(&params).unwrap();
//! assert_eq!(
//!     config.to_connection_string(),
//!     "DSN=MyDataSource;DBN=mydb;UID=u;PWD=;CharSet=utf8"
//! );
//! ```
//!
//! ## Connecting
//!
//! ```rust,ignore
//! use rdbal_driver::{ConnectionParams, Driver};
//! use rdbal_sqlanywhere::{OdbcConnector, SqlAnywhereDsnDriver};
//!
//! let driver = SqlAnywhereDsnDriver::new(OdbcConnector::new());
//! let conn = driver
//!     .open(&ConnectionParams::new().dsn("SalesDSN").dbname("sales"))
//!     .await?;
//! ```

pub mod config;
pub mod connection;
pub mod connector;
pub mod driver;
pub mod error;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, SqlAnywhereConfig, SqlAnywhereConfigBuilder, Target};
pub use connection::SqlAnywhereConnection;
pub use connector::Connector;
#[cfg(feature = "odbc")]
pub use connector::{OdbcConnector, OdbcHandle};
pub use driver::{DRIVER_NAME, SqlAnywhereDsnDriver};
pub use error::{SqlAnywhereError, SqlAnywhereResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{SqlAnywhereConfig, SqlAnywhereConfigBuilder, Target};
    pub use crate::connection::SqlAnywhereConnection;
    pub use crate::connector::Connector;
    pub use crate::driver::SqlAnywhereDsnDriver;
    pub use crate::error::{SqlAnywhereError, SqlAnywhereResult};
}
