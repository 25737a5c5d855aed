//! # rdbal
//!
//! Database abstraction drivers for Rust.
//!
//! rdbal separates the engine-independent driver interface from the
//! engine-specific drivers that implement it:
//!
//! - [`driver`] - the `Driver` trait, connection parameters, the driver
//!   registry, configuration loading and the shared error type
//! - [`sqlanywhere`] - SQL Anywhere, including connections through named
//!   data sources
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rdbal::prelude::*;
//! use rdbal::sqlanywhere::OdbcConnector;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rdbal::DriverError> {
//!     let mut manager = DriverManager::new();
//!     manager.register(SqlAnywhereDsnDriver::new(OdbcConnector::new()));
//!
//!     let config = DbalConfig::load("rdbal.toml")?;
//!     let conn = manager.connect(config.default_connection()?).await?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Engine-independent driver interface.
pub mod driver {
    pub use rdbal_driver::*;
}

/// SQL Anywhere driver.
pub mod sqlanywhere {
    pub use rdbal_sqlanywhere::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rdbal_driver::prelude::*;
    pub use rdbal_sqlanywhere::prelude::*;
}

// Re-export key types at the crate root
pub use rdbal_driver::{ConnectionParams, DbalConfig, Driver, DriverError, DriverManager, DriverResult};
pub use rdbal_sqlanywhere::{SqlAnywhereConfig, SqlAnywhereDsnDriver};
