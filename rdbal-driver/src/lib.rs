//! # rdbal-driver
//!
//! Engine-independent pieces shared by every rdbal driver:
//!
//! - [`Driver`] and [`DriverConnection`], the traits each engine implements
//! - [`DriverError`], the single error kind surfaced for failed connections
//! - [`ConnectionParams`] and [`DriverOptions`], the typed parameter bag
//! - [`DriverManager`], a registry that selects drivers by identity token
//! - [`DbalConfig`], named connections loaded from TOML
//!
//! ## Example
//!
//! ```rust,ignore
//! use rdbal_driver::{DbalConfig, DriverManager};
//!
//! let config = DbalConfig::load("rdbal.toml")?;
//! let mut manager = DriverManager::new();
//! manager.register(my_driver);
//!
//! let conn = manager.connect(config.default_connection()?).await?;
//! ```

pub mod config;
pub mod driver;
pub mod env;
pub mod error;
pub mod logging;
pub mod params;

pub use config::DbalConfig;
pub use driver::{Driver, DriverConnection, DriverManager};
pub use env::{EnvExpander, EnvSource, MapEnvSource, StdEnvSource};
pub use error::{DriverError, DriverException, DriverResult};
pub use params::{ConnectionParams, DriverOptions};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::DbalConfig;
    pub use crate::driver::{Driver, DriverConnection, DriverManager};
    pub use crate::error::{DriverError, DriverException, DriverResult};
    pub use crate::params::{ConnectionParams, DriverOptions};
}
