//! Typed connection parameters.
//!
//! [`ConnectionParams`] is what callers hand to a [`Driver`](crate::Driver).
//! Every field is optional; each driver resolves its own defaults once, at
//! the call boundary, into an engine-specific configuration.
//!
//! ```rust
//! use rdbal_driver::ConnectionParams;
//!
//! let params = ConnectionParams::new()
//!     .driver("sqlanywheredsn")
//!     .dsn("MyDataSource")
//!     .dbname("mydb")
//!     .user("dba")
//!     .option("CharSet", "utf8");
//!
//! assert_eq!(params.dsn_name(), Some("MyDataSource"));
//! assert_eq!(params.host_name(), None);
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Extra key/value options appended to a connection string.
///
/// Iteration order is insertion order. Inserting a key that already exists
/// replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverOptions(IndexMap<String, String>);

impl DriverOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Get an option value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DriverOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for DriverOptions {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Connection parameters supplied by the caller.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionParams {
    /// Identity token of the driver to use.
    pub driver: Option<String>,
    /// Host address.
    pub host: Option<String>,
    /// Port (0 means unset).
    pub port: Option<u16>,
    /// Named database server instance on the host.
    pub server: Option<String>,
    /// Named data source.
    pub dsn: Option<String>,
    /// Database name.
    pub dbname: Option<String>,
    /// User name.
    pub user: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Ask the client library for a persistent connection.
    pub persistent: bool,
    /// Extra options appended to the connection string.
    #[serde(alias = "options")]
    pub driver_options: DriverOptions,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ConnectionParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the driver name.
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    /// Set the host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the server instance name.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Set the named data source.
    pub fn dsn(mut self, dsn: impl Into<String>) -> Self {
        self.dsn = Some(dsn.into());
        self
    }

    /// Set the database name.
    pub fn dbname(mut self, dbname: impl Into<String>) -> Self {
        self.dbname = Some(dbname.into());
        self
    }

    /// Set the user name.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Request a persistent connection.
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Append an extra driver option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.driver_options.insert(key, value);
        self
    }

    /// The driver name, if set and non-empty.
    pub fn driver_name(&self) -> Option<&str> {
        non_empty(&self.driver)
    }

    /// The host, if set and non-empty.
    pub fn host_name(&self) -> Option<&str> {
        non_empty(&self.host)
    }

    /// The port, if set and non-zero.
    pub fn port_number(&self) -> Option<u16> {
        self.port.filter(|p| *p != 0)
    }

    /// The server instance name, if set and non-empty.
    pub fn server_name(&self) -> Option<&str> {
        non_empty(&self.server)
    }

    /// The named data source, if set and non-empty.
    pub fn dsn_name(&self) -> Option<&str> {
        non_empty(&self.dsn)
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("server", &self.server)
            .field("dsn", &self.dsn)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("persistent", &self.persistent)
            .field("driver_options", &self.driver_options)
            .finish()
    }
}
