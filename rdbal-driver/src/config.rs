//! Named connection configuration loaded from TOML.
//!
//! ```toml
//! default = "sales"
//!
//! [connections.sales]
//! driver = "sqlanywheredsn"
//! dsn = "SalesDSN"
//! dbname = "sales"
//! user = "${SALES_USER}"
//! password = "${SALES_PASSWORD}"
//!
//! [connections.sales.options]
//! CharSet = "utf8"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::env::{EnvExpander, EnvSource};
use crate::error::{DriverError, DriverResult};
use crate::params::ConnectionParams;

/// A set of named connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbalConfig {
    /// Name of the connection used when none is requested.
    pub default: Option<String>,
    /// Connections by name, in file order.
    pub connections: IndexMap<String, ConnectionParams>,
}

impl DbalConfig {
    /// Parse a TOML document without expanding environment references.
    pub fn from_toml_str(input: &str) -> DriverResult<Self> {
        toml::from_str(input).map_err(|e| DriverError::config(format!("invalid config: {}", e)))
    }

    /// Read and parse a TOML file, expanding `${VAR}` references from the
    /// process environment.
    pub fn load(path: impl AsRef<Path>) -> DriverResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading connection config");

        let input = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&input)?;
        config.expand_env(&EnvExpander::new())?;
        Ok(config)
    }

    /// Expand environment references in every string field.
    ///
    /// On error the configuration is left unchanged.
    pub fn expand_env<S: EnvSource>(&mut self, expander: &EnvExpander<S>) -> DriverResult<()> {
        let mut connections = self.connections.clone();
        for params in connections.values_mut() {
            expander.expand_opt(&mut params.driver)?;
            expander.expand_opt(&mut params.host)?;
            expander.expand_opt(&mut params.server)?;
            expander.expand_opt(&mut params.dsn)?;
            expander.expand_opt(&mut params.dbname)?;
            expander.expand_opt(&mut params.user)?;
            expander.expand_opt(&mut params.password)?;

            let options = std::mem::take(&mut params.driver_options);
            for (key, value) in options.iter() {
                params.driver_options.insert(key, expander.expand(value)?);
            }
        }
        self.connections = connections;
        Ok(())
    }

    /// Look up a connection by name.
    pub fn connection(&self, name: &str) -> DriverResult<&ConnectionParams> {
        self.connections
            .get(name)
            .ok_or_else(|| DriverError::config(format!("no connection named '{}'", name)))
    }

    /// The default connection: the one named by `default`, or the only one
    /// configured.
    pub fn default_connection(&self) -> DriverResult<&ConnectionParams> {
        match (&self.default, self.connections.len()) {
            (Some(name), _) => self.connection(name),
            (None, 1) => Ok(&self.connections[0]),
            (None, 0) => Err(DriverError::config("no connections configured")),
            (None, _) => Err(DriverError::config(
                "multiple connections configured but no default set",
            )),
        }
    }
}
