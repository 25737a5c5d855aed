//! Driver traits and the driver registry.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::error::{DriverError, DriverResult};
use crate::params::ConnectionParams;

/// An open connection returned by a [`Driver`].
pub trait DriverConnection: Send + fmt::Debug + Any {
    /// Identity token of the driver that opened this connection.
    fn driver_name(&self) -> &str;

    /// Whether the client library was asked for a persistent connection.
    fn is_persistent(&self) -> bool;

    /// Upcast for downcasting to the concrete connection type.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for downcasting a boxed connection to its concrete type.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn DriverConnection {
    /// Downcast to a concrete connection type.
    pub fn downcast_ref<T: DriverConnection>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcast a boxed connection to a concrete connection type.
    pub fn downcast<T: DriverConnection>(self: Box<Self>) -> Result<Box<T>, Box<dyn Any>> {
        self.into_any().downcast::<T>()
    }
}

/// A database driver.
///
/// A driver turns generic [`ConnectionParams`] into an engine-specific
/// connection string, opens a connection with it and translates any failure
/// into [`DriverError::Driver`].
#[async_trait]
pub trait Driver: Send + Sync {
    /// Short lowercase identity token used to register and select the driver.
    fn name(&self) -> &'static str;

    /// Open a connection.
    async fn connect(&self, params: &ConnectionParams) -> DriverResult<Box<dyn DriverConnection>>;
}

/// Registry of drivers keyed by their identity token.
///
/// ```rust,ignore
/// let mut manager = DriverManager::new();
/// manager.register(SqlAnywhereDsnDriver::new(connector));
///
/// let params = ConnectionParams::new()
///     .driver("sqlanywheredsn")
///     .dsn("Sales")
///     .dbname("sales");
/// let conn = manager.connect(&params).await?;
/// ```
#[derive(Default, Clone)]
pub struct DriverManager {
    drivers: IndexMap<SmolStr, Arc<dyn Driver>>,
}

impl DriverManager {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver under its name, replacing any driver with the same name.
    pub fn register<D: Driver + 'static>(&mut self, driver: D) -> &mut Self {
        self.register_arc(Arc::new(driver))
    }

    /// Register a shared driver.
    pub fn register_arc(&mut self, driver: Arc<dyn Driver>) -> &mut Self {
        let name = SmolStr::new(driver.name());
        debug!(driver = %name, "Registering driver");
        self.drivers.insert(name, driver);
        self
    }

    /// Look up a driver by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Driver>> {
        self.drivers.get(name).cloned()
    }

    /// Check if a driver is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// Registered driver names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.drivers.keys().map(SmolStr::as_str)
    }

    /// Open a connection with the driver named by `params.driver`.
    pub async fn connect(
        &self,
        params: &ConnectionParams,
    ) -> DriverResult<Box<dyn DriverConnection>> {
        let name = params
            .driver_name()
            .ok_or_else(|| DriverError::config("no driver specified"))?;

        let driver = self
            .drivers
            .get(name)
            .ok_or_else(|| DriverError::UnknownDriver(name.to_string()))?;

        driver.connect(params).await
    }
}

impl fmt::Debug for DriverManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverManager")
            .field("drivers", &self.drivers.keys().collect::<Vec<_>>())
            .finish()
    }
}
