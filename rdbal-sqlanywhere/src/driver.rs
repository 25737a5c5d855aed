//! The SQL Anywhere DSN driver.

use async_trait::async_trait;
use rdbal_driver::{ConnectionParams, Driver, DriverConnection, DriverError, DriverResult};
use tracing::{debug, warn};

use crate::config::SqlAnywhereConfig;
use crate::connection::SqlAnywhereConnection;
use crate::connector::Connector;

/// Identity token of [`SqlAnywhereDsnDriver`].
pub const DRIVER_NAME: &str = "sqlanywheredsn";

/// SQL Anywhere driver that can connect through a named data source as well
/// as by host and port.
#[derive(Debug, Clone, Default)]
pub struct SqlAnywhereDsnDriver<C> {
    connector: C,
}

impl<C: Connector> SqlAnywhereDsnDriver<C> {
    /// Create a driver that opens connections with `connector`.
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// The connector used to open connections.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Resolve `params` and render the connection string.
    pub fn build_connection_string(&self, params: &ConnectionParams) -> DriverResult<String> {
        Ok(SqlAnywhereConfig::from_params(params)?.to_connection_string())
    }

    /// Open a connection described by `params`.
    pub async fn open(
        &self,
        params: &ConnectionParams,
    ) -> DriverResult<SqlAnywhereConnection<C::Handle>> {
        let config = SqlAnywhereConfig::from_params(params)?;
        self.open_config(&config).await
    }

    /// Open a connection from an already resolved configuration.
    pub async fn open_config(
        &self,
        config: &SqlAnywhereConfig,
    ) -> DriverResult<SqlAnywhereConnection<C::Handle>> {
        debug!(
            driver = DRIVER_NAME,
            dsn = %config.to_redacted_string(),
            persistent = config.persistent,
            "Opening connection"
        );

        match self
            .connector
            .open(&config.to_connection_string(), config.persistent)
            .await
        {
            Ok(handle) => Ok(SqlAnywhereConnection::new(handle, config.persistent)),
            Err(e) => {
                warn!(driver = DRIVER_NAME, error = %e, "Connection failed");
                Err(DriverError::driver(DRIVER_NAME, e))
            }
        }
    }
}

#[async_trait]
impl<C: Connector> Driver for SqlAnywhereDsnDriver<C> {
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    async fn connect(&self, params: &ConnectionParams) -> DriverResult<Box<dyn DriverConnection>> {
        let conn = self.open(params).await?;
        Ok(Box::new(conn))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{SqlAnywhereError, SqlAnywhereResult};

    #[derive(Debug, Default)]
    struct RecordingConnector {
        calls: Mutex<Vec<(String, bool)>>,
        fail: bool,
    }

    #[async_trait]
    impl Connector for RecordingConnector {
        type Handle = String;

        async fn open(
            &self,
            connection_string: &str,
            persistent: bool,
        ) -> SqlAnywhereResult<Self::Handle> {
            self.calls
                .lock()
                .unwrap()
                .push((connection_string.to_string(), persistent));

            if self.fail {
                Err(SqlAnywhereError::connect_with(
                    "08001",
                    -100,
                    "Database server not found",
                ))
            } else {
                Ok(format!("handle:{}", connection_string))
            }
        }
    }

    #[test]
    fn test_name() {
        let driver = SqlAnywhereDsnDriver::new(RecordingConnector::default());
        assert_eq!(driver.name(), "sqlanywheredsn");
    }

    #[test]
    fn test_build_connection_string() {
        let driver = SqlAnywhereDsnDriver::new(RecordingConnector::default());
        let s = driver
            .build_connection_string(&ConnectionParams::new().dsn("Sales").dbname("sales"))
            .unwrap();
        assert_eq!(s, "DSN=Sales;DBN=sales;UID=;PWD=;");
    }

    #[tokio::test]
    async fn test_open_passes_string_and_persistent_flag() {
        let driver = SqlAnywhereDsnDriver::new(RecordingConnector::default());
        let params = ConnectionParams::new()
            .dsn("Sales")
            .dbname("sales")
            .user("dba")
            .password("sql")
            .persistent(true);

        let conn = driver.open(&params).await.unwrap();
        assert!(conn.is_persistent());
        assert_eq!(conn.inner(), "handle:DSN=Sales;DBN=sales;UID=dba;PWD=sql;");

        let calls = driver.connector().calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![("DSN=Sales;DBN=sales;UID=dba;PWD=sql;".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn test_failure_is_wrapped_once_without_retry() {
        let driver = SqlAnywhereDsnDriver::new(RecordingConnector {
            fail: true,
            ..Default::default()
        });

        let err = driver
            .open(&ConnectionParams::new().dbname("x"))
            .await
            .unwrap_err();

        assert!(err.is_connection_error());
        assert_eq!(err.driver_name(), Some("sqlanywheredsn"));
        assert_eq!(err.error_code(), Some(-100));
        assert_eq!(err.sql_state(), Some("08001"));
        assert_eq!(
            err.to_string(),
            "an exception occurred in driver 'sqlanywheredsn': \
             SQLSTATE[08001] [-100] Database server not found"
        );
        assert_eq!(driver.connector().calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_database_never_reaches_connector() {
        let driver = SqlAnywhereDsnDriver::new(RecordingConnector::default());
        let err = driver
            .open(&ConnectionParams::new().dsn("Sales"))
            .await
            .unwrap_err();

        assert!(err.is_config_error());
        assert!(driver.connector().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_connect_through_trait_object() {
        let driver: Box<dyn Driver> =
            Box::new(SqlAnywhereDsnDriver::new(RecordingConnector::default()));
        let conn = driver
            .connect(&ConnectionParams::new().dbname("x"))
            .await
            .unwrap();

        assert_eq!(conn.driver_name(), "sqlanywheredsn");
        assert!(!conn.is_persistent());

        let conn = conn
            .downcast_ref::<SqlAnywhereConnection<String>>()
            .unwrap();
        assert_eq!(conn.inner(), "handle:HOST=localhost:2638;DBN=x;UID=;PWD=;");
    }
}
