//! The client-library primitive that actually opens a connection.

use std::fmt;

use async_trait::async_trait;

use crate::error::SqlAnywhereResult;

/// Opens a connection from a rendered connection string.
///
/// This is the seam between the driver and whatever client library talks
/// to the server. The driver never retries; each call is one attempt.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Handle to an open connection.
    type Handle: Send + fmt::Debug + 'static;

    /// Open a connection.
    async fn open(&self, connection_string: &str, persistent: bool)
    -> SqlAnywhereResult<Self::Handle>;
}

#[cfg(feature = "odbc")]
pub use self::odbc::{OdbcConnector, OdbcHandle};

#[cfg(feature = "odbc")]
mod odbc {
    use std::fmt;

    use async_trait::async_trait;
    use odbc_api::{Connection, ConnectionOptions};
    use tracing::debug;

    use super::Connector;
    use crate::error::{SqlAnywhereError, SqlAnywhereResult};

    /// Connector backed by the process-wide ODBC environment.
    ///
    /// Named data sources are looked up by the ODBC driver manager, so a
    /// `DSN=` connection string works as long as the DSN is registered.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct OdbcConnector {
        login_timeout_sec: Option<u32>,
    }

    impl OdbcConnector {
        /// Create a connector with the driver's default login timeout.
        pub fn new() -> Self {
            Self::default()
        }

        /// Set the login timeout in seconds.
        pub fn login_timeout_sec(mut self, secs: u32) -> Self {
            self.login_timeout_sec = Some(secs);
            self
        }
    }

    /// An open ODBC connection.
    pub struct OdbcHandle {
        connection: Connection<'static>,
        persistent: bool,
    }

    impl OdbcHandle {
        /// The underlying ODBC connection.
        pub fn connection(&self) -> &Connection<'static> {
            &self.connection
        }

        /// Unwrap into the underlying ODBC connection.
        pub fn into_connection(self) -> Connection<'static> {
            self.connection
        }
    }

    impl fmt::Debug for OdbcHandle {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("OdbcHandle")
                .field("persistent", &self.persistent)
                .finish_non_exhaustive()
        }
    }

    #[async_trait]
    impl Connector for OdbcConnector {
        type Handle = OdbcHandle;

        async fn open(
            &self,
            connection_string: &str,
            persistent: bool,
        ) -> SqlAnywhereResult<Self::Handle> {
            let connection_string = connection_string.to_string();
            let options = ConnectionOptions {
                login_timeout_sec: self.login_timeout_sec,
                ..Default::default()
            };

            // Connection pooling is configured on the ODBC environment, so
            // `persistent` is only recorded on the handle.
            let connection = tokio::task::spawn_blocking(move || {
                let env = odbc_api::environment()?;
                env.connect_with_connection_string(&connection_string, options)
            })
            .await
            .map_err(|e| SqlAnywhereError::internal(format!("connect task failed: {}", e)))??;

            debug!(persistent, "ODBC connection established");
            Ok(OdbcHandle {
                connection,
                persistent,
            })
        }
    }
}
