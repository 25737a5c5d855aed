//! SQL Anywhere connection wrapper.

use std::any::Any;
use std::fmt;

use rdbal_driver::DriverConnection;

use crate::driver::DRIVER_NAME;

/// An open SQL Anywhere connection.
pub struct SqlAnywhereConnection<H> {
    handle: H,
    persistent: bool,
}

impl<H> SqlAnywhereConnection<H> {
    pub(crate) fn new(handle: H, persistent: bool) -> Self {
        Self { handle, persistent }
    }

    /// The client library's connection handle.
    pub fn inner(&self) -> &H {
        &self.handle
    }

    /// Mutable access to the client library's connection handle.
    pub fn inner_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Unwrap into the client library's connection handle.
    pub fn into_inner(self) -> H {
        self.handle
    }
}

impl<H: fmt::Debug> fmt::Debug for SqlAnywhereConnection<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlAnywhereConnection")
            .field("handle", &self.handle)
            .field("persistent", &self.persistent)
            .finish()
    }
}

impl<H: Send + fmt::Debug + 'static> DriverConnection for SqlAnywhereConnection<H> {
    fn driver_name(&self) -> &str {
        DRIVER_NAME
    }

    fn is_persistent(&self) -> bool {
        self.persistent
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
