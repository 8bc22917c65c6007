use super::Error;

/// Error raised when a connection cannot be acquired from the pool.
///
/// Covers both pool construction failures and checkout failures (timeouts,
/// the driver refusing to open a new connection).
#[derive(Debug)]
pub(super) struct ConnectionPoolError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionPoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionPoolError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("connection unavailable: ")?;
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    /// Creates an error from a connection pool error.
    pub fn connection_pool(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ConnectionPool(ConnectionPoolError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a connection pool error.
    pub fn is_connection_pool(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionPool(_))
    }
}
