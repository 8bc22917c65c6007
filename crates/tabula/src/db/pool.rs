//! Connection pooling for database connections.

use std::ops::{Deref, DerefMut};

pub use deadpool::managed::Timeouts;
use tabula_core::{Connection, Driver};

use super::Connect;

/// Get the default maximum size of a pool, which is `cpu_core_count * 2`
/// including logical cores (Hyper-Threading).
fn get_default_pool_max_size() -> usize {
    deadpool::managed::PoolConfig::default().max_size
}

/// Configuration for connection pool behavior.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_size: usize,
    pub timeouts: Timeouts,
}

impl PoolConfig {
    /// Creates a new pool configuration with default settings.
    pub fn new() -> Self {
        Self {
            max_size: get_default_pool_max_size(),
            timeouts: Default::default(),
        }
    }

    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A connection pool that manages database connections.
///
/// Cloning is cheap; clones share the same connections.
#[derive(Clone)]
pub struct Pool {
    inner: deadpool::managed::Pool<Manager>,
}

/// Snapshot of pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub max_size: usize,

    /// Connections currently open, idle or checked out
    pub size: usize,

    /// Idle connections ready to be handed out
    pub available: usize,
}

impl Pool {
    /// Creates a new connection pool from the given driver.
    pub fn new(driver: impl Driver) -> crate::Result<Self> {
        Self::with_config(driver, PoolConfig::default())
    }

    /// Creates a new connection pool from the given driver and settings. The
    /// pool never grows past what the driver supports.
    pub fn with_config(driver: impl Driver, config: PoolConfig) -> crate::Result<Self> {
        let max_size = match driver.max_connections() {
            Some(max_connections) => config.max_size.min(max_connections),
            None => config.max_size,
        };

        let inner = deadpool::managed::Pool::builder(Manager {
            driver: Box::new(driver),
        })
        .max_size(max_size)
        .timeouts(config.timeouts)
        .runtime(deadpool::Runtime::Tokio1)
        .build()
        .map_err(tabula_core::Error::connection_pool)?;

        tracing::info!(max_size, "connection pool created");

        Ok(Self { inner })
    }

    /// Creates a new connection pool from a connection URL.
    pub fn connect(url: &str) -> crate::Result<Self> {
        Self::new(Connect::new(url)?)
    }

    /// Retrieves a connection from the pool.
    pub async fn get(&self) -> crate::Result<PoolConnection> {
        let connection = self
            .inner
            .get()
            .await
            .map_err(tabula_core::Error::connection_pool)?;
        Ok(PoolConnection { inner: connection })
    }

    pub fn status(&self) -> PoolStatus {
        let status = self.inner.status();
        PoolStatus {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
        }
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("status", &self.status())
            .finish()
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl deadpool::managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = crate::Error;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _obj: &mut Self::Type,
        _metrics: &deadpool::managed::Metrics,
    ) -> deadpool::managed::RecycleResult<Self::Error> {
        Ok(())
    }
}

/// A connection retrieved from a pool.
///
/// When dropped, the connection is returned to the pool for reuse.
pub struct PoolConnection {
    inner: deadpool::managed::Object<Manager>,
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
