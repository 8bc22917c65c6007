use super::Pool;
use crate::Result;

use std::sync::Arc;
use tabula_core::{Dialect, Error};

/// Where a group of models lives: a connection pool and the SQL flavor its
/// database speaks.
///
/// The id names the data source in the catalog. Clones share the same pool
/// and compare equal under [`DbConfig::same`].
#[derive(Debug, Clone)]
pub struct DbConfig {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    id: String,
    pool: Pool,
    dialect: Box<dyn Dialect>,
}

impl DbConfig {
    pub fn new(id: impl Into<String>, pool: Pool, dialect: impl Dialect) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::invalid_configuration("config id cannot be blank"));
        }

        Ok(Self {
            inner: Arc::new(Inner {
                id,
                pool,
                dialect: Box::new(dialect),
            }),
        })
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn pool(&self) -> &Pool {
        &self.inner.pool
    }

    pub fn dialect(&self) -> &dyn Dialect {
        &*self.inner.dialect
    }

    /// Returns `true` if both handles were cloned from the same config.
    pub fn same(&self, other: &DbConfig) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Per-model overrides applied at registration.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Table name, or shard prefix for sequence models. Derived from the
    /// model name when unset.
    pub table: Option<String>,

    /// Primary key column. Falls back to the dialect default when unset.
    pub primary_key: Option<String>,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = Some(primary_key.into());
        self
    }
}
