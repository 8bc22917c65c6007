//! Active-record style mapping between application record types and
//! relational tables.
//!
//! Record types are registered once at startup against a [`DbConfig`]; the
//! resulting [`Db`] issues the CRUD SQL for them and, for [`SeqModel`] types
//! spread over many physically named shards, discovers the matching tables
//! at call time.

pub mod cache;
pub use cache::MemoryCache;

mod catalog;
pub use catalog::{Catalog, Resolved};

pub mod db;
pub use db::{Db, DbConfig, Pool, PoolConfig, TableOptions};

mod model;
pub use model::{Model, SeqModel};

pub mod driver {
    pub use tabula_core::driver::*;
}

pub use tabula_core::{bail, err, Cache, Error, Record, Result, TableMeta, Type, Value};
pub use tabula_sql::Flavor;

#[cfg(feature = "sqlite")]
pub use tabula_driver_sqlite::Sqlite;
