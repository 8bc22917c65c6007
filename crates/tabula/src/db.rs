mod builder;
pub use builder::Builder;

mod config;
pub use config::{DbConfig, TableOptions};

mod connect;
pub use connect::Connect;

mod exec;

mod pool;
pub use pool::{Pool, PoolConfig, PoolConnection, PoolStatus, Timeouts};

mod seq;

use crate::{Cache, Catalog, Model, Record, Resolved, Result, Value};

use std::sync::Arc;
use tabula_core::{driver::Rows, Error};
use tabula_sql::serializer;

/// Handle for reading and writing registered models.
///
/// Built once by [`Db::builder`]; the catalog is read-only afterwards, so
/// clones can be shared freely across tasks. Every operation checks out one
/// connection from the model's pool for its own duration.
#[derive(Debug, Clone)]
pub struct Db {
    catalog: Arc<Catalog>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs raw SQL on `M`'s data source and returns the affected row count.
    pub async fn execute<M: Model>(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let Resolved { config, .. } = self.catalog.resolve::<M>()?;
        exec::execute(config.pool(), sql, params).await
    }

    /// Inserts `model` and stores the generated primary key on it.
    ///
    /// Returns `true` if exactly one row was written. A write that the
    /// database acknowledges without a generated key is an error.
    pub async fn save<M: Model>(&self, model: &mut M) -> Result<bool> {
        let Resolved { config, table } = self.catalog.resolve::<M>()?;
        let primary_key_ty = table.primary_key_ty()?;
        let target = table.table_for(model.record());

        let stmt = serializer::insert(&target, model.record());
        let inserted = exec::insert(config.pool(), &stmt).await?;

        if inserted.count == 0 {
            return Ok(false);
        }

        let key = inserted
            .generated_key
            .ok_or_else(|| Error::missing_generated_key(&target))?
            .cast(primary_key_ty)?;
        model.record_mut().set(table.primary_key(), key);

        Ok(inserted.count == 1)
    }

    /// Inserts every model with one prepared statement and returns the number
    /// of rows written.
    ///
    /// The column list is taken from the first model; columns it lacks on
    /// later models bind `NULL`, extra columns are ignored. Generated keys
    /// are not read back. All models go to the first model's table.
    pub async fn batch_save<M: Model>(&self, models: &[M]) -> Result<u64> {
        let Resolved { config, table } = self.catalog.resolve::<M>()?;
        let Some(first) = models.first() else {
            return Ok(0);
        };

        let target = table.table_for(first.record());
        let records = models
            .iter()
            .map(|model| model.record().clone())
            .collect::<Vec<_>>();

        match serializer::batch_insert(&target, &records) {
            Some(stmt) => exec::execute_batch(config.pool(), &stmt).await,
            None => Ok(0),
        }
    }

    /// Writes every column of `model`, keyed on its current primary key.
    ///
    /// The primary key must already be set, as it is on loaded or saved
    /// models; otherwise the statement matches `NULL` and updates nothing.
    pub async fn update<M: Model>(&self, model: &M) -> Result<bool> {
        let Resolved { config, table } = self.catalog.resolve::<M>()?;
        let target = table.table_for(model.record());

        let stmt = serializer::update(&target, model.record(), table.primary_key());
        let count = exec::execute(config.pool(), &stmt.sql, &stmt.params).await?;
        Ok(count >= 1)
    }

    pub async fn delete<M: Model>(&self, model: &M) -> Result<bool> {
        let Resolved { config, table } = self.catalog.resolve::<M>()?;
        let target = table.table_for(model.record());
        let id = model
            .record()
            .get(table.primary_key())
            .cloned()
            .unwrap_or_default();

        let sql = serializer::delete_by_primary_key(&target, table.primary_key());
        let count = exec::execute(config.pool(), &sql, &[id]).await?;
        Ok(count >= 1)
    }

    /// Deletes the row with primary key `id`. Sequence models target their
    /// newest shard.
    pub async fn delete_by_primary_key<M: Model>(&self, id: impl Into<Value>) -> Result<bool> {
        let Resolved { config, table } = self.catalog.resolve::<M>()?;
        let target = table.table_for(&Record::new());

        let sql = serializer::delete_by_primary_key(&target, table.primary_key());
        let count = exec::execute(config.pool(), &sql, &[id.into()]).await?;
        Ok(count >= 1)
    }

    /// Loads the row with primary key `id`. Sequence models read their newest
    /// shard.
    pub async fn find_by_primary_key<M: Model>(&self, id: impl Into<Value>) -> Result<Option<M>> {
        let Resolved { config, table } = self.catalog.resolve::<M>()?;
        let target = table.table_for(&Record::new());

        let sql = serializer::select_by_primary_key(&target, table.primary_key());
        let rows = exec::query(config.pool(), &sql, &[id.into()]).await?;
        first(rows)
    }

    /// Runs a query on `M`'s data source and loads every row.
    pub async fn find<M: Model>(&self, sql: &str, params: &[Value]) -> Result<Vec<M>> {
        let Resolved { config, .. } = self.catalog.resolve::<M>()?;
        let rows = exec::query(config.pool(), sql, params).await?;
        load_all(rows.into_records())
    }

    /// Like [`find`](Db::find), keeping only the first row. No `LIMIT` is
    /// added to `sql`.
    pub async fn find_first<M: Model>(&self, sql: &str, params: &[Value]) -> Result<Option<M>> {
        let Resolved { config, .. } = self.catalog.resolve::<M>()?;
        let rows = exec::query(config.pool(), sql, params).await?;
        first(rows)
    }

    pub async fn find_cached<M: Model>(
        &self,
        cache: &dyn Cache,
        key: &str,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<M>> {
        let Resolved { config, .. } = self.catalog.resolve::<M>()?;
        if let Some(records) = cache_get(cache, key) {
            return load_all(records);
        }

        let records = exec::query(config.pool(), sql, params)
            .await?
            .into_records();
        cache.put(key, records.clone());
        load_all(records)
    }

    pub async fn find_first_cached<M: Model>(
        &self,
        cache: &dyn Cache,
        key: &str,
        sql: &str,
        params: &[Value],
    ) -> Result<Option<M>> {
        let Resolved { config, .. } = self.catalog.resolve::<M>()?;
        if let Some(records) = cache_get(cache, key) {
            return load_first(records);
        }

        let records = first_record(exec::query(config.pool(), sql, params).await?);
        cache.put(key, records.clone());
        load_first(records)
    }

    pub async fn find_by_primary_key_cached<M: Model>(
        &self,
        cache: &dyn Cache,
        key: &str,
        id: impl Into<Value>,
    ) -> Result<Option<M>> {
        let Resolved { config, table } = self.catalog.resolve::<M>()?;
        if let Some(records) = cache_get(cache, key) {
            return load_first(records);
        }

        let target = table.table_for(&Record::new());
        let sql = serializer::select_by_primary_key(&target, table.primary_key());
        let records = first_record(exec::query(config.pool(), &sql, &[id.into()]).await?);
        cache.put(key, records.clone());
        load_first(records)
    }

    /// Builds `column in (...)` with `values` interpolated as literals.
    ///
    /// Values are quoted unless `column`'s introspected type is boolean or
    /// numeric. Nothing is escaped, so `values` must never carry untrusted
    /// input.
    pub fn in_clause<'a, M: Model>(
        &self,
        column: &str,
        values: impl IntoIterator<Item = &'a Value>,
    ) -> Result<String> {
        let Resolved { table, .. } = self.catalog.resolve::<M>()?;
        let ty = table.column_ty(column)?;
        Ok(serializer::in_clause(column, ty, values))
    }
}

pub(super) fn cache_get(cache: &dyn Cache, key: &str) -> Option<Vec<Record>> {
    let hit = cache.get(key);
    tracing::trace!(key, hit = hit.is_some(), "cache lookup");
    hit
}

fn first_record(rows: Rows) -> Vec<Record> {
    let mut records = rows.into_records();
    records.truncate(1);
    records
}

fn first<M: Model>(rows: Rows) -> Result<Option<M>> {
    load_first(first_record(rows))
}

fn load_first<M: Model>(records: Vec<Record>) -> Result<Option<M>> {
    records.into_iter().next().map(M::load).transpose()
}

fn load_all<M: Model>(records: Vec<Record>) -> Result<Vec<M>> {
    records.into_iter().map(M::load).collect()
}
