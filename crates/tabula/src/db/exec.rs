//! Runs statements on a pooled connection.
//!
//! Each call checks out one connection and hands it back when the call
//! returns, on success and on failure alike. Failures carry the SQL text,
//! including failures to obtain a connection.

use super::Pool;
use crate::Result;

use tabula_core::{
    driver::{Column, Inserted, Rows},
    Error, Value,
};
use tabula_sql::{BatchStatement, Statement};

pub(crate) async fn query(pool: &Pool, sql: &str, params: &[Value]) -> Result<Rows> {
    tracing::debug!(sql, params = params.len(), "query");
    async { pool.get().await?.query(sql, params).await }
        .await
        .map_err(|err| err.context(Error::query_execution(sql)))
}

pub(crate) async fn execute(pool: &Pool, sql: &str, params: &[Value]) -> Result<u64> {
    tracing::debug!(sql, params = params.len(), "execute");
    async { pool.get().await?.execute(sql, params).await }
        .await
        .map_err(|err| err.context(Error::query_execution(sql)))
}

pub(crate) async fn insert(pool: &Pool, stmt: &Statement) -> Result<Inserted> {
    tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "insert");
    async { pool.get().await?.insert(&stmt.sql, &stmt.params).await }
        .await
        .map_err(|err| err.context(Error::query_execution(&stmt.sql)))
}

pub(crate) async fn execute_batch(pool: &Pool, stmt: &BatchStatement) -> Result<u64> {
    tracing::debug!(sql = %stmt.sql, rows = stmt.rows.len(), "execute batch");
    async { pool.get().await?.execute_batch(&stmt.sql, &stmt.rows).await }
        .await
        .map_err(|err| err.context(Error::query_execution(&stmt.sql)))
}

pub(crate) async fn describe(pool: &Pool, sql: &str) -> Result<Vec<Column>> {
    tracing::debug!(sql, "describe columns");
    async { pool.get().await?.describe(sql).await }
        .await
        .map_err(|err| err.context(Error::query_execution(sql)))
}
