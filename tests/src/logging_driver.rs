use std::sync::{Arc, Mutex};
use tabula::driver::{Column, Driver, Inserted, Rows};
use tabula_core::{async_trait, Connection, Result, Value};

/// Wraps a driver and records every statement sent through it.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Shared with every connection this driver opens
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log_handle(),
        }))
    }

    fn max_connections(&self) -> Option<usize> {
        self.inner.max_connections()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Query,
    Execute,
    Insert,
    ExecuteBatch,
    Describe,
}

#[derive(Debug, Clone)]
pub struct DriverOp {
    pub kind: OpKind,
    pub sql: String,

    /// Whether the underlying driver succeeded
    pub ok: bool,
}

#[derive(Debug)]
pub struct LoggingConnection {
    inner: Box<dyn Connection>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingConnection {
    fn log<T>(&self, kind: OpKind, sql: &str, result: Result<T>) -> Result<T> {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                kind,
                sql: sql.to_string(),
                ok: result.is_ok(),
            });
        result
    }
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        let result = self.inner.query(sql, params).await;
        self.log(OpKind::Query, sql, result)
    }

    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        let result = self.inner.execute(sql, params).await;
        self.log(OpKind::Execute, sql, result)
    }

    async fn insert(&mut self, sql: &str, params: &[Value]) -> Result<Inserted> {
        let result = self.inner.insert(sql, params).await;
        self.log(OpKind::Insert, sql, result)
    }

    async fn execute_batch(&mut self, sql: &str, rows: &[Vec<Value>]) -> Result<u64> {
        let result = self.inner.execute_batch(sql, rows).await;
        self.log(OpKind::ExecuteBatch, sql, result)
    }

    async fn describe(&mut self, sql: &str) -> Result<Vec<Column>> {
        let result = self.inner.describe(sql).await;
        self.log(OpKind::Describe, sql, result)
    }
}
