mod dialect;
pub use dialect::{render, Dialect, TABLE_NAME_PLACEHOLDER};

mod response;
pub use response::{Column, Inserted, Rows};

use crate::{async_trait, stmt::Value, Result};

use std::fmt::Debug;

/// Opens connections to one database. Pools call this on demand.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;

    /// Upper bound on concurrent connections the backend supports, if any.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A live database connection.
///
/// SQL arrives fully rendered with positional `?` placeholders; `params` are
/// bound in order.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Run a query and return every row.
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows>;

    /// Run a statement and return the number of affected rows.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;

    /// Run an insert and report the generated key, when the driver returns one.
    async fn insert(&mut self, sql: &str, params: &[Value]) -> Result<Inserted>;

    /// Run one prepared statement once per parameter row.
    async fn execute_batch(&mut self, sql: &str, rows: &[Vec<Value>]) -> Result<u64>;

    /// Run a query for its result metadata only and report each column with
    /// its runtime type.
    async fn describe(&mut self, sql: &str) -> Result<Vec<Column>>;
}
