mod ty;

mod value;
pub(crate) use value::Value;

use rusqlite::{params_from_iter, Connection as RusqliteConnection};
use std::path::{Path, PathBuf};
use tabula_core::{
    async_trait,
    driver::{Column, Driver, Inserted, Rows},
    stmt, Connection as _, Error, Result,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_configuration(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    async fn connect(&self) -> Result<Box<dyn tabula_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }

    fn max_connections(&self) -> Option<usize> {
        // Every in-memory connection is its own database.
        matches!(self, Self::InMemory).then_some(1)
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }
}

fn bind(params: &[stmt::Value]) -> impl Iterator<Item = Value> + '_ {
    params.iter().cloned().map(Value::from)
}

#[async_trait]
impl tabula_core::Connection for Connection {
    async fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Rows> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let (columns, tys): (Vec<String>, Vec<_>) = stmt
            .columns()
            .iter()
            .map(|column| {
                (
                    column.name().to_string(),
                    column.decl_type().map(|decl| ty::from_decl_type(Some(decl))),
                )
            })
            .unzip();

        let mut rows = stmt
            .query(params_from_iter(bind(params)))
            .map_err(Error::driver_operation_failed)?;

        let mut values = vec![];
        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let record = tys
                .iter()
                .enumerate()
                .map(|(index, ty)| Value::from_sql(row, index, *ty).map(Value::into_inner))
                .collect::<Result<Vec<_>>>()?;
            values.push(record);
        }

        Ok(Rows { columns, values })
    }

    async fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let count = stmt
            .execute(params_from_iter(bind(params)))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    async fn insert(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Inserted> {
        let count = self.execute(sql, params).await?;

        // SQLite reports the rowid of the last successful insert on this
        // connection; it is only meaningful if this insert wrote a row.
        let generated_key =
            (count > 0).then(|| stmt::Value::I64(self.connection.last_insert_rowid()));

        Ok(Inserted {
            count,
            generated_key,
        })
    }

    async fn execute_batch(&mut self, sql: &str, rows: &[Vec<stmt::Value>]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let mut count = 0;
        for params in rows {
            count += stmt
                .execute(params_from_iter(bind(params)))
                .map_err(Error::driver_operation_failed)? as u64;
        }

        Ok(count)
    }

    async fn describe(&mut self, sql: &str) -> Result<Vec<Column>> {
        let stmt = self
            .connection
            .prepare(sql)
            .map_err(Error::driver_operation_failed)?;

        Ok(stmt
            .columns()
            .iter()
            .map(|column| Column {
                name: column.name().to_string(),
                ty: ty::from_decl_type(column.decl_type()),
            })
            .collect())
    }
}
