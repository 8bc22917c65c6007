use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use tabula_core::{stmt, Result};

#[derive(Debug)]
pub struct Value(stmt::Value);

impl From<stmt::Value> for Value {
    fn from(value: stmt::Value) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core Tabula value.
    pub fn into_inner(self) -> stmt::Value {
        self.0
    }

    /// Converts a SQLite value within a row to a Tabula value.
    ///
    /// SQLite stores booleans as integers, so the column's declared type is
    /// needed to tell them apart.
    pub fn from_sql(row: &Row, index: usize, ty: Option<stmt::Type>) -> Result<Self> {
        let value: SqlValue = row
            .get(index)
            .map_err(tabula_core::Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => stmt::Value::Null,
            SqlValue::Integer(value) => match ty {
                Some(stmt::Type::Bool) => stmt::Value::Bool(value != 0),
                _ => stmt::Value::I64(value),
            },
            SqlValue::Real(value) => stmt::Value::F64(value),
            SqlValue::Text(value) => stmt::Value::String(value),
            SqlValue::Blob(value) => stmt::Value::Bytes(value),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v)))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
