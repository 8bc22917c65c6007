use super::Value;
use crate::Result;

use indexmap::IndexMap;

/// Column-name to value store backing one model instance.
///
/// Columns keep insertion order; generated SQL lists columns in that order.
/// Records loaded from a sharded table remember the physical table they were
/// read from so that later writes go back to the same table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    values: IndexMap<String, Value>,
    table: Option<String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `column` to `value`, replacing any previous value in place.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.values.shift_remove(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + Clone + '_ {
        self.values.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(column, value)| (column.as_str(), value))
    }

    /// Physical table this record was read from, if it came from a sharded read.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn set_table(&mut self, table: impl Into<String>) {
        self.table = Some(table.into());
    }

    pub fn get_bool(&self, column: &str) -> Result<Option<bool>> {
        self.typed(column, Value::to_bool)
    }

    pub fn get_i32(&self, column: &str) -> Result<Option<i32>> {
        self.typed(column, Value::to_i32)
    }

    pub fn get_i64(&self, column: &str) -> Result<Option<i64>> {
        self.typed(column, Value::to_i64)
    }

    pub fn get_f64(&self, column: &str) -> Result<Option<f64>> {
        self.typed(column, Value::to_f64)
    }

    pub fn get_string(&self, column: &str) -> Result<Option<String>> {
        self.typed(column, Value::to_string_value)
    }

    pub fn get_bytes(&self, column: &str) -> Result<Option<Vec<u8>>> {
        self.typed(column, Value::to_bytes)
    }

    fn typed<T>(&self, column: &str, convert: impl FnOnce(&Value) -> Result<T>) -> Result<Option<T>> {
        match self.values.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => convert(value).map(Some),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            values: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
            table: None,
        }
    }
}
