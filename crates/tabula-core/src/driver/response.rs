use crate::stmt::{Record, Type, Value};

/// Rows returned by a query, in the order the database produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows {
    /// Column labels, one per value in each row
    pub columns: Vec<String>,

    pub values: Vec<Vec<Value>>,
}

impl Rows {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copies every column of every row into a fresh [`Record`].
    pub fn into_records(self) -> Vec<Record> {
        let columns = self.columns;
        self.values
            .into_iter()
            .map(|row| columns.iter().cloned().zip(row).collect())
            .collect()
    }

    /// First column of every row, for single-column queries.
    pub fn into_first_column(self) -> impl Iterator<Item = Value> {
        self.values
            .into_iter()
            .filter_map(|row| row.into_iter().next())
    }
}

/// A column reported by [`Connection::describe`](super::Connection::describe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: Type,
}

/// Outcome of an insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Inserted {
    /// Number of rows inserted
    pub count: u64,

    /// Key generated by the database, if it reported one
    pub generated_key: Option<Value>,
}
