//! Builders for the CRUD statements the engine issues.
//!
//! All builders are pure: the table name is passed in already resolved, and
//! every value except those in [`in_clause`] is bound through a positional
//! `?` placeholder.

mod delim;
use delim::{Assign, Comma};

mod in_clause;
pub use in_clause::in_clause;

use crate::{BatchStatement, Statement};

use tabula_core::{Record, Value};

use std::iter;

/// `select * from {table} where {primary_key} = ?`
pub fn select_by_primary_key(table: &str, primary_key: &str) -> String {
    format!("select * from {} where {} = ?", table, primary_key)
}

/// `{select} from {table} where {filter}`, used to run one query shape
/// against each shard of a sequence model.
pub fn select_from(select: &str, table: &str, filter: &str) -> String {
    format!("{} from {} where {}", select, table, filter)
}

/// `insert into {table} (c1, c2) values (?, ?)` with the record's values
/// bound in column order.
pub fn insert(table: &str, record: &Record) -> Statement {
    let sql = insert_sql(table, record);
    let params = record.values().cloned().collect();
    Statement::new(sql, params)
}

/// Insert statement for many records at once.
///
/// The column list is taken from the first record. Every record must carry
/// the same set of columns; values are looked up by column name and a column
/// missing from a record binds `NULL`. Returns `None` for an empty slice.
pub fn batch_insert(table: &str, records: &[Record]) -> Option<BatchStatement> {
    let representative = records.first()?;
    let sql = insert_sql(table, representative);

    let rows = records
        .iter()
        .map(|record| {
            representative
                .columns()
                .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    Some(BatchStatement { sql, rows })
}

fn insert_sql(table: &str, record: &Record) -> String {
    if record.is_empty() {
        return format!("insert into {} default values", table);
    }

    format!(
        "insert into {} ({}) values ({})",
        table,
        Comma(record.columns()),
        Comma(iter::repeat("?").take(record.len())),
    )
}

/// `update {table} set c1=?, c2=? where {primary_key}=?`
///
/// Every column of the record is written, the primary key included, and the
/// record's current primary key value is bound last. A record without a
/// primary key binds `NULL` there and so matches no row.
pub fn update(table: &str, record: &Record, primary_key: &str) -> Statement {
    let sql = format!(
        "update {} set {} where {}=?",
        table,
        Comma(record.columns().map(Assign)),
        primary_key
    );

    let mut params: Vec<Value> = record.values().cloned().collect();
    params.push(record.get(primary_key).cloned().unwrap_or(Value::Null));

    Statement::new(sql, params)
}

/// `delete from {table} where {primary_key}=?`
pub fn delete_by_primary_key(table: &str, primary_key: &str) -> String {
    format!("delete from {} where {}=?", table, primary_key)
}
