use crate::{stmt::Type, Error, Record, Result};

use indexmap::IndexMap;

/// Schema facts for one registered model: where it lives and what its
/// columns look like.
///
/// Created once at registration time; the column map is filled from a live
/// "describe columns" query and never changes afterwards.
#[derive(Debug, Clone)]
pub struct TableMeta {
    /// Model name used in error messages
    model: &'static str,

    /// Fixed table name, or the prefix shared by every shard
    name: TableName,

    /// Primary key column name, exactly as the database reports it
    primary_key: String,

    /// Column name to runtime type, in the order the driver returned them
    columns: IndexMap<String, Type>,
}

#[derive(Debug, Clone)]
pub enum TableName {
    /// One physical table
    Fixed(String),

    /// Many physical tables named `prefix + suffix`
    Sequence(Sequence),
}

/// Naming rules for a model sharded over many physical tables.
#[derive(Debug, Clone)]
pub struct Sequence {
    pub prefix: String,

    /// Produces the suffix of the newest shard
    pub latest_suffix: fn() -> String,

    /// Regular expression matching every valid suffix
    pub suffix_pattern: fn() -> String,
}

impl Sequence {
    /// Name of the newest shard.
    pub fn latest_table(&self) -> String {
        format!("{}{}", self.prefix, (self.latest_suffix)())
    }
}

impl TableMeta {
    pub fn new(model: &'static str, name: TableName, primary_key: impl Into<String>) -> Self {
        Self {
            model,
            name,
            primary_key: primary_key.into(),
            columns: IndexMap::new(),
        }
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn name(&self) -> &TableName {
        &self.name
    }

    /// Fixed table name or shard prefix.
    pub fn table_flag(&self) -> &str {
        match &self.name {
            TableName::Fixed(name) => name,
            TableName::Sequence(seq) => &seq.prefix,
        }
    }

    pub fn sequence(&self) -> Option<&Sequence> {
        match &self.name {
            TableName::Sequence(seq) => Some(seq),
            TableName::Fixed(_) => None,
        }
    }

    /// The table introspected at registration: the fixed table, or the newest
    /// shard.
    pub fn introspection_table(&self) -> String {
        match &self.name {
            TableName::Fixed(name) => name.clone(),
            TableName::Sequence(seq) => seq.latest_table(),
        }
    }

    /// Physical table a write of `record` targets.
    ///
    /// Records read from a shard go back to that shard; other sequence
    /// records go to the newest shard.
    pub fn table_for(&self, record: &Record) -> String {
        match &self.name {
            TableName::Fixed(name) => name.clone(),
            TableName::Sequence(seq) => match record.table() {
                Some(table) => table.to_string(),
                None => seq.latest_table(),
            },
        }
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Runtime type of the primary key column.
    ///
    /// Fails when introspection did not report the primary key column, in
    /// which case no key-based operation can run.
    pub fn primary_key_ty(&self) -> Result<Type> {
        self.column_ty(&self.primary_key)
    }

    /// Runtime type of `column`. Names are matched exactly as returned by the
    /// driver.
    pub fn column_ty(&self, column: &str) -> Result<Type> {
        self.columns.get(column).copied().ok_or_else(|| {
            Error::invalid_configuration(format!(
                "column `{}` not found; model={} table={}",
                column,
                self.model,
                self.table_flag()
            ))
        })
    }

    pub fn add_column(&mut self, column: impl Into<String>, ty: Type) {
        self.columns.insert(column.into(), ty);
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, Type)> + '_ {
        self.columns.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}
