use std::fmt::Debug;

/// Placeholder substituted with a table name (or shard prefix) in dialect
/// SQL templates.
pub const TABLE_NAME_PLACEHOLDER: &str = "{TABLE_NAME}";

/// Database-flavor-specific SQL for schema introspection.
pub trait Dialect: Debug + Send + Sync + 'static {
    /// Query listing table names. The first column of each row is a table
    /// name; `{TABLE_NAME}` is replaced with a name prefix.
    fn sql_list_tables(&self) -> &str;

    /// Query whose result metadata describes the columns of `{TABLE_NAME}`.
    fn sql_describe_columns(&self) -> &str;

    /// Primary key column used when registration does not name one.
    fn default_primary_key(&self) -> &str;
}

/// Substitutes `table` into a dialect template.
pub fn render(template: &str, table: &str) -> String {
    template.replace(TABLE_NAME_PLACEHOLDER, table)
}
