use tabula_core::Dialect;

/// Built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Mysql,
    Postgresql,
    Sqlite,
}

impl Dialect for Flavor {
    fn sql_list_tables(&self) -> &str {
        match self {
            Flavor::Mysql => "show tables like '{TABLE_NAME}%'",
            Flavor::Postgresql => {
                "select table_name from information_schema.tables \
                 where table_schema = current_schema() and table_name like '{TABLE_NAME}%'"
            }
            Flavor::Sqlite => {
                "select name from sqlite_master where type = 'table' and name like '{TABLE_NAME}%'"
            }
        }
    }

    fn sql_describe_columns(&self) -> &str {
        "select * from {TABLE_NAME} where 1 = 0"
    }

    fn default_primary_key(&self) -> &str {
        "id"
    }
}
