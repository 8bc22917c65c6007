mod name;
pub use name::table_name_for;

mod table;
pub use table::{Sequence, TableMeta, TableName};
