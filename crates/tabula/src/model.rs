use crate::{Record, Result, Value};

/// A record type persisted through a [`Db`](crate::Db).
///
/// Each implementing type is one logical model, keyed in the catalog by its
/// Rust type. Instances are thin wrappers around a [`Record`]; `load` is the
/// factory used to materialize query results.
pub trait Model: Sized + Send + Sync + 'static {
    /// Simple type name. Drives the default table name (`UserAccount` maps to
    /// `user_account`) and error messages.
    const NAME: &'static str;

    /// Build an instance from a row read from the database.
    fn load(record: Record) -> Result<Self>;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// Sets a column value on this instance.
    fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.record_mut().set(column, value);
        self
    }

    fn get(&self, column: &str) -> Option<&Value> {
        self.record().get(column)
    }
}

/// A model sharded over many tables named `prefix + suffix`.
///
/// The registered table name is the shared prefix. Reads discover the live
/// shards by listing tables and keeping those whose suffix matches
/// [`suffix_pattern`](SeqModel::suffix_pattern).
pub trait SeqModel: Model {
    /// Suffix of the newest shard, e.g. `_2025`.
    fn latest_suffix() -> String;

    /// Regular expression every valid suffix matches in full, e.g. `_\d{4}`.
    fn suffix_pattern() -> String;
}

/// Declares record types backed by a [`Record`] and implements [`Model`] for
/// them.
///
/// ```
/// tabula::model! {
///     #[derive(Debug)]
///     pub struct UserAccount;
/// }
///
/// use tabula::Model;
///
/// let mut account = UserAccount::default();
/// account.set("name", "alice");
/// assert_eq!(UserAccount::NAME, "UserAccount");
/// ```
#[macro_export]
macro_rules! model {
    ( $( $( #[$attr:meta] )* $vis:vis struct $name:ident; )+ ) => {
        $(
            $( #[$attr] )*
            #[derive(Clone, Default, PartialEq)]
            $vis struct $name {
                record: $crate::Record,
            }

            impl $crate::Model for $name {
                const NAME: &'static str = stringify!($name);

                fn load(record: $crate::Record) -> $crate::Result<Self> {
                    Ok(Self { record })
                }

                fn record(&self) -> &$crate::Record {
                    &self.record
                }

                fn record_mut(&mut self) -> &mut $crate::Record {
                    &mut self.record
                }
            }
        )+
    };
}
