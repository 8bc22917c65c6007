use super::Error;

/// Error when an insert succeeds but the driver reports no generated key.
#[derive(Debug)]
pub(super) struct MissingGeneratedKeyError {
    table: Box<str>,
}

impl std::error::Error for MissingGeneratedKeyError {}

impl core::fmt::Display for MissingGeneratedKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "generated primary key not received; table={}", self.table)
    }
}

impl Error {
    /// Creates a missing generated key error for an insert into `table`.
    pub fn missing_generated_key(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingGeneratedKey(
            MissingGeneratedKeyError {
                table: table.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing generated key error.
    pub fn is_missing_generated_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingGeneratedKey(_))
    }
}
