use super::Error;

/// Error when a model's configuration exists but holds no table metadata for it.
#[derive(Debug)]
pub(super) struct TableNotFoundError {
    model: Box<str>,
}

impl std::error::Error for TableNotFoundError {}

impl core::fmt::Display for TableNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table not found; model={}", self.model)
    }
}

impl Error {
    /// Creates a table not found error for the named model.
    pub fn table_not_found(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TableNotFound(TableNotFoundError {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is a table not found error.
    pub fn is_table_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TableNotFound(_))
    }
}
