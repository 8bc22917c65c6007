use super::Error;

/// Error when a model is registered but the configuration it points at is
/// not part of the catalog.
#[derive(Debug)]
pub(super) struct DataSourceNotFoundError {
    model: Box<str>,
}

impl std::error::Error for DataSourceNotFoundError {}

impl core::fmt::Display for DataSourceNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "data source not found; model={}", self.model)
    }
}

impl Error {
    /// Creates a data source not found error for the named model.
    pub fn data_source_not_found(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DataSourceNotFound(
            DataSourceNotFoundError {
                model: model.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a data source not found error.
    pub fn is_data_source_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DataSourceNotFound(_))
    }
}
