use super::Error;

/// Error when an operation is invoked for a model that was never registered.
#[derive(Debug)]
pub(super) struct UnregisteredModelError {
    model: Box<str>,
}

impl std::error::Error for UnregisteredModelError {}

impl core::fmt::Display for UnregisteredModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model must be registered first: {}", self.model)
    }
}

impl Error {
    /// Creates an unregistered model error for the named model.
    pub fn unregistered_model(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnregisteredModel(
            UnregisteredModelError {
                model: model.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unregistered model error.
    pub fn is_unregistered_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnregisteredModel(_))
    }
}
