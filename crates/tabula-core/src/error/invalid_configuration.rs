use super::Error;

/// Error when registration or configuration input is unusable.
///
/// This occurs when:
/// - A configuration id is blank
/// - A model is registered twice
/// - Column introspection fails (table missing, data source unreachable)
/// - A sequence model declares an empty or malformed suffix pattern
/// - A referenced column is not part of the introspected table
///
/// These errors are never retried.
#[derive(Debug)]
pub(super) struct InvalidConfiguration {
    message: Box<str>,
}

impl std::error::Error for InvalidConfiguration {}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(
            InvalidConfiguration {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConfiguration(_))
    }
}
