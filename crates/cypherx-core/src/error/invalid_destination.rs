use super::Error;

/// Error when a scan destination cannot receive the mapped values.
///
/// This occurs when:
/// - The destination is absent (`None` passed to a dynamic entry point)
/// - The destination's type was never registered as a record type
/// - A batch scan receives something other than a sequence of records
/// - A field accessor hands out a reference that does not match the field's
///   declared kind
#[derive(Debug)]
pub(super) struct InvalidDestinationError {
    message: Box<str>,
}

impl std::error::Error for InvalidDestinationError {}

impl core::fmt::Display for InvalidDestinationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid destination: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid destination error.
    pub fn invalid_destination(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDestination(
            InvalidDestinationError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error in its cause chain, is an
    /// invalid destination error.
    pub fn is_invalid_destination(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidDestination(_)))
    }
}
