use super::Error;

/// Error when a record type offered for analysis has no exported fields.
#[derive(Debug)]
pub(super) struct EmptyShapeError {
    type_name: Box<str>,
}

impl std::error::Error for EmptyShapeError {}

impl core::fmt::Display for EmptyShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "record type `{}` has no exported fields",
            self.type_name
        )
    }
}

impl Error {
    /// Creates an empty shape error for the named record type.
    pub fn empty_shape(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyShape(EmptyShapeError {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error in its cause chain, is an
    /// empty shape error.
    pub fn is_empty_shape(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::EmptyShape(_)))
    }
}
