use super::Error;

/// Error when a positional record does not have one value per field.
#[derive(Debug)]
pub(super) struct LengthMismatchError {
    expected: usize,
    actual: usize,
}

impl std::error::Error for LengthMismatchError {}

impl core::fmt::Display for LengthMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "length mismatch: record type declares {} fields, found {} values",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::LengthMismatch(LengthMismatchError {
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error, or any error in its cause chain, is a
    /// length mismatch error.
    pub fn is_length_mismatch(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::LengthMismatch(_)))
    }
}
