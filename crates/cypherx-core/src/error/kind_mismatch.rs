use super::Error;
use crate::stmt::Kind;

/// Error when a strategy receives a value of the wrong runtime kind.
#[derive(Debug)]
pub(super) struct KindMismatchError {
    expected: Kind,
    actual: Kind,
}

impl std::error::Error for KindMismatchError {}

impl core::fmt::Display for KindMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "kind mismatch: expected {}, found {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a kind mismatch error.
    pub fn kind_mismatch(expected: Kind, actual: Kind) -> Error {
        Error::from(super::ErrorKind::KindMismatch(KindMismatchError {
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error, or any error in its cause chain, is a
    /// kind mismatch error.
    pub fn is_kind_mismatch(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::KindMismatch(_)))
    }

    /// Returns the `(expected, actual)` kinds of the first kind mismatch in
    /// the cause chain.
    pub fn kind_mismatch_kinds(&self) -> Option<(Kind, Kind)> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::KindMismatch(err) => Some((err.expected, err.actual)),
            _ => None,
        })
    }
}
