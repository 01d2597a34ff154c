use super::Error;
use crate::stmt::Kind;

/// Error when a node value was expected but something else was found.
///
/// Raised by node scans for the first value of each record and by nested
/// record fields.
#[derive(Debug)]
pub(super) struct NotNodeTypeError {
    actual: Kind,
}

impl std::error::Error for NotNodeTypeError {}

impl core::fmt::Display for NotNodeTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "expected a node value, found {}", self.actual)
    }
}

impl Error {
    /// Creates a not-a-node error.
    pub fn not_node_type(actual: Kind) -> Error {
        Error::from(super::ErrorKind::NotNodeType(NotNodeTypeError { actual }))
    }

    /// Returns `true` if this error, or any error in its cause chain, is a
    /// not-a-node error.
    pub fn is_not_node_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NotNodeType(_)))
    }
}
