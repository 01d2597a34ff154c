use super::Error;

/// Error when an operation expects exactly one record but the stream holds
/// none or several.
#[derive(Debug)]
pub(super) struct InvalidRecordCountError {
    context: Option<Box<str>>,
}

impl std::error::Error for InvalidRecordCountError {}

impl core::fmt::Display for InvalidRecordCountError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("invalid record count")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an invalid record count error.
    pub fn invalid_record_count(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecordCount(
            InvalidRecordCountError {
                context: Some(context.into().into()),
            },
        ))
    }

    /// Returns `true` if this error, or any error in its cause chain, is an
    /// invalid record count error.
    pub fn is_invalid_record_count(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidRecordCount(_)))
    }
}
