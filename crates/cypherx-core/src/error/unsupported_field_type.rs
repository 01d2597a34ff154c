use super::Error;

/// Error when a field's declared type has no assignment strategy.
///
/// The resolver reports the offending type; the analyzer wraps the cause with
/// the record type and field that declared it.
#[derive(Debug)]
pub(super) enum UnsupportedFieldTypeError {
    /// No strategy exists for the given type
    Type(Box<str>),

    /// A field could not be mapped; the reason is the error's cause
    Field { record: Box<str>, field: Box<str> },
}

impl std::error::Error for UnsupportedFieldTypeError {}

impl core::fmt::Display for UnsupportedFieldTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "no assignment strategy for type `{ty}`"),
            Self::Field { record, field } => write!(f, "cannot map field `{record}.{field}`"),
        }
    }
}

impl Error {
    /// Creates an error for a type that has no assignment strategy.
    pub fn unsupported_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldType(
            UnsupportedFieldTypeError::Type(ty.into().into()),
        ))
    }

    /// Creates an error naming a field whose strategy could not be resolved.
    ///
    /// Used as context on top of the resolution failure.
    pub fn unsupported_field(record: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldType(
            UnsupportedFieldTypeError::Field {
                record: record.into().into(),
                field: field.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error in its cause chain, is an
    /// unsupported field type error.
    pub fn is_unsupported_field_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedFieldType(_)))
    }
}
