use crate::{analyze, Receive, Record, Result, TypeCache};

use super::DynShape;

use std::{any::Any, fmt, sync::Arc};

/// The declared value kind of a record field.
///
/// Produced by [`Assignable::field_ty`](crate::Assignable::field_ty) for the
/// field's Rust type, or written by hand in a [`FieldDecl`](super::FieldDecl).
/// The resolver turns it into a [`Strategy`](super::Strategy).
#[derive(Debug, Clone, Copy)]
pub enum FieldTy {
    /// The field type implements [`Receive`] and interprets values itself
    Receiver,

    /// UTF-8 text
    String,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// Boolean
    Bool,

    /// Another record type, populated from a node's properties
    Record(RecordTy),

    /// A type with no assignment strategy; analysis fails on it
    Unsupported(&'static str),
}

/// Handle on a nested record type, used to analyze it on demand.
#[derive(Clone, Copy)]
pub struct RecordTy {
    type_name: &'static str,
    analyze: fn(&TypeCache) -> Result<Arc<dyn DynShape>>,
}

/// A mutable reference to one record field, tagged with its kind.
///
/// Field accessors hand these out so that a resolved strategy can write into
/// the field without knowing the record type.
pub enum FieldMut<'a> {
    Receiver(&'a mut dyn Receive),
    String(&'a mut String),
    I64(&'a mut i64),
    F64(&'a mut f64),
    Bool(&'a mut bool),
    Record(&'a mut dyn Any),
    Unsupported,
}

impl RecordTy {
    pub fn of<T: Record>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            analyze: analyze_dyn::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Analyzes the nested type through `cache`, returning its shape.
    pub(crate) fn analyze(&self, cache: &TypeCache) -> Result<Arc<dyn DynShape>> {
        (self.analyze)(cache)
    }
}

fn analyze_dyn<T: Record>(cache: &TypeCache) -> Result<Arc<dyn DynShape>> {
    let shape: Arc<dyn DynShape> = analyze::<T>(cache)?;
    Ok(shape)
}

impl fmt::Debug for RecordTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordTy").field(&self.type_name).finish()
    }
}

impl FieldMut<'_> {
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Receiver(_) => "receiver",
            Self::String(_) => "String",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::Bool(_) => "bool",
            Self::Record(_) => "record",
            Self::Unsupported => "unsupported",
        }
    }
}
