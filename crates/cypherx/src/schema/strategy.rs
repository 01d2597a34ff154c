use super::{DynShape, FieldMut, FieldTy};
use crate::{Error, Kind, Result, TypeCache, Value};

use std::{fmt, sync::Arc};

/// The resolved rule for copying one external value into one field.
///
/// Strategies are resolved once, when a record type is analyzed, and stored
/// on the field descriptor. Scalar strategies check the value's kind exactly
/// and never convert between kinds.
#[derive(Clone)]
pub enum Strategy {
    /// Hands the value to the field's [`Receive`](crate::Receive)
    /// implementation without checking its kind. Never fails the scan: a
    /// receiver error is logged and the field keeps whatever the receiver
    /// left in it.
    Receiver,

    /// Expects [`Value::String`]
    String,

    /// Expects [`Value::I64`]
    I64,

    /// Expects [`Value::F64`]
    F64,

    /// Expects [`Value::Bool`]
    Bool,

    /// Expects [`Value::Node`] and scans its properties with the nested
    /// record's shape
    Record(Arc<dyn DynShape>),
}

impl Strategy {
    /// Resolves the strategy for a declared field kind.
    ///
    /// Nested record types are analyzed through `cache`, so each of them is
    /// cached on its own.
    pub fn resolve(ty: &FieldTy, cache: &TypeCache) -> Result<Strategy> {
        Ok(match ty {
            FieldTy::Receiver => Strategy::Receiver,
            FieldTy::String => Strategy::String,
            FieldTy::I64 => Strategy::I64,
            FieldTy::F64 => Strategy::F64,
            FieldTy::Bool => Strategy::Bool,
            FieldTy::Record(record) => Strategy::Record(record.analyze(cache)?),
            FieldTy::Unsupported(ty) => return Err(Error::unsupported_type(*ty)),
        })
    }

    /// The value kind this strategy accepts, or `None` for receivers, which
    /// accept anything.
    pub fn expected_kind(&self) -> Option<Kind> {
        match self {
            Strategy::Receiver => None,
            Strategy::String => Some(Kind::String),
            Strategy::I64 => Some(Kind::I64),
            Strategy::F64 => Some(Kind::F64),
            Strategy::Bool => Some(Kind::Bool),
            Strategy::Record(_) => Some(Kind::Node),
        }
    }

    /// Copies `value` into `field`.
    pub fn assign(&self, field: FieldMut<'_>, value: &Value) -> Result<()> {
        match (self, field) {
            (Strategy::Receiver, FieldMut::Receiver(receiver)) => {
                if let Err(err) = receiver.receive(value) {
                    log::warn!("receiver ignored {:?} value: {err}", value.kind());
                }
                Ok(())
            }
            (Strategy::String, FieldMut::String(field)) => match value {
                Value::String(v) => {
                    field.clone_from(v);
                    Ok(())
                }
                _ => Err(Error::kind_mismatch(Kind::String, value.kind())),
            },
            (Strategy::I64, FieldMut::I64(field)) => match value {
                Value::I64(v) => {
                    *field = *v;
                    Ok(())
                }
                _ => Err(Error::kind_mismatch(Kind::I64, value.kind())),
            },
            (Strategy::F64, FieldMut::F64(field)) => match value {
                Value::F64(v) => {
                    *field = *v;
                    Ok(())
                }
                _ => Err(Error::kind_mismatch(Kind::F64, value.kind())),
            },
            (Strategy::Bool, FieldMut::Bool(field)) => match value {
                Value::Bool(v) => {
                    *field = *v;
                    Ok(())
                }
                _ => Err(Error::kind_mismatch(Kind::Bool, value.kind())),
            },
            (Strategy::Record(shape), FieldMut::Record(field)) => {
                let node = value.to_node()?;
                shape.scan_properties_dyn(field, &node.properties)
            }
            (strategy, field) => Err(Error::invalid_destination(format!(
                "field accessor returned a {} reference for the {strategy:?} strategy",
                field.describe()
            ))),
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Receiver => f.write_str("Receiver"),
            Strategy::String => f.write_str("String"),
            Strategy::I64 => f.write_str("I64"),
            Strategy::F64 => f.write_str("F64"),
            Strategy::Bool => f.write_str("Bool"),
            Strategy::Record(shape) => f.debug_tuple("Record").field(&shape.type_name()).finish(),
        }
    }
}
