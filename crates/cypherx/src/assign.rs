use crate::{
    schema::{FieldMut, FieldTy},
    Result, Value,
};

/// A Rust type that can be the type of a record field.
///
/// The implementation tells the analyzer which strategy to resolve for the
/// field, and hands out a tagged reference to the field so the strategy can
/// write into it. `#[derive(Record)]` implements this for the record type
/// itself (as a nested record) and `#[derive(Receiver)]` for types that
/// implement [`Receive`].
pub trait Assignable {
    fn field_ty() -> FieldTy;

    fn field_mut(&mut self) -> FieldMut<'_>;
}

/// A field type that interprets external values itself.
///
/// Fields whose type implements `Receive` bypass the built-in kind checks:
/// the raw value is handed over unchanged and the implementation decides
/// what to accept. An error returned here is logged and never fails the
/// scan; the field keeps whatever the implementation left in it.
///
/// ```ignore
/// #[derive(Debug, Default, cypherx::Receiver)]
/// struct Tags(Vec<String>);
///
/// impl Receive for Tags {
///     fn receive(&mut self, value: &Value) -> Result<()> {
///         let Value::String(raw) = value else {
///             bail!("tags must be a comma separated string");
///         };
///         self.0 = raw.split(',').map(str::to_string).collect();
///         Ok(())
///     }
/// }
/// ```
pub trait Receive {
    fn receive(&mut self, value: &Value) -> Result<()>;
}

macro_rules! impl_assignable {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Assignable for $ty {
                fn field_ty() -> FieldTy {
                    FieldTy::$variant
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::$variant(self)
                }
            }
        )*
    };
}

impl_assignable! {
    String => String,
    i64 => I64,
    f64 => F64,
    bool => Bool,
}

// Types without a strategy still get an impl so that a record using them
// fails analysis with the offending type's name.
macro_rules! impl_unsupported {
    ( $( $ty:ty ),* ) => {
        $(
            impl Assignable for $ty {
                fn field_ty() -> FieldTy {
                    FieldTy::Unsupported(stringify!($ty))
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Unsupported
                }
            }
        )*
    };
}

impl_unsupported!(i8, i16, i32, isize, u8, u16, u32, u64, usize, f32, char);

impl<T> Assignable for Vec<T> {
    fn field_ty() -> FieldTy {
        FieldTy::Unsupported(std::any::type_name::<Vec<T>>())
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Unsupported
    }
}

impl<T> Assignable for Option<T>
where
    Option<T>: Receive + 'static,
{
    fn field_ty() -> FieldTy {
        FieldTy::Receiver
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Receiver(self)
    }
}

// Nullable wrappers: `Null` and values that cannot be converted clear the
// field. These receivers never fail.
macro_rules! impl_receive_option {
    ( $( $ty:ty => $convert:ident, )* ) => {
        $(
            impl Receive for Option<$ty> {
                fn receive(&mut self, value: &Value) -> Result<()> {
                    *self = $convert(value);
                    Ok(())
                }
            }
        )*
    };
}

impl_receive_option! {
    String => to_string,
    i64 => to_i64,
    f64 => to_f64,
    bool => to_bool,
}

fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(v) => Some(v.clone()),
        Value::Bool(v) => Some(v.to_string()),
        Value::I32(v) => Some(v.to_string()),
        Value::I64(v) => Some(v.to_string()),
        Value::F32(v) => Some(v.to_string()),
        Value::F64(v) => Some(v.to_string()),
        Value::Null | Value::List(_) | Value::Node(_) => None,
    }
}

fn to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::I64(v) => Some(*v),
        Value::I32(v) => Some(i64::from(*v)),
        Value::String(v) => v.parse().ok(),
        _ => None,
    }
}

fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::F64(v) => Some(*v),
        Value::F32(v) => Some(f64::from(*v)),
        Value::I32(v) => Some(f64::from(*v)),
        Value::I64(v) => Some(*v as f64),
        Value::String(v) => v.parse().ok(),
        _ => None,
    }
}

fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(v) => Some(*v),
        Value::String(v) => v.parse().ok(),
        _ => None,
    }
}
