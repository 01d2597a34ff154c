mod decl;
pub use decl::FieldDecl;

mod field;
pub use field::Field;

pub(crate) mod name;

mod shape;
pub use shape::{DynShape, Shape};

mod strategy;
pub use strategy::Strategy;

mod ty;
pub use ty::{FieldMut, FieldTy, RecordTy};
