use super::{FieldMut, FieldTy};

use std::fmt;

/// The declaration of one record field, as written by the record type.
///
/// `#[derive(Record)]` emits one declaration per struct field. Records can
/// also be declared by hand:
///
/// ```ignore
/// impl Record for Person {
///     fn fields() -> Vec<FieldDecl<Self>> {
///         vec![
///             FieldDecl::new("Name", FieldTy::String, |p: &mut Self| FieldMut::String(&mut p.name)),
///             FieldDecl::new("Deleted", FieldTy::Bool, |p: &mut Self| FieldMut::Bool(&mut p.deleted))
///                 .tag("del"),
///         ]
///     }
/// }
/// ```
pub struct FieldDecl<T> {
    /// Declared field name
    pub(crate) name: &'static str,

    /// Raw tag: `name` or `name,<options>`
    pub(crate) tag: Option<&'static str>,

    /// Non-exported fields are skipped by the analyzer
    pub(crate) exported: bool,

    /// Declared value kind
    pub(crate) ty: FieldTy,

    /// Returns a reference to the field within a record
    pub(crate) access: fn(&mut T) -> FieldMut<'_>,
}

impl<T> FieldDecl<T> {
    /// Declares an exported field.
    pub fn new(name: &'static str, ty: FieldTy, access: fn(&mut T) -> FieldMut<'_>) -> Self {
        Self {
            name,
            tag: None,
            exported: true,
            ty,
            access,
        }
    }

    /// Declares a field that is part of the type but not mapped.
    pub fn private(name: &'static str, ty: FieldTy, access: fn(&mut T) -> FieldMut<'_>) -> Self {
        Self {
            exported: false,
            ..Self::new(name, ty, access)
        }
    }

    /// Sets the property tag. The first `,`-separated segment, when not
    /// empty, overrides the property name derived from the field name.
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn ty(&self) -> &FieldTy {
        &self.ty
    }
}

impl<T> fmt::Debug for FieldDecl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDecl")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("exported", &self.exported)
            .field("ty", &self.ty)
            .finish()
    }
}
