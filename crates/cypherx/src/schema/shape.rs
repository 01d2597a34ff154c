use super::Field;
use crate::{err, Error, Properties, Record, Result, Value};

use std::{any::Any, fmt, sync::Arc};

/// The analyzed shape of a record type: its field descriptors in declared
/// order, with non-exported fields removed.
///
/// Positional records are aligned against this order.
pub struct Shape<T> {
    pub(crate) type_name: &'static str,
    pub(crate) fields: Vec<Field<T>>,
}

/// A [`Shape`] with its record type erased.
///
/// Nested record strategies and the dynamic scanner entry points go through
/// this trait. Destinations are checked by downcasting.
pub trait DynShape: Send + Sync + 'static {
    fn type_name(&self) -> &'static str;

    fn property_names(&self) -> Vec<String>;

    /// Scans `properties` into `dest`, which must be the shape's record type.
    fn scan_properties_dyn(&self, dest: &mut dyn Any, properties: &Properties) -> Result<()>;

    /// Scans positional `values` into `dest`, which must be the shape's
    /// record type.
    fn scan_values_dyn(&self, dest: &mut dyn Any, values: &[Value]) -> Result<()>;

    /// Scans `properties` into a new record appended to `dest`, which must be
    /// a `Vec` of the shape's record type.
    fn push_properties_dyn(&self, dest: &mut dyn Any, properties: &Properties) -> Result<()>;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Record> Shape<T> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the descriptor bound to `property`.
    pub fn field(&self, property: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|field| field.property == property)
    }

    pub fn property_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.fields.iter().map(|field| field.property())
    }

    /// Copies every property that has a descriptor into `dest`, in declared
    /// field order. Fields without a matching property are left untouched.
    pub fn scan_properties(&self, dest: &mut T, properties: &Properties) -> Result<()> {
        for field in &self.fields {
            let Some(value) = properties.get(&field.property) else {
                continue;
            };

            field
                .assign(dest, value)
                .map_err(|cause| cause.context(self.field_context(field)))?;
        }

        Ok(())
    }

    /// Copies `values[i]` into the field of descriptor `i`.
    pub fn scan_values(&self, dest: &mut T, values: &[Value]) -> Result<()> {
        if values.len() != self.fields.len() {
            return Err(Error::length_mismatch(self.fields.len(), values.len())
                .context(err!("scanning values into `{}`", self.type_name)));
        }

        for (field, value) in self.fields.iter().zip(values) {
            field
                .assign(dest, value)
                .map_err(|cause| cause.context(self.field_context(field)))?;
        }

        Ok(())
    }

    fn field_context(&self, field: &Field<T>) -> Error {
        err!(
            "field `{}.{}` (property `{}`)",
            self.type_name,
            field.name,
            field.property
        )
    }

    fn downcast<'a, D: 'static>(&self, dest: &'a mut dyn Any) -> Result<&'a mut D> {
        dest.downcast_mut::<D>().ok_or_else(|| {
            Error::invalid_destination(format!(
                "expected `{}`",
                std::any::type_name::<D>()
            ))
        })
    }
}

impl<T: Record> DynShape for Shape<T> {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn property_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.property.clone()).collect()
    }

    fn scan_properties_dyn(&self, dest: &mut dyn Any, properties: &Properties) -> Result<()> {
        let dest = self.downcast::<T>(dest)?;
        self.scan_properties(dest, properties)
    }

    fn scan_values_dyn(&self, dest: &mut dyn Any, values: &[Value]) -> Result<()> {
        let dest = self.downcast::<T>(dest)?;
        self.scan_values(dest, values)
    }

    fn push_properties_dyn(&self, dest: &mut dyn Any, properties: &Properties) -> Result<()> {
        let dest = self.downcast::<Vec<T>>(dest)?;
        let mut record = T::default();
        self.scan_properties(&mut record, properties)?;
        dest.push(record);
        Ok(())
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl<T> fmt::Debug for Shape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}
