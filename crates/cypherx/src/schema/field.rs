use super::{FieldMut, Strategy};
use crate::{Result, Value};

use std::fmt;

/// Descriptor for one exported field of an analyzed record type.
pub struct Field<T> {
    /// Declared field name
    pub(crate) name: &'static str,

    /// External property the field binds to
    pub(crate) property: String,

    /// Resolved assignment strategy
    pub(crate) strategy: Strategy,

    pub(crate) access: fn(&mut T) -> FieldMut<'_>,
}

impl<T> Field<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Copies `value` into this field of `record`.
    pub fn assign(&self, record: &mut T, value: &Value) -> Result<()> {
        self.strategy.assign((self.access)(record), value)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("property", &self.property)
            .field("strategy", &self.strategy)
            .finish()
    }
}
