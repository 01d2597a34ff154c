use crate::{schema::FieldDecl, Properties, Result, Scanner, Value, ValueRecord};

/// A statically declared record type that values can be scanned into.
///
/// Usually implemented with `#[derive(Record)]`. The implementation lists
/// the type's fields in declared order; the analyzer turns that list into a
/// cached [`Shape`](crate::schema::Shape) the first time the type is used.
pub trait Record: Default + Sized + 'static {
    /// Declared fields, in declaration order, including non-exported ones.
    fn fields() -> Vec<FieldDecl<Self>>;

    /// Creates a record from a property bag.
    fn from_properties(properties: &Properties) -> Result<Self> {
        let mut record = Self::default();
        Scanner::global().scan_properties(&mut record, properties)?;
        Ok(record)
    }

    /// Creates a record from a node value.
    fn from_node(value: &Value) -> Result<Self> {
        let mut record = Self::default();
        Scanner::global().scan_node(&mut record, value)?;
        Ok(record)
    }

    /// Creates a record from a positional record, aligned against the
    /// declared field order.
    fn from_values(values: &ValueRecord) -> Result<Self> {
        let mut record = Self::default();
        Scanner::global().scan_values(&mut record, values)?;
        Ok(record)
    }
}
