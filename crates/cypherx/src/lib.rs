//! Maps graph query results onto statically declared record types.
//!
//! A record type describes its fields once, through `#[derive(Record)]` or
//! a hand-written [`Record::fields`] list. The first time a type is scanned
//! its declaration is analyzed into a [`Shape`](schema::Shape), which is
//! cached for the life of the process and reused for every later scan.
//!
//! ```ignore
//! #[derive(Debug, Default, cypherx::Record)]
//! pub struct Person {
//!     pub name: String,
//!     pub age: i64,
//!     #[cypher("del")]
//!     pub deleted: bool,
//! }
//!
//! let person = Person::from_node(&value)?;
//! ```

mod analyze;
pub use analyze::analyze;

mod assign;
pub use assign::{Assignable, Receive};

mod cache;
pub use cache::TypeCache;

mod record;
pub use record::Record;

mod scan;
pub use scan::Scanner;

pub mod schema;

pub use cypherx_core::{
    bail, err,
    stmt::{self, Kind, Node, Properties, Value, ValueRecord, ValueStream},
    Error, Result,
};

pub use cypherx_macros::{Receiver, Record};

/// Scans a property bag into `dest` using the process-wide cache.
///
/// See [`Scanner::scan_properties`].
pub fn scan_properties<T: Record>(dest: &mut T, properties: &Properties) -> Result<()> {
    Scanner::global().scan_properties(dest, properties)
}

/// Scans a node value into `dest` using the process-wide cache.
///
/// See [`Scanner::scan_node`].
pub fn scan_node<T: Record>(dest: &mut T, value: &Value) -> Result<()> {
    Scanner::global().scan_node(dest, value)
}

/// Scans a positional record into `dest` using the process-wide cache.
///
/// See [`Scanner::scan_values`].
pub fn scan_values<T: Record>(dest: &mut T, record: &ValueRecord) -> Result<()> {
    Scanner::global().scan_values(dest, record)
}

/// Appends one record per node in `stream` to `dest` using the process-wide
/// cache.
///
/// See [`Scanner::scan_nodes`].
pub fn scan_nodes<T, I>(dest: &mut Vec<T>, stream: I) -> Result<()>
where
    T: Record,
    I: IntoIterator<Item = Result<ValueRecord>>,
{
    Scanner::global().scan_nodes(dest, stream)
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        assign::{Assignable, Receive},
        record::Record,
        schema::{FieldDecl, FieldMut, FieldTy, RecordTy},
    };
    pub use std::vec::Vec;
}
