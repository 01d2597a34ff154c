use crate::{
    analyze, err,
    schema::{DynShape, Shape},
    Error, Properties, Record, Result, TypeCache, Value, ValueRecord,
};

use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// Copies values from property bags, nodes and positional records into
/// record types.
///
/// A scanner borrows the [`TypeCache`] its shapes are read from and keeps no
/// other state, so it is cheap to create and can be shared between threads.
/// Every entry point analyzes the destination type on first use.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    cache: &'a TypeCache,
}

impl<'a> Scanner<'a> {
    pub fn new(cache: &'a TypeCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &'a TypeCache {
        self.cache
    }

    /// Returns the shape of `T`, analyzing it if needed.
    pub fn analyze<T: Record>(&self) -> Result<Arc<Shape<T>>> {
        analyze::<T>(self.cache)
    }

    /// Analyzes `T` so that the dynamic entry points accept it, and `Vec<T>`
    /// for the batch ones.
    pub fn register<T: Record>(&self) -> Result<()> {
        self.analyze::<T>().map(drop)
    }

    /// Copies each property that names an exported field of `T` into `dest`.
    ///
    /// Properties with no matching field are ignored and fields with no
    /// matching property keep their current value. On error, fields before
    /// the failing one have already been written.
    pub fn scan_properties<T: Record>(&self, dest: &mut T, properties: &Properties) -> Result<()> {
        self.analyze::<T>()?.scan_properties(dest, properties)
    }

    /// Scans the properties of a node value into `dest`.
    pub fn scan_node<T: Record>(&self, dest: &mut T, value: &Value) -> Result<()> {
        let shape = self.analyze::<T>()?;
        shape.scan_properties(dest, value.to_node()?.properties())
    }

    /// Copies `record[i]` into the `i`-th exported field of `T`.
    ///
    /// The record must have exactly one value per exported field.
    pub fn scan_values<T: Record>(&self, dest: &mut T, record: &ValueRecord) -> Result<()> {
        self.analyze::<T>()?.scan_values(dest, record)
    }

    /// Appends one `T` per record of `stream` to `dest`, in stream order.
    ///
    /// The first value of each record must be a node. `T` is analyzed before
    /// the stream is read. On error, records appended before the failing one
    /// stay in `dest`.
    pub fn scan_nodes<T, I>(&self, dest: &mut Vec<T>, stream: I) -> Result<()>
    where
        T: Record,
        I: IntoIterator<Item = Result<ValueRecord>>,
    {
        let shape = self.analyze::<T>()?;

        for (i, record) in stream.into_iter().enumerate() {
            let record = record?;
            let properties = first_node(&record)
                .map_err(|cause| cause.context(err!("record #{i}")))?
                .properties();

            let mut item = T::default();
            shape
                .scan_properties(&mut item, properties)
                .map_err(|cause| cause.context(err!("record #{i}")))?;
            dest.push(item);

            log::trace!("scanned record #{i} into `{}`", shape.type_name());
        }

        Ok(())
    }

    /// Appends one `T` per positional record of `stream` to `dest`.
    pub fn scan_records<T, I>(&self, dest: &mut Vec<T>, stream: I) -> Result<()>
    where
        T: Record,
        I: IntoIterator<Item = Result<ValueRecord>>,
    {
        let shape = self.analyze::<T>()?;

        for (i, record) in stream.into_iter().enumerate() {
            let record = record?;

            let mut item = T::default();
            shape
                .scan_values(&mut item, &record)
                .map_err(|cause| cause.context(err!("record #{i}")))?;
            dest.push(item);

            log::trace!("scanned record #{i} into `{}`", shape.type_name());
        }

        Ok(())
    }

    /// Scans a stream that must hold exactly one record, whose first value
    /// is a node.
    pub fn scan_single_node<T, I>(&self, dest: &mut T, stream: I) -> Result<()>
    where
        T: Record,
        I: IntoIterator<Item = Result<ValueRecord>>,
    {
        let shape = self.analyze::<T>()?;
        let mut stream = stream.into_iter();

        let Some(record) = stream.next().transpose()? else {
            return Err(Error::invalid_record_count("expected 1 record, found 0"));
        };

        // Stream errors win over the record count
        if stream.next().transpose()?.is_some() {
            let mut found = 2;
            for record in stream {
                record?;
                found += 1;
            }

            return Err(Error::invalid_record_count(format!(
                "expected 1 record, found {found}"
            )));
        }

        shape.scan_properties(dest, first_node(&record)?.properties())
    }

    /// Scans `properties` into a destination whose type is only known at
    /// runtime. The type must have been registered with this scanner's
    /// cache.
    pub fn scan_any_properties(
        &self,
        dest: Option<&mut dyn Any>,
        properties: &Properties,
    ) -> Result<()> {
        let dest = not_null(dest)?;
        let shape = self.record_shape(type_id_of(dest))?;
        shape.scan_properties_dyn(dest, properties)
    }

    /// Positional counterpart of [`scan_any_properties`](Self::scan_any_properties).
    pub fn scan_any_values(&self, dest: Option<&mut dyn Any>, record: &ValueRecord) -> Result<()> {
        let dest = not_null(dest)?;
        let shape = self.record_shape(type_id_of(dest))?;
        shape.scan_values_dyn(dest, record)
    }

    /// Batch counterpart of [`scan_any_properties`](Self::scan_any_properties).
    /// `dest` must be a `Vec` of a registered record type.
    pub fn scan_any_nodes<I>(&self, dest: Option<&mut dyn Any>, stream: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<ValueRecord>>,
    {
        let dest = not_null(dest)?;
        let id = type_id_of(dest);

        let Some(shape) = self.cache.get_sequence(id) else {
            return Err(match self.cache.get_dyn(id) {
                Some(shape) => Error::invalid_destination(format!(
                    "expected a `Vec` of records, found record type `{}`",
                    shape.type_name()
                )),
                None => unregistered(),
            });
        };

        for (i, record) in stream.into_iter().enumerate() {
            let record = record?;
            let properties = first_node(&record)
                .map_err(|cause| cause.context(err!("record #{i}")))?
                .properties();

            shape
                .push_properties_dyn(dest, properties)
                .map_err(|cause| cause.context(err!("record #{i}")))?;
        }

        Ok(())
    }

    /// Returns the property names of a registered record type, or of the
    /// element type when `dest` is a `Vec` of records.
    pub fn describe_any(&self, dest: Option<&dyn Any>) -> Result<Vec<String>> {
        let Some(dest) = dest else {
            return Err(null_destination());
        };
        let id = type_id_of(dest);

        let shape = self
            .cache
            .get_dyn(id)
            .or_else(|| self.cache.get_sequence(id))
            .ok_or_else(unregistered)?;

        Ok(shape.property_names())
    }

    fn record_shape(&self, id: TypeId) -> Result<Arc<dyn DynShape>> {
        if let Some(shape) = self.cache.get_dyn(id) {
            return Ok(shape);
        }

        Err(match self.cache.get_sequence(id) {
            Some(shape) => Error::invalid_destination(format!(
                "expected a record, found a `Vec` of `{}`",
                shape.type_name()
            )),
            None => unregistered(),
        })
    }
}

impl Scanner<'static> {
    /// Returns a scanner over the process-wide cache.
    pub fn global() -> Self {
        Scanner::new(TypeCache::global())
    }
}

fn first_node(record: &ValueRecord) -> Result<&crate::Node> {
    match record.value_at(0) {
        Some(value) => value.to_node(),
        None => Err(Error::not_node_type(crate::Kind::Null)),
    }
}

fn type_id_of(dest: &dyn Any) -> TypeId {
    <dyn Any as Any>::type_id(dest)
}

fn not_null(dest: Option<&mut dyn Any>) -> Result<&mut dyn Any> {
    dest.ok_or_else(null_destination)
}

fn null_destination() -> Error {
    Error::invalid_destination("destination is null")
}

fn unregistered() -> Error {
    Error::invalid_destination("type is not a registered record")
}
