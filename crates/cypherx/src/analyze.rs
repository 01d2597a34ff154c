use crate::{
    schema::{name, Field, Shape, Strategy},
    Error, Record, Result, TypeCache,
};

use std::sync::Arc;

/// Returns the shape of `T`, analyzing the type on first use.
///
/// Analysis walks `T`'s declared fields in order, skips non-exported ones,
/// resolves each field's property name and assignment strategy, and inserts
/// the result into `cache`. Later calls are answered from the cache.
///
/// Fails with an empty shape error when `T` has no exported fields, and with
/// an unsupported field type error naming the field when a strategy cannot
/// be resolved.
pub fn analyze<T: Record>(cache: &TypeCache) -> Result<Arc<Shape<T>>> {
    if let Some(shape) = cache.get::<T>() {
        log::trace!("shape cache hit for `{}`", shape.type_name());
        return Ok(shape);
    }

    let shape = Arc::new(analyze_uncached::<T>(cache)?);
    cache.insert(shape.clone());

    log::debug!(
        "analyzed record type `{}`: [{}]",
        shape.type_name(),
        shape.property_names().collect::<Vec<_>>().join(", ")
    );

    Ok(shape)
}

fn analyze_uncached<T: Record>(cache: &TypeCache) -> Result<Shape<T>> {
    let type_name = std::any::type_name::<T>();
    let decls = T::fields();
    let mut fields = Vec::with_capacity(decls.len());

    for decl in decls {
        if !decl.exported {
            log::trace!("skipping non-exported field `{type_name}.{}`", decl.name);
            continue;
        }

        let property = name::property_name(decl.name, decl.tag);
        let strategy = Strategy::resolve(&decl.ty, cache)
            .map_err(|cause| cause.context(Error::unsupported_field(type_name, decl.name)))?;

        fields.push(Field {
            name: decl.name,
            property,
            strategy,
            access: decl.access,
        });
    }

    if fields.is_empty() {
        return Err(Error::empty_shape(type_name));
    }

    Ok(Shape { type_name, fields })
}
