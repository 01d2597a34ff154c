use crate::{
    schema::{DynShape, Shape},
    Record,
};

use std::{
    any::TypeId,
    collections::HashMap,
    fmt,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

/// Concurrency-safe store of analyzed record shapes, keyed by type.
///
/// Lookups take a shared lock. Insertion takes the exclusive lock for the
/// duration of the map update only; analysis itself runs without any lock
/// held. Two threads analyzing the same type at the same time both insert,
/// and the later insert wins. Entries are never evicted.
#[derive(Default)]
pub struct TypeCache {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Record type -> shape
    shapes: HashMap<TypeId, Arc<dyn DynShape>>,

    /// `Vec<T>` -> `T`, for destinations that are sequences of records
    sequences: HashMap<TypeId, TypeId>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide cache.
    pub fn global() -> &'static TypeCache {
        static CACHE: OnceLock<TypeCache> = OnceLock::new();
        CACHE.get_or_init(TypeCache::new)
    }

    /// Returns the cached shape of `T`, if it has been analyzed.
    pub fn get<T: Record>(&self) -> Option<Arc<Shape<T>>> {
        let shape = self.get_dyn(TypeId::of::<T>())?;
        shape.into_any().downcast::<Shape<T>>().ok()
    }

    pub fn contains<T: Record>(&self) -> bool {
        self.read(|inner| inner.shapes.contains_key(&TypeId::of::<T>()))
    }

    /// Number of record types in the cache.
    pub fn len(&self) -> usize {
        self.read(|inner| inner.shapes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get_dyn(&self, id: TypeId) -> Option<Arc<dyn DynShape>> {
        self.read(|inner| inner.shapes.get(&id).cloned())
    }

    /// Returns the element shape for a `Vec<T>` destination type.
    pub(crate) fn get_sequence(&self, id: TypeId) -> Option<Arc<dyn DynShape>> {
        self.read(|inner| {
            let element = inner.sequences.get(&id)?;
            inner.shapes.get(element).cloned()
        })
    }

    pub(crate) fn insert<T: Record>(&self, shape: Arc<Shape<T>>) {
        let id = TypeId::of::<T>();

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = inner.shapes.insert(id, shape).is_some();
        inner.sequences.insert(TypeId::of::<Vec<T>>(), id);
        drop(inner);

        if replaced {
            log::warn!(
                "record type `{}` was analyzed concurrently; replaced cached shape",
                std::any::type_name::<T>()
            );
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Inner) -> R) -> R {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&inner)
    }
}

impl fmt::Debug for TypeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<_> = self.read(|inner| {
            inner
                .shapes
                .values()
                .map(|shape| shape.type_name())
                .collect()
        });
        f.debug_struct("TypeCache").field("types", &types).finish()
    }
}
