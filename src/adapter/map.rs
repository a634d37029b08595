//! Adapter variants for associative shapes.
//!
//! Keys are unique, so lookup is the container's own keyed search and can
//! never be ambiguous. Snapshots flatten the mapping to its values in
//! ascending key order. Where the mapping itself is reachable without
//! materializing (by-value and direct variants), `count` reads its size
//! directly instead of building a snapshot.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::marker::PhantomData;

use super::{Lookup, SnapshotRead};
use crate::capability::{ExposesMapByOutParam, ExposesMapByValue};
use crate::error::AccessError;

// =============================================================================
// Mapping returned by value
// =============================================================================

/// Reads a container exposing `fn all(&self) -> &BTreeMap<K, T>`.
pub struct MapValueAdapter<'c, K, C> {
    container: &'c C,
    _key: PhantomData<K>,
}

impl<'c, K, C> MapValueAdapter<'c, K, C> {
    pub fn new(container: &'c C) -> Self {
        Self {
            container,
            _key: PhantomData,
        }
    }
}

impl<K, T, C> SnapshotRead<T> for MapValueAdapter<'_, K, C>
where
    K: Ord,
    T: Clone,
    C: ExposesMapByValue<K, T>,
{
    fn count(&self) -> usize {
        self.container.all().len()
    }

    fn all(&self) -> Vec<T> {
        self.container.all().values().cloned().collect()
    }

    fn all_into(&self, out: &mut Vec<T>) {
        out.clear();
        out.extend(self.container.all().values().cloned());
    }
}

impl<K, T, C> Lookup<T, K> for MapValueAdapter<'_, K, C>
where
    K: Ord + Clone,
    T: Clone,
    C: ExposesMapByValue<K, T>,
{
    fn get(&self, id: &K) -> Result<T, AccessError<K>> {
        self.container
            .all()
            .get(id)
            .cloned()
            .ok_or_else(|| AccessError::ObjectNotFound(id.clone()))
    }
}

// =============================================================================
// Mapping written through an out-parameter
// =============================================================================

/// Reads a container exposing `fn all_into(&self, &mut BTreeMap<K, T>)`.
pub struct MapOutParamAdapter<'c, K, C> {
    container: &'c C,
    _key: PhantomData<K>,
}

impl<'c, K, C> MapOutParamAdapter<'c, K, C> {
    pub fn new(container: &'c C) -> Self {
        Self {
            container,
            _key: PhantomData,
        }
    }

    fn snapshot<T>(&self) -> BTreeMap<K, T>
    where
        K: Ord,
        C: ExposesMapByOutParam<K, T>,
    {
        let mut map = BTreeMap::new();
        self.container.all_into(&mut map);
        map
    }
}

impl<K, T, C> SnapshotRead<T> for MapOutParamAdapter<'_, K, C>
where
    K: Ord,
    C: ExposesMapByOutParam<K, T>,
{
    fn count(&self) -> usize {
        self.snapshot::<T>().len()
    }

    fn all(&self) -> Vec<T> {
        self.snapshot().into_values().collect()
    }

    fn all_into(&self, out: &mut Vec<T>) {
        out.clear();
        out.extend(self.snapshot().into_values());
    }
}

impl<K, T, C> Lookup<T, K> for MapOutParamAdapter<'_, K, C>
where
    K: Ord + Clone,
    C: ExposesMapByOutParam<K, T>,
{
    fn get(&self, id: &K) -> Result<T, AccessError<K>> {
        // The snapshot is owned; take the value out instead of cloning.
        self.snapshot()
            .remove(id)
            .ok_or_else(|| AccessError::ObjectNotFound(id.clone()))
    }
}

// =============================================================================
// The container is the mapping
// =============================================================================

/// Reads a bare `BTreeMap<K, T>`.
pub struct MapDirectAdapter<'c, K, T> {
    container: &'c BTreeMap<K, T>,
}

impl<'c, K, T> MapDirectAdapter<'c, K, T> {
    pub fn new(container: &'c BTreeMap<K, T>) -> Self {
        Self { container }
    }
}

impl<K, T> SnapshotRead<T> for MapDirectAdapter<'_, K, T>
where
    K: Ord,
    T: Clone,
{
    fn count(&self) -> usize {
        self.container.len()
    }

    fn all(&self) -> Vec<T> {
        self.container.values().cloned().collect()
    }

    fn all_into(&self, out: &mut Vec<T>) {
        out.clear();
        out.extend(self.container.values().cloned());
    }
}

impl<K, T> Lookup<T, K> for MapDirectAdapter<'_, K, T>
where
    K: Ord + Clone,
    T: Clone,
{
    fn get(&self, id: &K) -> Result<T, AccessError<K>> {
        self.container
            .get(id)
            .cloned()
            .ok_or_else(|| AccessError::ObjectNotFound(id.clone()))
    }
}
