//! Compile-time variant selection.
//!
//! [`Select`] is implemented by each shape marker and maps an
//! `(element, container, identifier)` instantiation to the one adapter
//! variant that reads it. The facade resolves
//! `<C::Shape as Select<T, C, Id>>::Adapter` and never names a concrete
//! adapter, so client code stays shape-agnostic. Pure type selection; the
//! only runtime work is copying the container reference into the adapter.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::adapter::{
    MapDirectAdapter, MapOutParamAdapter, MapValueAdapter, SeqDirectAdapter, SeqOutParamAdapter,
    SeqValueAdapter, SnapshotRead,
};
use crate::capability::{
    ExposesMapByOutParam, ExposesMapByValue, ExposesSequenceByOutParam, ExposesSequenceByValue,
};
use crate::shape::{MapByOutParam, MapByValue, MapDirect, SeqByOutParam, SeqByValue, SeqDirect};

/// Maps a shape marker to the adapter variant reading container `C`.
pub trait Select<T, C, Id> {
    /// The adapter borrowing the container for `'c`.
    type Adapter<'c>: SnapshotRead<T>
    where
        C: 'c;

    /// Wrap the container in its adapter.
    fn select(container: &C) -> Self::Adapter<'_>;
}

impl<T, C, Id> Select<T, C, Id> for SeqByValue
where
    T: Clone,
    C: ExposesSequenceByValue<T>,
{
    type Adapter<'c>
        = SeqValueAdapter<'c, C>
    where
        C: 'c;

    #[inline(always)]
    fn select(container: &C) -> Self::Adapter<'_> {
        SeqValueAdapter::new(container)
    }
}

impl<T, C, Id> Select<T, C, Id> for SeqByOutParam
where
    C: ExposesSequenceByOutParam<T>,
{
    type Adapter<'c>
        = SeqOutParamAdapter<'c, C>
    where
        C: 'c;

    #[inline(always)]
    fn select(container: &C) -> Self::Adapter<'_> {
        SeqOutParamAdapter::new(container)
    }
}

impl<T, Id> Select<T, Vec<T>, Id> for SeqDirect
where
    T: Clone,
{
    type Adapter<'c>
        = SeqDirectAdapter<'c, T>
    where
        Vec<T>: 'c;

    #[inline(always)]
    fn select(container: &Vec<T>) -> Self::Adapter<'_> {
        SeqDirectAdapter::new(container)
    }
}

impl<T, C, Id> Select<T, C, Id> for MapByValue
where
    T: Clone,
    Id: Ord,
    C: ExposesMapByValue<Id, T>,
{
    type Adapter<'c>
        = MapValueAdapter<'c, Id, C>
    where
        C: 'c;

    #[inline(always)]
    fn select(container: &C) -> Self::Adapter<'_> {
        MapValueAdapter::new(container)
    }
}

impl<T, C, Id> Select<T, C, Id> for MapByOutParam
where
    Id: Ord,
    C: ExposesMapByOutParam<Id, T>,
{
    type Adapter<'c>
        = MapOutParamAdapter<'c, Id, C>
    where
        C: 'c;

    #[inline(always)]
    fn select(container: &C) -> Self::Adapter<'_> {
        MapOutParamAdapter::new(container)
    }
}

impl<T, Id> Select<T, BTreeMap<Id, T>, Id> for MapDirect
where
    T: Clone,
    Id: Ord,
{
    type Adapter<'c>
        = MapDirectAdapter<'c, Id, T>
    where
        BTreeMap<Id, T>: 'c;

    #[inline(always)]
    fn select(container: &BTreeMap<Id, T>) -> Self::Adapter<'_> {
        MapDirectAdapter::new(container)
    }
}
