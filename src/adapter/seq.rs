//! Adapter variants for sequential shapes.
//!
//! Three ways a container can present an ordered sequence of elements:
//! returned by value, written through an out-parameter, or the container is
//! the `Vec` itself. Lookup is the same for all three: a full linear scan
//! with duplicate detection, shared below.

use alloc::vec::Vec;

use super::{Lookup, SnapshotRead};
use crate::capability::{ExposesSequenceByOutParam, ExposesSequenceByValue};
use crate::error::AccessError;
use crate::ident::IdEq;

/// Find the single element answering to `id`.
///
/// The scan does not stop at the first hit: a later duplicate must surface
/// as `MultipleObjectsFound` even when it sits at the far end of the
/// sequence.
pub(crate) fn scan<'a, T, Id>(
    items: impl IntoIterator<Item = &'a T>,
    id: &Id,
) -> Result<&'a T, AccessError<Id>>
where
    T: IdEq<Id> + 'a,
    Id: Clone,
{
    let mut found = None;
    for item in items {
        if item.id_eq(id) {
            if found.is_some() {
                return Err(AccessError::MultipleObjectsFound(id.clone()));
            }
            found = Some(item);
        }
    }
    found.ok_or_else(|| AccessError::ObjectNotFound(id.clone()))
}

// =============================================================================
// Sequence returned by value
// =============================================================================

/// Reads a container exposing `fn all(&self) -> &[T]`.
pub struct SeqValueAdapter<'c, C> {
    container: &'c C,
}

impl<'c, C> SeqValueAdapter<'c, C> {
    pub fn new(container: &'c C) -> Self {
        Self { container }
    }
}

impl<T, C> SnapshotRead<T> for SeqValueAdapter<'_, C>
where
    T: Clone,
    C: ExposesSequenceByValue<T>,
{
    fn count(&self) -> usize {
        self.container.all().len()
    }

    fn all(&self) -> Vec<T> {
        self.container.all().to_vec()
    }

    fn all_into(&self, out: &mut Vec<T>) {
        out.clear();
        out.extend_from_slice(self.container.all());
    }
}

impl<T, Id, C> Lookup<T, Id> for SeqValueAdapter<'_, C>
where
    T: Clone + IdEq<Id>,
    Id: Clone,
    C: ExposesSequenceByValue<T>,
{
    fn get(&self, id: &Id) -> Result<T, AccessError<Id>> {
        scan(self.container.all(), id).cloned()
    }
}

// =============================================================================
// Sequence written through an out-parameter
// =============================================================================

/// Reads a container exposing `fn all_into(&self, &mut Vec<T>)`.
pub struct SeqOutParamAdapter<'c, C> {
    container: &'c C,
}

impl<'c, C> SeqOutParamAdapter<'c, C> {
    pub fn new(container: &'c C) -> Self {
        Self { container }
    }
}

impl<T, C> SnapshotRead<T> for SeqOutParamAdapter<'_, C>
where
    C: ExposesSequenceByOutParam<T>,
{
    fn count(&self) -> usize {
        // No cheaper source of truth than a full retrieval.
        self.all().len()
    }

    fn all(&self) -> Vec<T> {
        let mut out = Vec::new();
        self.container.all_into(&mut out);
        out
    }

    fn all_into(&self, out: &mut Vec<T>) {
        // Clear first so an appending implementation still yields a snapshot.
        out.clear();
        self.container.all_into(out);
    }
}

impl<T, Id, C> Lookup<T, Id> for SeqOutParamAdapter<'_, C>
where
    T: Clone + IdEq<Id>,
    Id: Clone,
    C: ExposesSequenceByOutParam<T>,
{
    fn get(&self, id: &Id) -> Result<T, AccessError<Id>> {
        let snapshot = self.all();
        scan(&snapshot, id).cloned()
    }
}

// =============================================================================
// The container is the sequence
// =============================================================================

/// Reads a bare `Vec<T>`.
pub struct SeqDirectAdapter<'c, T> {
    container: &'c Vec<T>,
}

impl<'c, T> SeqDirectAdapter<'c, T> {
    pub fn new(container: &'c Vec<T>) -> Self {
        Self { container }
    }
}

impl<T> SnapshotRead<T> for SeqDirectAdapter<'_, T>
where
    T: Clone,
{
    fn count(&self) -> usize {
        self.container.len()
    }

    fn all(&self) -> Vec<T> {
        self.container.clone()
    }

    fn all_into(&self, out: &mut Vec<T>) {
        out.clear();
        out.extend_from_slice(self.container);
    }
}

impl<T, Id> Lookup<T, Id> for SeqDirectAdapter<'_, T>
where
    T: Clone + IdEq<Id>,
    Id: Clone,
{
    fn get(&self, id: &Id) -> Result<T, AccessError<Id>> {
        scan(self.container, id).cloned()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::scan;
    use crate::error::AccessError;
    use crate::ident::IdEq;

    #[derive(Debug)]
    struct Tagged(u32);

    impl IdEq<u32> for Tagged {
        fn id_eq(&self, id: &u32) -> bool {
            self.0 == *id
        }
    }

    #[test]
    fn scan_finds_unique_match() {
        let items = [Tagged(1), Tagged(2), Tagged(3)];
        assert!(scan(&items, &2).is_ok());
    }

    #[test]
    fn scan_reports_missing_id() {
        let items = [Tagged(1)];
        assert_eq!(scan(&items, &9).unwrap_err(), AccessError::ObjectNotFound(9));
    }

    #[test]
    fn scan_detects_non_adjacent_duplicate() {
        let items = [Tagged(1), Tagged(2), Tagged(1)];
        assert_eq!(
            scan(&items, &1).unwrap_err(),
            AccessError::MultipleObjectsFound(1)
        );
    }
}
