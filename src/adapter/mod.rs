//! The uniform read contract and its six variants.
//!
//! An adapter wraps a borrowed container and reads it through one specific
//! strategy. All variants share [`SnapshotRead`]; variants that can resolve
//! identifiers additionally implement [`Lookup`]. The split keeps lookup a
//! separate capability: a sequential container whose elements have no
//! identifier equality still counts and snapshots normally.
//!
//! Adapters never own, cache or mutate the wrapped container. Every snapshot
//! is derived from the live container at call time, so contents changed
//! between calls are always reflected.

use alloc::vec::Vec;

use crate::error::AccessError;

pub mod map;
pub mod seq;

pub use map::{MapDirectAdapter, MapOutParamAdapter, MapValueAdapter};
pub use seq::{SeqDirectAdapter, SeqOutParamAdapter, SeqValueAdapter};

/// Read access every adapter variant provides. Infallible.
pub trait SnapshotRead<T> {
    /// Number of elements currently in the container.
    ///
    /// Variants that can see the container's own size report it directly;
    /// the others derive it from a snapshot.
    fn count(&self) -> usize;

    /// Owned snapshot of the current contents.
    ///
    /// Associative variants yield values in ascending key order.
    fn all(&self) -> Vec<T>;

    /// Write a snapshot into `out`, replacing its previous contents.
    fn all_into(&self, out: &mut Vec<T>) {
        out.clear();
        out.extend(self.all());
    }
}

/// Identifier lookup, for variants that can resolve one.
///
/// Sequential variants scan the snapshot with [`IdEq`](crate::IdEq);
/// associative variants use the container's own keyed lookup.
#[diagnostic::on_unimplemented(
    message = "lookup by identifier is not available for this accessor",
    label = "`get` cannot be compiled for this container/identifier pairing",
    note = "for sequential shapes the element type must implement `IdEq<Id>`; for associative shapes the identifier must be the container's key type"
)]
pub trait Lookup<T, Id>: SnapshotRead<T> {
    /// The single element matching `id`.
    ///
    /// Fails with [`AccessError::ObjectNotFound`] when nothing matches and
    /// [`AccessError::MultipleObjectsFound`] when the match is ambiguous.
    fn get(&self, id: &Id) -> Result<T, AccessError<Id>>;
}
