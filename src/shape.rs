//! Shape markers and the shape registry.
//!
//! Six zero-sized markers name the six adapter variants. [`Shaped`] ties a
//! container type to the one marker that adapts it; the selection is fixed
//! at compile time and trait coherence forbids a second registration for the
//! same container, so exactly one variant ever exists per instantiation.
//!
//! The two `*Direct` rows are pre-registered here: a bare `Vec<T>` or
//! `BTreeMap<Id, T>` *is* the collection and needs no capability trait.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Sequential container exposing `fn all(&self) -> &[T]`.
pub struct SeqByValue;

/// Sequential container exposing `fn all_into(&self, &mut Vec<T>)`.
pub struct SeqByOutParam;

/// The container is a `Vec<T>` itself.
pub struct SeqDirect;

/// Associative container exposing `fn all(&self) -> &BTreeMap<K, T>`.
pub struct MapByValue;

/// Associative container exposing `fn all_into(&self, &mut BTreeMap<K, T>)`.
pub struct MapByOutParam;

/// The container is a `BTreeMap<Id, T>` itself.
pub struct MapDirect;

/// Registers which adapter variant reads a container.
///
/// `T` is the element type and `Id` the lookup identifier. For associative
/// containers `Id` must be the container's own key type; registrations
/// generated by `#[expose]` enforce that by construction.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not expose a supported collection shape for elements of type `{T}`",
    label = "no uniform accessor can be built over `{Self}`",
    note = "implement one of `ExposesSequenceByValue`, `ExposesSequenceByOutParam`, `ExposesMapByValue` or `ExposesMapByOutParam` and register it with `Shaped`, or annotate the container's impl block with `#[expose]`"
)]
pub trait Shaped<T, Id = String> {
    /// The variant marker selected for this container.
    type Shape;
}

impl<T, Id> Shaped<T, Id> for Vec<T> {
    type Shape = SeqDirect;
}

impl<T, Id> Shaped<T, Id> for BTreeMap<Id, T> {
    type Shape = MapDirect;
}
