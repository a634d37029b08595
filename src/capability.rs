//! The four canonical container capabilities.
//!
//! A container takes part in uniform access by exposing its contents through
//! exactly one of these traits. Each trait captures one bulk-retrieval
//! pattern found in the wild:
//!
//! | trait                          | container offers                          |
//! |--------------------------------|-------------------------------------------|
//! | [`ExposesSequenceByValue`]     | `fn all(&self) -> &[T]`                   |
//! | [`ExposesSequenceByOutParam`]  | `fn all_into(&self, &mut Vec<T>)`         |
//! | [`ExposesMapByValue`]          | `fn all(&self) -> &BTreeMap<K, T>`        |
//! | [`ExposesMapByOutParam`]       | `fn all_into(&self, &mut BTreeMap<K, T>)` |
//!
//! Implement one by hand, or put `#[expose]` on the container's inherent impl
//! block and let the signature of its `all`/`all_into` method decide.
//!
//! `Vec<T>` and `BTreeMap<K, T>` themselves need none of these: the accessor
//! reads them directly (see [`crate::shape`]).

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// The container hands back its elements as a borrowed sequence.
pub trait ExposesSequenceByValue<T> {
    /// Current contents, in the container's own order.
    fn all(&self) -> &[T];
}

/// The container fills a caller-supplied sequence with its elements.
///
/// Implementations must overwrite `out`, not append to it.
pub trait ExposesSequenceByOutParam<T> {
    /// Write the current contents into `out`.
    fn all_into(&self, out: &mut Vec<T>);
}

/// The container hands back its elements as a borrowed key/value mapping.
pub trait ExposesMapByValue<K, T> {
    /// Current contents, keyed by identifier.
    fn all(&self) -> &BTreeMap<K, T>;
}

/// The container fills a caller-supplied mapping with its elements.
///
/// Implementations must overwrite `out`, not append to it.
pub trait ExposesMapByOutParam<K, T> {
    /// Write the current contents into `out`.
    fn all_into(&self, out: &mut BTreeMap<K, T>);
}
