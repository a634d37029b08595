//! Runtime failures raised by identifier lookup.
//!
//! Only [`Accessor::get`](crate::Accessor::get) can fail at runtime; bulk
//! reads and counting are infallible. Unsupported container shapes and
//! unresolved element/identifier equality are rejected at compile time and
//! never show up here.

use thiserror::Error;

/// Outcome of a failed `get(id)`.
///
/// Both variants carry the identifier that was looked up, so the caller can
/// report or retry with context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError<Id> {
    /// No element matched the identifier.
    #[error("no object found for id '{0}'")]
    ObjectNotFound(Id),

    /// More than one element matched the identifier. Keys of associative
    /// containers are unique, so this is only reachable through the linear
    /// scan of a sequential shape; it signals duplicate-equivalent entries
    /// in the underlying data, not an accessor fault.
    #[error("multiple objects found for id '{0}'")]
    MultipleObjectsFound(Id),
}
