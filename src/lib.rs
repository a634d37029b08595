#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - probe: inherent-const shape probing on concrete container types

//! # uniview
//!
//! Uniform read-only accessors over heterogeneous collection shapes,
//! selected at compile time.
//!
//! **One generic facade, six container shapes, zero runtime dispatch.**
//!
//! ## Architecture
//!
//! Client code instantiates [`Accessor<T, C, Id>`](Accessor) and gets the
//! same four read operations no matter how `C` presents its contents:
//!
//! ```text
//! Accessor<T, C, Id> -> Shaped (shape marker) -> Select (adapter variant)
//!        |                                             |
//!     count / all / all_into / get          reads through &C, live
//! ```
//!
//! ### 1. Capabilities
//! A container joins by exposing one of four bulk-retrieval patterns:
//! sequence or mapping, returned by value or written through an
//! out-parameter ([`capability`]). Bare `Vec<T>` and `BTreeMap<Id, T>`
//! need nothing: they are read directly.
//!
//! ### 2. Selection
//! [`Shaped`] registers the container's shape marker; [`Select`](dispatch::Select)
//! maps the marker to one of six adapter variants at compile time. Exactly
//! one variant exists per instantiation; coherence forbids a second
//! registration.
//!
//! ### 3. Lookup
//! `get(id)` resolves identifiers: associative shapes use the container's
//! own keyed lookup; sequential shapes scan with a client-supplied equality
//! ([`IdEq`]) and distinguish `ObjectNotFound` from `MultipleObjectsFound`.
//!
//! ### 4. Registration sugar
//! `#[expose]` on a container's inherent impl block reads the signature of
//! its `all`/`all_into` accessor and generates the capability and [`Shaped`]
//! impls. The `exposes!` probe answers shape questions about concrete types
//! without ever failing the build.
//!
//! ## Quick Start
//!
//! ```ignore
//! use uniview::prelude::*;
//!
//! struct SignalLog {
//!     signals: Vec<Signal>,
//! }
//!
//! // Shape is read off the accessor's signature: sequence, by value.
//! #[expose]
//! impl SignalLog {
//!     pub fn all(&self) -> &[Signal] {
//!         &self.signals
//!     }
//! }
//!
//! // Signals answer to string ids.
//! impl IdEq for Signal {
//!     fn id_eq(&self, id: &String) -> bool {
//!         self.name == *id
//!     }
//! }
//!
//! let log = SignalLog { signals: vec![/* ... */] };
//! let view = Accessor::<Signal, SignalLog>::new(&log);
//! let n = view.count();
//! let snapshot = view.all();
//! let sig = view.get(&"heartbeat".to_string())?;
//! ```

// Allow `::uniview` to work inside the crate itself
extern crate self as uniview;

extern crate alloc;

// =============================================================================
// Layer 0: Error taxonomy and equality (no internal dependencies)
// =============================================================================
pub mod error;
pub mod ident;

// =============================================================================
// Layer 1: Capabilities and shape registry
// =============================================================================
pub mod capability;
pub mod shape;

// =============================================================================
// Layer 2: Adapter variants and compile-time selection
// =============================================================================
pub mod adapter;
pub mod dispatch;

// =============================================================================
// Layer 3: Facade
// =============================================================================
pub mod accessor;

// Structural shape probing (concrete types only)
#[cfg(feature = "probe")]
pub mod probe;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use accessor::Accessor;
pub use adapter::{Lookup, SnapshotRead};
pub use capability::{
    ExposesMapByOutParam, ExposesMapByValue, ExposesSequenceByOutParam, ExposesSequenceByValue,
};
pub use dispatch::Select;
pub use error::AccessError;
pub use ident::IdEq;
pub use shape::{
    MapByOutParam, MapByValue, MapDirect, SeqByOutParam, SeqByValue, SeqDirect, Shaped,
};

// Re-export proc-macros
pub use macros::expose;

/// Expansion targets for the crate's macros - DO NOT USE DIRECTLY.
#[doc(hidden)]
pub mod __private {
    pub use alloc::collections::BTreeMap;
    pub use alloc::vec::Vec;
}

/// Common items for uniform container access.
pub mod prelude {
    pub use crate::accessor::Accessor;
    pub use crate::capability::{
        ExposesMapByOutParam, ExposesMapByValue, ExposesSequenceByOutParam,
        ExposesSequenceByValue,
    };
    pub use crate::error::AccessError;
    pub use crate::ident::IdEq;
    pub use crate::shape::Shaped;
    pub use macros::expose;
}
