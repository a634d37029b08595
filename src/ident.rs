//! Element/identifier equality.
//!
//! Lookup over a sequential shape has nothing keyed to search by, so it
//! scans elements and asks each one whether it answers to the identifier.
//! Element and identifier are usually different types (a record vs. a string
//! id), which rules out plain `PartialEq`; the comparison strategy is
//! supplied by implementing [`IdEq`] for the element type.
//!
//! There is deliberately no blanket impl over `PartialEq<Id>`: it would make
//! every custom strategy a coherence conflict. Opting in is one short impl.
//!
//! Associative shapes never consult this trait; the container's own keyed
//! lookup is used instead.

use alloc::string::String;

/// Cross-type equality between an element and a lookup identifier.
///
/// The element is the receiver, the identifier the argument, mirroring how
/// the scan reads: "does this element match that id".
#[diagnostic::on_unimplemented(
    message = "no equality between elements of type `{Self}` and identifiers of type `{Id}`",
    label = "`{Self}` cannot be matched against `{Id}`",
    note = "lookup over a sequential shape scans elements; implement `IdEq<{Id}>` for `{Self}` to enable it"
)]
pub trait IdEq<Id = String> {
    /// True when this element answers to `id`.
    fn id_eq(&self, id: &Id) -> bool;
}
