//! Procedural macros for the uniview accessor system
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[expose]` | inherent impl | Register a container by its accessor signature |
//!
//! ## Example
//!
//! ```ignore
//! struct SignalLog {
//!     signals: Vec<Signal>,
//! }
//!
//! // `fn all(&self) -> &[Signal]` reads as: sequence, by value.
//! #[expose]
//! impl SignalLog {
//!     pub fn all(&self) -> &[Signal] {
//!         &self.signals
//!     }
//! }
//!
//! // Generated: ExposesSequenceByValue<Signal> + Shaped<Signal, _> impls.
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expose;

/// Register a container for uniform access by reading its accessor
/// signature.
///
/// Scans the impl block for a method named `all` or `all_into` matching one
/// of the four supported patterns:
///
/// - `fn all(&self) -> &[T]` (or `-> &Vec<T>`): sequence, by value
/// - `fn all(&self) -> &BTreeMap<K, T>`: mapping, by value
/// - `fn all_into(&self, out: &mut Vec<T>)`: sequence, out-parameter
/// - `fn all_into(&self, out: &mut BTreeMap<K, T>)`: mapping, out-parameter
///
/// and emits the matching capability impl plus the `Shaped` registration.
/// Zero or several matching accessors is a compile error; when a container
/// legitimately offers more than one, pin the shape:
/// `#[expose(sequence_by_value)]`.
#[proc_macro_attribute]
pub fn expose(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as expose::ExposeArgs);
    let item = parse_macro_input!(item as syn::ItemImpl);
    expose::expand(args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
