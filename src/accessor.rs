//! The uniform facade.

use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::adapter::{Lookup, SnapshotRead};
use crate::dispatch::Select;
use crate::error::AccessError;
use crate::shape::Shaped;

/// Uniform read-only access over a borrowed container.
///
/// `T` is the element type, `C` the container, `Id` the lookup identifier
/// (a `String` unless said otherwise). Which adapter variant does the actual
/// reading is decided entirely at compile time from `C`'s [`Shaped`]
/// registration; the facade itself only forwards.
///
/// The container is borrowed for the accessor's whole lifetime and is never
/// copied or mutated. Reads take `&self` and hold no internal state, but the
/// usual aliasing rules are the contract: nothing may mutate the container
/// behind the accessor's back (interior-mutability containers must not be
/// written concurrently with a read).
///
/// # Examples
///
/// ```
/// use uniview::Accessor;
///
/// let items: Vec<u32> = vec![10, 20];
/// let view = Accessor::<u32, Vec<u32>>::new(&items);
/// assert_eq!(view.count(), 2);
/// assert_eq!(view.all(), vec![10, 20]);
/// ```
///
/// A container outside the known shapes is rejected at compile time:
///
/// ```compile_fail
/// use uniview::Accessor;
///
/// struct Opaque;
///
/// let opaque = Opaque;
/// let view = Accessor::<u32, Opaque>::new(&opaque);
/// ```
///
/// So is sequential lookup without an equality between element and
/// identifier: `count` and `all` stay usable, `get` does not compile:
///
/// ```compile_fail
/// use uniview::Accessor;
///
/// #[derive(Clone)]
/// struct Reading(u32);
///
/// let items: Vec<Reading> = vec![Reading(1)];
/// let view = Accessor::<Reading, Vec<Reading>>::new(&items);
/// let _ = view.count(); // fine
/// let _ = view.get(&"1".to_string()); // no `IdEq<String>` for `Reading`
/// ```
pub struct Accessor<'c, T, C, Id = String> {
    container: &'c C,
    _access: PhantomData<(T, Id)>,
}

impl<'c, T, C, Id> Accessor<'c, T, C, Id>
where
    C: Shaped<T, Id>,
    C::Shape: Select<T, C, Id>,
{
    /// Build the accessor around a container reference.
    pub fn new(container: &'c C) -> Self {
        Self {
            container,
            _access: PhantomData,
        }
    }

    #[inline(always)]
    fn adapter(&self) -> <C::Shape as Select<T, C, Id>>::Adapter<'c> {
        <C::Shape as Select<T, C, Id>>::select(self.container)
    }

    /// Number of elements currently in the container.
    pub fn count(&self) -> usize {
        self.adapter().count()
    }

    /// Owned snapshot of the container's current contents.
    ///
    /// Derived from the live container on every call; associative shapes
    /// yield values in ascending key order.
    pub fn all(&self) -> Vec<T> {
        self.adapter().all()
    }

    /// Write a snapshot into `out`, replacing its previous contents.
    pub fn all_into(&self, out: &mut Vec<T>) {
        self.adapter().all_into(out)
    }

    /// The single element matching `id`.
    ///
    /// Sequential shapes scan the whole snapshot and report an ambiguous
    /// match as [`AccessError::MultipleObjectsFound`]; associative shapes
    /// resolve the key directly and can only fail with
    /// [`AccessError::ObjectNotFound`].
    pub fn get(&self, id: &Id) -> Result<T, AccessError<Id>>
    where
        <C::Shape as Select<T, C, Id>>::Adapter<'c>: Lookup<T, Id>,
    {
        self.adapter().get(id)
    }
}
