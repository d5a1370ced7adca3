//! The shared storage region for one alternative set.
//!
//! This module encapsulates the `storage` field of [`RawSlot`], ensuring it
//! is only visible within this module. The slot itself is deliberately dumb:
//! it does not record which alternative is live. The owning container tracks
//! the live position and discharges the per-operation obligations stated on
//! each method.
//!
//! # Safety Invariant
//!
//! At any moment a [`RawSlot`] is either *empty* (freshly moved out of or
//! torn down) or holds an initialized value of exactly one alternative at
//! offset zero. Which of the two, and which alternative, is the owner's
//! knowledge; every method states its requirement in those terms.
//!
//! [`RawSlot`] has no `Drop` implementation. Dropping a slot that still holds
//! a value leaks it; the owner must call [`RawSlot::drop_live`] first. This
//! mirrors how [`ManuallyDrop`] pushes teardown responsibility outward.
//!
//! [`ManuallyDrop`]: core::mem::ManuallyDrop

use core::{mem::MaybeUninit, ptr::NonNull};

use crate::{SlotVtable, list::AlternativeList};

/// A fixed-size, fixed-alignment storage region holding at most one value
/// out of the alternative set `L`.
///
/// The region is sized for the largest alternative and aligned for the
/// most-aligned one; every alternative is stored at offset zero. See the
/// module docs for the invariant the owner maintains.
pub struct RawSlot<L: AlternativeList> {
    /// The storage region.
    ///
    /// # Safety
    ///
    /// The following invariants are upheld by the owner of this slot:
    ///
    /// 1. The region either is empty or holds an initialized value of exactly
    ///    one alternative of `L`, stored at offset zero.
    /// 2. The owner knows which of the two states holds, and for a non-empty
    ///    slot, which alternative is live.
    storage: MaybeUninit<L::Storage>,
}

impl<L: AlternativeList> RawSlot<L> {
    /// Creates a new slot holding `value`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `V` is one of the alternatives of `L`.
    /// (This is what guarantees the region is large and aligned enough; the
    /// position at which the caller accounts for the value is the caller's
    /// business, as the same type may occur at several positions.)
    #[inline]
    #[must_use]
    pub unsafe fn new<V: 'static>(value: V) -> Self {
        let mut slot = Self {
            storage: MaybeUninit::uninit(),
        };
        // SAFETY: `V` is an alternative of `L` (guaranteed by the caller), so
        // the `#[repr(C)]` union layout guarantees the region is valid for a
        // write of `V` at offset zero.
        unsafe { slot.storage.as_mut_ptr().cast::<V>().write(value) };
        slot
    }

    /// Returns a reference to the live value.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the slot is non-empty and that `V` is the
    /// type of the live alternative.
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked<V: 'static>(&self) -> &V {
        // SAFETY: The slot holds an initialized `V` at offset zero
        // (guaranteed by the caller), and the shared borrow of `self` makes
        // the reference valid for its lifetime.
        unsafe { &*self.storage.as_ptr().cast::<V>() }
    }

    /// Returns a mutable reference to the live value.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the slot is non-empty and that `V` is the
    /// type of the live alternative.
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked_mut<V: 'static>(&mut self) -> &mut V {
        // SAFETY: The slot holds an initialized `V` at offset zero
        // (guaranteed by the caller), and the unique borrow of `self` makes
        // the reference valid and exclusive for its lifetime.
        unsafe { &mut *self.storage.as_mut_ptr().cast::<V>() }
    }

    /// Moves the live value out of the slot, leaving it empty.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The slot is non-empty and `V` is the type of the live alternative.
    /// 2. Ownership of the value transfers to the caller: the slot must be
    ///    treated as empty afterwards, so the value is neither dropped
    ///    through [`RawSlot::drop_live`] nor read again.
    #[inline]
    #[must_use]
    pub unsafe fn read_unchecked<V: 'static>(&self) -> V {
        // SAFETY: The slot holds an initialized `V` at offset zero, and the
        // caller takes over ownership of the value, treating the slot as
        // empty from now on.
        unsafe { self.storage.as_ptr().cast::<V>().read() }
    }

    /// Drops the live value in place, leaving the slot empty.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The slot is non-empty and `index` is the position of the live
    ///    alternative.
    /// 2. The slot is treated as empty afterwards: the value is not dropped
    ///    again and not read again.
    #[inline]
    pub unsafe fn drop_live(&mut self, index: usize) {
        let vtable = Self::vtable(index);
        let ptr = NonNull::from(&mut self.storage).cast::<u8>();
        // SAFETY: `vtable` belongs to the live alternative (position `index`,
        // guaranteed by the caller), the region holds an initialized
        // not-yet-dropped value of that type at offset zero, and the caller
        // treats the slot as empty afterwards.
        unsafe { vtable.drop(ptr) };
    }

    /// Returns the vtable for position `index` of the alternative set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the set.
    #[inline]
    #[must_use]
    pub fn vtable(index: usize) -> &'static SlotVtable {
        L::VTABLES[index]
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_round_trip() {
        // SAFETY: `u64` is an alternative of `(u8, u64)`.
        let slot: RawSlot<(u8, u64)> = unsafe { RawSlot::new(7_u64) };

        // SAFETY: The live alternative is a `u64`.
        assert_eq!(unsafe { slot.get_unchecked::<u64>() }, &7);

        // SAFETY: The live alternative is a `u64`; the value is plain old
        // data, so no teardown is owed afterwards.
        assert_eq!(unsafe { slot.read_unchecked::<u64>() }, 7);
    }

    #[test]
    fn test_mutation_through_slot() {
        // SAFETY: `u8` is an alternative of `(u8, u64)`.
        let mut slot: RawSlot<(u8, u64)> = unsafe { RawSlot::new(1_u8) };

        // SAFETY: The live alternative is a `u8`.
        *unsafe { slot.get_unchecked_mut::<u8>() } = 42;

        // SAFETY: The live alternative is a `u8`.
        assert_eq!(unsafe { slot.get_unchecked::<u8>() }, &42);
    }

    #[test]
    fn test_drop_live_runs_exactly_one_destructor() {
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Bump;
        impl Drop for Bump {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::Relaxed);
            }
        }

        // SAFETY: `Bump` is an alternative of `(u32, Bump)`.
        let mut slot: RawSlot<(u32, Bump)> = unsafe { RawSlot::new(Bump) };
        // SAFETY: Position 1 (`Bump`) is live; the slot is discarded without
        // further access below.
        unsafe { slot.drop_live(1) };

        assert_eq!(DROPS.load(Ordering::Relaxed), 1);

        // Dropping the slot itself must not run the destructor again.
        drop(slot);
        assert_eq!(DROPS.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_send_sync_follow_the_alternatives() {
        static_assertions::assert_impl_all!(RawSlot<(u8, u64)>: Send, Sync);
        static_assertions::assert_not_impl_any!(
            RawSlot<(u8, *const u8)>: Send, Sync
        );
    }
}
