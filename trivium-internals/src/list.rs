//! Compile-time descriptions of closed alternative sets.
//!
//! An alternative set is written as a tuple type: `(u32, String)` is the set
//! whose position `0` is `u32` and whose position `1` is `String`. For every
//! supported arity (one through eight) this module generates:
//!
//! - a `#[repr(C)]` union of [`ManuallyDrop`] fields, one per position, which
//!   serves purely as a layout: its size and alignment are those of the
//!   largest and most-aligned alternative, and every alternative lives at
//!   offset zero;
//! - an [`AlternativeList`] implementation tying the tuple to that union and
//!   to one [`SlotVtable`] per position;
//! - a [`CloneAlternatives`] implementation (when every alternative is
//!   `Clone`) that clones whichever position is live;
//! - [`TypeAt`] implementations mapping each position back to its type.
//!
//! The same type may appear at more than one position. Position lookups
//! therefore go through [`candidate_positions`], which reports *every*
//! position holding a given type, never just the first.

use core::{
    any::TypeId,
    mem::{ManuallyDrop, MaybeUninit},
};

use crate::{RawSlot, SlotVtable};

/// A closed, ordered set of alternative types sharing one storage region.
///
/// Implemented for tuples of arity one through eight. The order of the tuple
/// elements is significant: it defines the positional indices that
/// discriminants are validated against.
///
/// # Safety
///
/// Implementations must guarantee all of the following, which the unsafe code
/// in this crate relies on:
///
/// 1. `LEN` is the number of alternatives.
/// 2. `VTABLES` has length `LEN`, and `VTABLES[i]` was created via
///    [`SlotVtable::new`] for the `i`-th alternative type.
/// 3. `Storage` is a `#[repr(C)]` union with one [`ManuallyDrop`] field per
///    alternative, so that every alternative can be stored at offset zero of
///    a `MaybeUninit<Storage>` region.
pub unsafe trait AlternativeList: Sized + 'static {
    /// Number of alternatives in the set.
    const LEN: usize;

    /// Shared storage layout: sized and aligned for the largest alternative.
    type Storage;

    /// One vtable per position, in declaration order.
    const VTABLES: &'static [&'static SlotVtable];
}

/// Positional type lookup: the type at position `I` of the list.
///
/// `(A, B)` implements `TypeAt<0, Type = A>` and `TypeAt<1, Type = B>`.
///
/// # Safety
///
/// Implementations must guarantee that `Type` is exactly the `I`-th
/// alternative of the list, matching `AlternativeList::VTABLES[I]`.
pub unsafe trait TypeAt<const I: usize>: AlternativeList {
    /// The alternative type at position `I`.
    type Type: 'static;
}

/// Position-indexed clone dispatch for lists whose alternatives are all
/// `Clone`.
///
/// # Safety
///
/// Implementations must clone the alternative at the given position and
/// return a slot in which that same position is live.
pub unsafe trait CloneAlternatives: AlternativeList {
    /// Clones the alternative at position `index` of `slot` into a fresh
    /// slot.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < Self::LEN` and that the
    /// alternative at position `index` is the one currently live in `slot`.
    unsafe fn clone_slot(slot: &RawSlot<Self>, index: usize) -> RawSlot<Self>;
}

/// Returns whether position `index` of the list `L` holds exactly the type
/// `V`.
///
/// Out-of-range positions never match.
#[must_use]
pub fn position_matches<L: AlternativeList, V: 'static>(index: usize) -> bool {
    L::VTABLES
        .get(index)
        .is_some_and(|vtable| vtable.type_id() == TypeId::of::<V>())
}

/// Iterates over every position of the list `L` that holds exactly the type
/// `V`.
///
/// A type may occur at several positions, which is precisely why writers must
/// name a position rather than letting the value's type imply one.
pub fn candidate_positions<L: AlternativeList, V: 'static>() -> impl Iterator<Item = usize> {
    L::VTABLES
        .iter()
        .enumerate()
        .filter(|(_, vtable)| vtable.type_id() == TypeId::of::<V>())
        .map(|(index, _)| index)
}

/// Generates the storage union, [`AlternativeList`] impl and
/// [`CloneAlternatives`] impl for one tuple arity.
macro_rules! alternative_list {
    ($storage:ident, $len:expr, $(($idx:tt, $field:ident, $ty:ident)),+ $(,)?) => {
        #[doc = concat!("Shared storage layout for ", stringify!($len), " alternatives.")]
        ///
        /// This union is never constructed or read as a value; it exists so
        /// that `MaybeUninit<Self>` has the size and alignment of the largest
        /// alternative, with every alternative at offset zero.
        #[repr(C)]
        #[allow(dead_code)]
        pub union $storage<$($ty),+> {
            $(
                #[doc = concat!("Alternative at position ", stringify!($idx), ".")]
                $field: ManuallyDrop<$ty>,
            )+
        }

        // SAFETY: `LEN` counts the tuple elements, `VTABLES` is built from
        // `SlotVtable::new` per element in declaration order, and `$storage`
        // is a `#[repr(C)]` union of `ManuallyDrop` fields, one per element.
        unsafe impl<$($ty: 'static),+> AlternativeList for ($($ty,)+) {
            const LEN: usize = $len;
            type Storage = $storage<$($ty),+>;
            const VTABLES: &'static [&'static SlotVtable] =
                &[$(SlotVtable::new::<$ty>()),+];
        }

        // SAFETY: Each match arm clones the alternative at its own position
        // and writes the clone into a fresh slot, leaving that position live.
        unsafe impl<$($ty: Clone + 'static),+> CloneAlternatives for ($($ty,)+) {
            unsafe fn clone_slot(slot: &RawSlot<Self>, index: usize) -> RawSlot<Self> {
                match index {
                    $(
                        $idx => {
                            // SAFETY: The caller guarantees that position
                            // `index` is live, and this arm only runs when
                            // `index == $idx`, whose type is `$ty`.
                            let value = unsafe { slot.get_unchecked::<$ty>() }.clone();
                            // SAFETY: `$ty` is the alternative of this list
                            // at position `$idx`.
                            unsafe { RawSlot::new(value) }
                        }
                    )+
                    // The caller guarantees `index < Self::LEN`.
                    _ => unreachable!(),
                }
            }
        }
    };
}

/// Generates one positional [`TypeAt`] impl.
macro_rules! type_at {
    ($idx:tt => $target:ident in ($($ty:ident),+)) => {
        // SAFETY: `$target` names the tuple element at position `$idx`, the
        // same element `alternative_list!` paired with `VTABLES[$idx]`.
        unsafe impl<$($ty: 'static),+> TypeAt<$idx> for ($($ty,)+) {
            type Type = $target;
        }
    };
}

alternative_list!(Storage1, 1, (0, a0, T0));
alternative_list!(Storage2, 2, (0, a0, T0), (1, a1, T1));
alternative_list!(Storage3, 3, (0, a0, T0), (1, a1, T1), (2, a2, T2));
alternative_list!(Storage4, 4, (0, a0, T0), (1, a1, T1), (2, a2, T2), (3, a3, T3));
alternative_list!(
    Storage5,
    5,
    (0, a0, T0),
    (1, a1, T1),
    (2, a2, T2),
    (3, a3, T3),
    (4, a4, T4)
);
alternative_list!(
    Storage6,
    6,
    (0, a0, T0),
    (1, a1, T1),
    (2, a2, T2),
    (3, a3, T3),
    (4, a4, T4),
    (5, a5, T5)
);
alternative_list!(
    Storage7,
    7,
    (0, a0, T0),
    (1, a1, T1),
    (2, a2, T2),
    (3, a3, T3),
    (4, a4, T4),
    (5, a5, T5),
    (6, a6, T6)
);
alternative_list!(
    Storage8,
    8,
    (0, a0, T0),
    (1, a1, T1),
    (2, a2, T2),
    (3, a3, T3),
    (4, a4, T4),
    (5, a5, T5),
    (6, a6, T6),
    (7, a7, T7)
);

type_at!(0 => T0 in (T0));

type_at!(0 => T0 in (T0, T1));
type_at!(1 => T1 in (T0, T1));

type_at!(0 => T0 in (T0, T1, T2));
type_at!(1 => T1 in (T0, T1, T2));
type_at!(2 => T2 in (T0, T1, T2));

type_at!(0 => T0 in (T0, T1, T2, T3));
type_at!(1 => T1 in (T0, T1, T2, T3));
type_at!(2 => T2 in (T0, T1, T2, T3));
type_at!(3 => T3 in (T0, T1, T2, T3));

type_at!(0 => T0 in (T0, T1, T2, T3, T4));
type_at!(1 => T1 in (T0, T1, T2, T3, T4));
type_at!(2 => T2 in (T0, T1, T2, T3, T4));
type_at!(3 => T3 in (T0, T1, T2, T3, T4));
type_at!(4 => T4 in (T0, T1, T2, T3, T4));

type_at!(0 => T0 in (T0, T1, T2, T3, T4, T5));
type_at!(1 => T1 in (T0, T1, T2, T3, T4, T5));
type_at!(2 => T2 in (T0, T1, T2, T3, T4, T5));
type_at!(3 => T3 in (T0, T1, T2, T3, T4, T5));
type_at!(4 => T4 in (T0, T1, T2, T3, T4, T5));
type_at!(5 => T5 in (T0, T1, T2, T3, T4, T5));

type_at!(0 => T0 in (T0, T1, T2, T3, T4, T5, T6));
type_at!(1 => T1 in (T0, T1, T2, T3, T4, T5, T6));
type_at!(2 => T2 in (T0, T1, T2, T3, T4, T5, T6));
type_at!(3 => T3 in (T0, T1, T2, T3, T4, T5, T6));
type_at!(4 => T4 in (T0, T1, T2, T3, T4, T5, T6));
type_at!(5 => T5 in (T0, T1, T2, T3, T4, T5, T6));
type_at!(6 => T6 in (T0, T1, T2, T3, T4, T5, T6));

type_at!(0 => T0 in (T0, T1, T2, T3, T4, T5, T6, T7));
type_at!(1 => T1 in (T0, T1, T2, T3, T4, T5, T6, T7));
type_at!(2 => T2 in (T0, T1, T2, T3, T4, T5, T6, T7));
type_at!(3 => T3 in (T0, T1, T2, T3, T4, T5, T6, T7));
type_at!(4 => T4 in (T0, T1, T2, T3, T4, T5, T6, T7));
type_at!(5 => T5 in (T0, T1, T2, T3, T4, T5, T6, T7));
type_at!(6 => T6 in (T0, T1, T2, T3, T4, T5, T6, T7));
type_at!(7 => T7 in (T0, T1, T2, T3, T4, T5, T6, T7));

/// Asserts, at compile time, that `MaybeUninit<L::Storage>` can hold every
/// alternative of `L` at offset zero.
///
/// This is a sanity check used by the storage layer's tests; the property
/// itself follows from the `#[repr(C)]` union layout.
#[must_use]
pub const fn storage_fits<L: AlternativeList, V>() -> bool {
    size_of::<V>() <= size_of::<MaybeUninit<L::Storage>>()
        && align_of::<V>() <= align_of::<MaybeUninit<L::Storage>>()
}
