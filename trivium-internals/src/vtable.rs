//! Vtable for operations on a single alternative of a storage slot.
//!
//! This module contains the [`SlotVtable`], which enables identifying and
//! dropping the value in a [`RawSlot`] when its concrete type is only known
//! as a position in an alternative list. The vtable stores function pointers
//! that dispatch to the correct typed implementations.
//!
//! This module encapsulates the fields of [`SlotVtable`] so they cannot be
//! accessed directly. This visibility restriction guarantees the safety
//! invariant: **the vtable's function pointers always agree with the type the
//! vtable was created for**.
//!
//! # Safety Invariant
//!
//! This invariant is maintained because vtables are created as `&'static`
//! references via [`SlotVtable::new`], which pairs the function pointers with
//! a specific type `T` at compile time.
//!
//! [`RawSlot`]: crate::RawSlot

use core::{any::TypeId, ptr::NonNull};

/// Vtable for a single alternative type of a storage slot.
///
/// Contains function pointers for identifying and tearing down a value
/// without knowing its concrete type at the call site.
///
/// # Safety Invariant
///
/// The `drop` field is guaranteed to point to the function defined below
/// instantiated with the type `T` that was used to create this [`SlotVtable`],
/// and `type_id`/`type_name` report that same `T`.
#[derive(Clone, Copy)]
pub struct SlotVtable {
    /// Gets the [`TypeId`] of the type that was used to create this
    /// [`SlotVtable`].
    type_id: fn() -> TypeId,
    /// Gets the [`core::any::type_name`] of the type that was used to create
    /// this [`SlotVtable`].
    type_name: fn() -> &'static str,
    /// Drops the value of type `T` stored at the pointed-to address.
    drop: unsafe fn(NonNull<u8>),
}

impl SlotVtable {
    /// Creates a new [`SlotVtable`] for the type `T`.
    #[must_use]
    pub const fn new<T: 'static>() -> &'static Self {
        const {
            &Self {
                type_id: TypeId::of::<T>,
                type_name: core::any::type_name::<T>,
                drop: drop_slot::<T>,
            }
        }
    }

    /// Gets the [`TypeId`] of the type that was used to create this
    /// [`SlotVtable`].
    #[inline]
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Gets the [`core::any::type_name`] of the type that was used to create
    /// this [`SlotVtable`].
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Drops the value stored at `ptr` in place.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to an initialized value of the type `T` that was used
    ///    to create this [`SlotVtable`], and is valid for reads and writes of
    ///    that type.
    /// 2. This method drops the pointed-to value, so the caller must ensure
    ///    that the value has not previously been dropped or moved out, and
    ///    that it will not be accessed again afterwards.
    #[inline]
    pub(crate) unsafe fn drop(&self, ptr: NonNull<u8>) {
        // SAFETY: We know that `self.drop` points to the function
        // `drop_slot::<T>` below. That function's safety requirements are
        // upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        unsafe { (self.drop)(ptr) }
    }
}

/// Drops the value of type `T` stored at the pointed-to address.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `ptr` points to an initialized value of type `T` and is valid for reads
///    and writes of that type.
/// 2. This function drops the pointed-to value, so the caller must ensure
///    that the value has not previously been dropped or moved out, and that
///    it will not be accessed again afterwards.
unsafe fn drop_slot<T>(ptr: NonNull<u8>) {
    let ptr: *mut T = ptr.cast::<T>().as_ptr();
    // SAFETY: The pointer refers to an initialized, not-yet-dropped `T` as
    // guaranteed by the caller, and ownership of the value is transferred to
    // us here.
    unsafe { ptr.drop_in_place() }
}
