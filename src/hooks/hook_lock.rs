//! Storage cell for the installed failure handler.
//!
//! Handlers are plain `Copy` function pointers, so readers take a snapshot
//! under a read lock and release it before invoking anything. With the `std`
//! feature the cell is backed by [`std::sync::RwLock`]; without it a
//! [`spin::RwLock`] is used.
//!
//! [`std::sync::RwLock`]: https://doc.rust-lang.org/std/sync/struct.RwLock.html

#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

/// A process-wide slot holding at most one installed hook.
#[repr(transparent)]
pub(crate) struct HookLock<T: 'static + Copy + Send + Sync>(impl_::RwLock<Option<T>>);

impl<T: 'static + Copy + Send + Sync> HookLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    /// Snapshots the installed hook, if any.
    #[inline]
    pub(crate) fn load(&'static self) -> Option<T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        #[cfg(feature = "std")]
        let guard = self.0.read().expect("Unable to acquire hook lock");

        *guard
    }

    /// Replaces the installed hook, returning the previous one.
    #[inline]
    pub(crate) fn replace(&'static self, hook: Option<T>) -> Option<T> {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self.0.write().expect("Unable to acquire hook lock");

        core::mem::replace(&mut *guard, hook)
    }
}
