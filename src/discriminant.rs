//! The discriminant abstraction for tagged unions.

/// A value that selects one position of an alternative list.
///
/// The reported index is zero-based and positional: `0` selects the first
/// alternative, `1` the second, and so on. The unsigned integer primitives
/// implement this trait directly; for a named set of positions, declare an
/// enum with the [`tags!`](crate::tags) macro, which keeps the variant order
/// and the indices in lockstep.
///
/// Nothing about this trait is trusted: a `TaggedUnion` captures the index
/// once per operation and validates it against the alternative list before
/// any storage is touched, so an inconsistent `index` implementation can
/// provoke contract violations but never unsoundness.
pub trait Discriminant: Copy {
    /// The zero-based position this discriminant selects.
    #[must_use]
    fn index(self) -> usize;
}

/// Implements [`Discriminant`] for the unsigned integer primitives that
/// widen losslessly into `usize`.
macro_rules! primitive_discriminant {
    ($($ty:ty),+) => {
        $(
            impl Discriminant for $ty {
                #[inline]
                fn index(self) -> usize {
                    self as usize
                }
            }
        )+
    };
}

primitive_discriminant!(u8, u16, u32, usize);
