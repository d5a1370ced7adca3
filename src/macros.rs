/// Declare an index-aligned discriminant enum.
///
/// The generated enum is a plain fieldless enum whose variants are numbered
/// from zero in declaration order, together with a [`Discriminant`]
/// implementation mapping each variant to its position. Aligning the variant
/// order with the alternative list of a [`TaggedUnion`] is the caller's
/// responsibility — the discriminant is positional, and the runtime
/// validation of every write exists precisely because nothing else ties the
/// two declarations together.
///
/// [`Discriminant`]: crate::Discriminant
/// [`TaggedUnion`]: crate::TaggedUnion
///
/// # Examples
///
/// ```
/// use trivium::prelude::*;
///
/// tags! {
///     /// Alternatives of a configuration value.
///     pub enum ConfigTag {
///         Flag,
///         Count,
///         Name,
///     }
/// }
///
/// type ConfigValue = TaggedUnion<ConfigTag, (bool, u64, &'static str)>;
///
/// let value = ConfigValue::new(ConfigTag::Count, 3_u64);
/// assert_eq!(value.get::<{ ConfigTag::Count as usize }>(), &3);
/// ```
#[macro_export]
macro_rules! tags {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_attr:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(usize)]
        $vis enum $name {
            $($(#[$variant_attr])* $variant),+
        }

        impl $crate::Discriminant for $name {
            #[inline]
            fn index(self) -> usize {
                self as usize
            }
        }
    };
}

/// Checks a caller-facing contract, routing the failure through the
/// installed failure handler.
///
/// The message arguments are only evaluated on the failure path.
macro_rules! contract {
    ($cond:expr, $($message:tt)+) => {
        if !$cond {
            $crate::hooks::fail(::core::format_args!($($message)+));
        }
    };
}
