//! The discriminant-checked tagged union.

use core::{any::type_name, fmt, mem};

use trivium_internals::{
    RawSlot,
    list::{AlternativeList, CloneAlternatives, TypeAt, candidate_positions, position_matches},
};

use crate::Discriminant;

/// A value holding exactly one out of a closed list of alternative types,
/// selected by an externally supplied positional discriminant.
///
/// The alternative list `L` is a tuple type of up to eight elements; its
/// element order defines the positions. Storage is a single region sized and
/// aligned for the largest alternative — no allocation, no indirection. The
/// discriminant type `D` is any [`Discriminant`]: an unsigned integer, or an
/// enum declared with [`tags!`](crate::tags).
///
/// # The discriminant is positional
///
/// A write never infers the position from the value's type, because the same
/// type may legitimately appear at several positions (two `u32` alternatives
/// meaning different things, say). Instead, every write states a position and
/// [`validate`](Self::validate) checks that the named position really holds
/// the written type. A mismatch is a contract violation reported through the
/// [failure hook](crate::hooks) before any storage is touched.
///
/// # Teardown
///
/// Exactly the live alternative is dropped, wherever the union goes out of
/// scope. [`assign`](Self::assign) drops the outgoing alternative exactly
/// once per overwrite, and [`into_alternative`](Self::into_alternative)
/// moves the payload out without dropping it. The drop-accounting tests in
/// `tests/tagged_union.rs` pin this down with an instrumented payload type.
///
/// # Examples
///
/// ```
/// use trivium::prelude::*;
///
/// tags! {
///     /// Positions of the `Text` alternatives.
///     pub enum TextTag {
///         U32,
///         Str,
///     }
/// }
///
/// type Text = TaggedUnion<TextTag, (u32, String)>;
///
/// let mut text = Text::new(TextTag::Str, String::from("lmao"));
/// assert_eq!(text.get::<{ TextTag::Str as usize }>(), "lmao");
///
/// text.assign(TextTag::U32, 7_u32);
/// assert_eq!(text.get::<{ TextTag::U32 as usize }>(), &7);
/// ```
///
/// [`Discriminant`]: crate::Discriminant
pub struct TaggedUnion<D: Discriminant, L: AlternativeList> {
    /// The shared storage region. The alternative at `self.index` is live.
    slot: RawSlot<L>,
    /// The discriminant as supplied by the caller.
    discriminant: D,
    /// The index captured from `discriminant` at the last validated write.
    ///
    /// All unsafe storage access keys off this field, never off a fresh
    /// `discriminant.index()` call: `Discriminant` is a caller-implemented
    /// trait, and an impl that answers inconsistently must not be able to
    /// desynchronize the live position from the storage.
    index: usize,
}

impl<D: Discriminant, L: AlternativeList> TaggedUnion<D, L> {
    /// Creates a union holding `value` at the position named by
    /// `discriminant`.
    ///
    /// # Contract
    ///
    /// `discriminant` must name a position whose alternative type is exactly
    /// `V`; anything else is a contract violation reported through the
    /// [failure hook](crate::hooks).
    ///
    /// # Examples
    ///
    /// ```
    /// use trivium::TaggedUnion;
    ///
    /// // With a plain integer discriminant: position 1 holds the `String`.
    /// let cell: TaggedUnion<u8, (u32, String)> = TaggedUnion::new(1, String::from("text"));
    /// assert_eq!(cell.get::<1>(), "text");
    /// ```
    #[track_caller]
    pub fn new<V: 'static>(discriminant: D, value: V) -> Self {
        let index = checked_index::<D, L, V>(discriminant);
        // SAFETY: `checked_index` verified that `V` is the alternative of
        // `L` at `index`.
        let slot = unsafe { RawSlot::new(value) };
        Self {
            slot,
            discriminant,
            index,
        }
    }

    /// Replaces the live alternative with `value` at the position named by
    /// `discriminant`.
    ///
    /// The outgoing alternative is dropped exactly once. The incoming value
    /// is written to a detached region first and the regions are swapped, so
    /// even a panicking destructor cannot leave the union pointing at a dead
    /// alternative.
    ///
    /// # Contract
    ///
    /// Same as [`new`](Self::new).
    #[track_caller]
    pub fn assign<V: 'static>(&mut self, discriminant: D, value: V) {
        let index = checked_index::<D, L, V>(discriminant);
        // SAFETY: `checked_index` verified that `V` is the alternative of
        // `L` at `index`.
        let mut outgoing = unsafe { RawSlot::new(value) };
        mem::swap(&mut self.slot, &mut outgoing);
        let outgoing_index = mem::replace(&mut self.index, index);
        self.discriminant = discriminant;
        // SAFETY: After the swap, `outgoing` holds the alternative that this
        // union kept at `outgoing_index`; it is dropped here exactly once and
        // the local goes out of scope without further access.
        unsafe { outgoing.drop_live(outgoing_index) };
    }

    /// Returns whether `discriminant` names a position holding exactly the
    /// type `V`.
    ///
    /// This is the check every write performs before touching storage,
    /// exposed for callers that want to probe instead of risking a
    /// violation. The search visits every position, since `V` may occur at
    /// more than one.
    #[must_use]
    pub fn validate<V: 'static>(discriminant: D) -> bool {
        let index = discriminant.index();
        candidate_positions::<L, V>().any(|position| position == index)
    }

    /// Returns a reference to the alternative at position `I`.
    ///
    /// The position is a compile-time constant, so the return type is the
    /// concrete alternative type — no downcasting involved. With a
    /// [`tags!`](crate::tags) enum, write `get::<{ Tag::Variant as usize }>()`.
    ///
    /// # Contract
    ///
    /// Position `I` must be the live one; reading any other position is a
    /// contract violation reported through the
    /// [failure hook](crate::hooks).
    #[track_caller]
    #[must_use]
    pub fn get<const I: usize>(&self) -> &<L as TypeAt<I>>::Type
    where
        L: TypeAt<I>,
    {
        self.check_live::<I>();
        // SAFETY: Position `self.index == I` is live, and `TypeAt`
        // guarantees its type is `<L as TypeAt<I>>::Type`.
        unsafe { self.slot.get_unchecked::<<L as TypeAt<I>>::Type>() }
    }

    /// Returns a mutable reference to the alternative at position `I`.
    ///
    /// # Contract
    ///
    /// Same as [`get`](Self::get).
    #[track_caller]
    #[must_use]
    pub fn get_mut<const I: usize>(&mut self) -> &mut <L as TypeAt<I>>::Type
    where
        L: TypeAt<I>,
    {
        self.check_live::<I>();
        // SAFETY: Position `self.index == I` is live, and `TypeAt`
        // guarantees its type is `<L as TypeAt<I>>::Type`.
        unsafe { self.slot.get_unchecked_mut::<<L as TypeAt<I>>::Type>() }
    }

    /// Moves the alternative at position `I` out of the union.
    ///
    /// The union is consumed; nothing is dropped here or later for the
    /// moved-out payload, so ownership transfers exactly once.
    ///
    /// # Contract
    ///
    /// Same as [`get`](Self::get).
    #[track_caller]
    #[must_use]
    pub fn into_alternative<const I: usize>(self) -> <L as TypeAt<I>>::Type
    where
        L: TypeAt<I>,
    {
        self.check_live::<I>();
        // SAFETY: Position `self.index == I` is live with type
        // `<L as TypeAt<I>>::Type`; `self` is forgotten below, so the
        // payload is neither dropped nor read again through the union.
        let value = unsafe { self.slot.read_unchecked::<<L as TypeAt<I>>::Type>() };
        mem::forget(self);
        value
    }

    /// The discriminant supplied at the last validated write.
    #[inline]
    #[must_use]
    pub fn discriminant(&self) -> D {
        self.discriminant
    }

    /// Reports a contract violation unless position `I` is live.
    #[track_caller]
    fn check_live<const I: usize>(&self) {
        contract!(
            self.index == I,
            "tried to read alternative {I} of a tagged union whose live alternative is {} (`{}`)",
            self.index,
            RawSlot::<L>::vtable(self.index).type_name()
        );
    }
}

impl<D: Discriminant, L: AlternativeList> Drop for TaggedUnion<D, L> {
    fn drop(&mut self) {
        // SAFETY: The alternative at `self.index` is live, and after `drop`
        // the storage is never accessed again.
        unsafe { self.slot.drop_live(self.index) };
    }
}

impl<D: Discriminant, L: CloneAlternatives> Clone for TaggedUnion<D, L> {
    fn clone(&self) -> Self {
        // SAFETY: The alternative at `self.index` is live.
        let slot = unsafe { L::clone_slot(&self.slot, self.index) };
        Self {
            slot,
            discriminant: self.discriminant,
            index: self.index,
        }
    }
}

impl<D, L> fmt::Debug for TaggedUnion<D, L>
where
    D: Discriminant + fmt::Debug,
    L: AlternativeList,
{
    /// Formats the discriminant and the live alternative's type name. The
    /// payload itself is not printed, which keeps the impl free of bounds on
    /// the alternatives.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedUnion")
            .field("discriminant", &self.discriminant)
            .field("alternative", &RawSlot::<L>::vtable(self.index).type_name())
            .finish()
    }
}

/// Captures the discriminant's index once and validates that `V` is the
/// alternative at that position, reporting a violation otherwise.
#[track_caller]
fn checked_index<D: Discriminant, L: AlternativeList, V: 'static>(
    discriminant: D,
) -> usize {
    let index = discriminant.index();
    contract!(
        position_matches::<L, V>(index),
        "discriminant {index} does not select an alternative of type `{}`",
        type_name::<V>()
    );
    index
}
