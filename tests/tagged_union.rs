//! Behavioral tests for `TaggedUnion`: round trips, discriminant validation,
//! wrong-position access, and teardown accounting across construct / assign /
//! move-out / clone / scope exit.

use std::{cell::Cell, rc::Rc};

use trivium::prelude::*;

tags! {
    /// Positions of the `Text` alternatives.
    enum TextTag {
        U32,
        Str,
    }
}

type Text = TaggedUnion<TextTag, (u32, String)>;

const U32: usize = TextTag::U32 as usize;
const STR: usize = TextTag::Str as usize;

#[test]
fn round_trip_by_position() {
    let number = Text::new(TextTag::U32, 7_u32);
    assert_eq!(number.get::<U32>(), &7);
    assert_eq!(number.discriminant(), TextTag::U32);

    let text = Text::new(TextTag::Str, String::from("lmao"));
    assert_eq!(text.get::<STR>(), "lmao");
}

#[test]
fn integer_discriminants_work_directly() {
    let cell: TaggedUnion<u8, (u32, String)> = TaggedUnion::new(0, 7_u32);
    assert_eq!(cell.get::<0>(), &7);
}

#[test]
fn assign_replaces_the_live_alternative() {
    let mut value = Text::new(TextTag::U32, 7_u32);
    value.assign(TextTag::Str, String::from("seven"));
    assert_eq!(value.get::<STR>(), "seven");
    assert_eq!(value.discriminant(), TextTag::Str);

    value.assign(TextTag::U32, 8_u32);
    assert_eq!(value.get::<U32>(), &8);
}

#[test]
fn get_mut_mutates_in_place() {
    let mut value = Text::new(TextTag::Str, String::from("lm"));
    value.get_mut::<STR>().push_str("ao");
    assert_eq!(value.get::<STR>(), "lmao");
}

#[test]
fn into_alternative_moves_the_payload_out() {
    let value = Text::new(TextTag::Str, String::from("owned"));
    let payload: String = value.into_alternative::<STR>();
    assert_eq!(payload, "owned");
}

#[test]
fn validate_is_positional() {
    assert!(Text::validate::<u32>(TextTag::U32));
    assert!(Text::validate::<String>(TextTag::Str));
    assert!(!Text::validate::<String>(TextTag::U32));
    assert!(!Text::validate::<u32>(TextTag::Str));
    // A type absent from the list matches no position at all.
    assert!(!Text::validate::<i64>(TextTag::U32));
}

#[test]
fn duplicate_types_validate_at_every_occurrence() {
    // Positions 0 and 2 both hold `u32`; either discriminant is valid for a
    // `u32` write, and each names its own slot.
    type Pair = TaggedUnion<u8, (u32, String, u32)>;

    assert!(Pair::validate::<u32>(0));
    assert!(!Pair::validate::<u32>(1));
    assert!(Pair::validate::<u32>(2));

    let first = Pair::new(0, 5_u32);
    let second = Pair::new(2, 5_u32);
    assert_eq!(first.get::<0>(), &5);
    assert_eq!(second.get::<2>(), &5);
}

#[test]
#[should_panic(expected = "does not select an alternative of type")]
fn constructing_with_a_mismatched_discriminant_is_a_contract_violation() {
    // The classic mistake from the original: naming the integer slot while
    // writing a string.
    let _ = Text::new(TextTag::U32, String::from("lmao"));
}

#[test]
#[should_panic(expected = "does not select an alternative of type")]
fn constructing_with_a_foreign_type_is_a_contract_violation() {
    let _ = Text::new(TextTag::U32, 3.5_f64);
}

#[test]
#[should_panic(expected = "does not select an alternative of type")]
fn assigning_with_a_mismatched_discriminant_is_a_contract_violation() {
    let mut value = Text::new(TextTag::U32, 7_u32);
    value.assign(TextTag::Str, 8_u32);
}

#[test]
#[should_panic(expected = "tried to read alternative 1")]
fn reading_the_wrong_position_is_a_contract_violation() {
    let number = Text::new(TextTag::U32, 7_u32);
    let _ = number.get::<STR>();
}

#[test]
#[should_panic(expected = "tried to read alternative 0")]
fn moving_out_the_wrong_position_is_a_contract_violation() {
    let text = Text::new(TextTag::Str, String::from("x"));
    let _ = text.into_alternative::<U32>();
}

#[test]
fn debug_reports_discriminant_and_live_type() {
    let text = Text::new(TextTag::Str, String::from("x"));
    let rendered = format!("{text:?}");
    assert!(rendered.contains("Str"));
    assert!(rendered.contains("String"));
}

/// Payload that counts how many of its instances are alive.
struct Counted(Rc<Cell<i32>>);

impl Counted {
    fn new(live: &Rc<Cell<i32>>) -> Self {
        live.set(live.get() + 1);
        Self(Rc::clone(live))
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        Self::new(&self.0)
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

tags! {
    /// Positions for the teardown-accounting tests.
    enum SlotTag {
        Plain,
        Tracked,
    }
}

type Tracked = TaggedUnion<SlotTag, (u32, Counted)>;

const PLAIN: usize = SlotTag::Plain as usize;
const TRACKED: usize = SlotTag::Tracked as usize;

#[test]
fn scope_exit_drops_exactly_the_live_alternative() {
    let live = Rc::new(Cell::new(0));

    {
        let _value = Tracked::new(SlotTag::Tracked, Counted::new(&live));
        assert_eq!(live.get(), 1);
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn assign_drops_the_outgoing_alternative_exactly_once() {
    let live = Rc::new(Cell::new(0));

    let mut value = Tracked::new(SlotTag::Tracked, Counted::new(&live));
    assert_eq!(live.get(), 1);

    // Overwriting with a different alternative tears the old one down now,
    // not at scope exit.
    value.assign(SlotTag::Plain, 9_u32);
    assert_eq!(live.get(), 0);

    // Overwriting with the same alternative drops the outgoing instance and
    // keeps the incoming one.
    value.assign(SlotTag::Tracked, Counted::new(&live));
    value.assign(SlotTag::Tracked, Counted::new(&live));
    assert_eq!(live.get(), 1);

    drop(value);
    assert_eq!(live.get(), 0);
}

#[test]
fn moving_out_transfers_ownership_without_dropping() {
    let live = Rc::new(Cell::new(0));

    let value = Tracked::new(SlotTag::Tracked, Counted::new(&live));
    let payload = value.into_alternative::<TRACKED>();
    assert_eq!(live.get(), 1, "the moved-out payload is still alive");

    drop(payload);
    assert_eq!(live.get(), 0);
}

#[test]
fn clone_duplicates_only_the_live_alternative() {
    let live = Rc::new(Cell::new(0));

    let original = Tracked::new(SlotTag::Tracked, Counted::new(&live));
    let copy = original.clone();
    assert_eq!(live.get(), 2);
    assert_eq!(copy.discriminant(), SlotTag::Tracked);

    drop(original);
    assert_eq!(live.get(), 1);
    drop(copy);
    assert_eq!(live.get(), 0);

    // Cloning a union whose live alternative is the untracked one must not
    // touch the tracked type at all.
    let plain = Tracked::new(SlotTag::Plain, 3_u32);
    let plain_copy = plain.clone();
    assert_eq!(live.get(), 0);
    assert_eq!(plain_copy.get::<PLAIN>(), &3);
}

#[test]
fn construct_assign_move_sequences_balance() {
    let live = Rc::new(Cell::new(0));

    {
        let mut value = Tracked::new(SlotTag::Tracked, Counted::new(&live));
        let other = Tracked::new(SlotTag::Tracked, Counted::new(&live));
        assert_eq!(live.get(), 2);

        // A move is a transfer, not a copy.
        let moved = other;
        assert_eq!(live.get(), 2);

        value.assign(SlotTag::Plain, 1_u32);
        assert_eq!(live.get(), 1);

        let payload = moved.into_alternative::<TRACKED>();
        value.assign(SlotTag::Tracked, payload.clone());
        assert_eq!(live.get(), 2);

        drop(payload);
        assert_eq!(live.get(), 1);
    }

    assert_eq!(live.get(), 0, "every constructed payload must be dropped exactly once");
}
