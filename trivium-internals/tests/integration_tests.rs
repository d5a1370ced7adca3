//! Integration tests for the trivium-internals storage layer.
//!
//! The crate under test is all-unsafe plumbing, so these tests exercise the
//! documented contracts end to end:
//!
//! - **Layout**: the per-arity storage unions span the largest and
//!   most-aligned alternative, for every arity.
//! - **Vtables**: positional identity (`type_id`/`type_name`) and drop
//!   dispatch, including lists where the same type occurs at several
//!   positions.
//! - **Position search**: `candidate_positions` reports every occurrence of
//!   a type, `position_matches` rejects out-of-range positions.
//! - **Memory management**: write / read / drop / clone sequences on
//!   `RawSlot` construct and destroy each payload exactly once, verified
//!   with a drop-logging payload type.

use std::{any::TypeId, cell::RefCell, fmt, rc::Rc};

use static_assertions::{assert_eq_align, assert_eq_size};
use trivium_internals::{
    RawSlot,
    list::{
        AlternativeList, CloneAlternatives, TypeAt, candidate_positions, position_matches,
        storage_fits,
    },
};

#[derive(Clone, Debug, PartialEq)]
struct Big([u64; 4]);

#[test]
fn test_storage_layout_spans_every_alternative() {
    type Two = <(u8, u64) as AlternativeList>::Storage;
    assert_eq_size!(Two, u64);
    assert_eq_align!(Two, u64);

    type Three = <(u8, Big, u16) as AlternativeList>::Storage;
    assert_eq_size!(Three, Big);

    type Eight = <(u8, u16, u32, u64, i8, i16, i32, Big) as AlternativeList>::Storage;
    assert_eq_size!(Eight, Big);

    const {
        assert!(storage_fits::<(u8, String, Big), u8>());
        assert!(storage_fits::<(u8, String, Big), String>());
        assert!(storage_fits::<(u8, String, Big), Big>());
    };
}

#[test]
fn test_raw_slot_is_storage_sized() {
    // The slot is the storage region and nothing else: the live position is
    // the owner's knowledge, not a field.
    assert_eq_size!(RawSlot<(u8, u64)>, u64);
    assert_eq_size!(RawSlot<(String, u8)>, String);
}

#[test]
fn test_vtable_identity_per_position() {
    type L = (u32, String, u32);

    assert_eq!(<L as AlternativeList>::LEN, 3);
    let vtables = <L as AlternativeList>::VTABLES;
    assert_eq!(vtables.len(), 3);

    assert_eq!(vtables[0].type_id(), TypeId::of::<u32>());
    assert_eq!(vtables[1].type_id(), TypeId::of::<String>());
    assert_eq!(vtables[2].type_id(), TypeId::of::<u32>());

    // Positions 0 and 2 hold the same type and therefore share the promoted
    // vtable; position 1 has its own.
    assert!(std::ptr::eq(vtables[0], vtables[2]));
    assert!(!std::ptr::eq(vtables[0], vtables[1]));

    assert!(vtables[1].type_name().contains("String"));
}

#[test]
fn test_type_at_matches_vtables() {
    type L = (u32, String, u32);

    assert_eq!(
        TypeId::of::<<L as TypeAt<0>>::Type>(),
        TypeId::of::<u32>()
    );
    assert_eq!(
        TypeId::of::<<L as TypeAt<1>>::Type>(),
        TypeId::of::<String>()
    );
    assert_eq!(
        TypeId::of::<<L as TypeAt<2>>::Type>(),
        TypeId::of::<u32>()
    );
}

#[test]
fn test_candidate_search_over_duplicates() {
    type L = (u32, String, u32);

    let positions: Vec<usize> = candidate_positions::<L, u32>().collect();
    assert_eq!(positions, [0, 2]);

    let positions: Vec<usize> = candidate_positions::<L, String>().collect();
    assert_eq!(positions, [1]);

    assert!(candidate_positions::<L, f64>().next().is_none());

    assert!(position_matches::<L, u32>(0));
    assert!(!position_matches::<L, String>(0));
    assert!(!position_matches::<L, u32>(17));
}

#[test]
fn test_write_read_round_trips_at_every_arity() {
    // SAFETY: `u8` is an alternative of every list below; each read names
    // the type that was written, and the payloads are plain old data.
    unsafe {
        let slot: RawSlot<(u8,)> = RawSlot::new(1_u8);
        assert_eq!(slot.read_unchecked::<u8>(), 1);
    }
    // SAFETY: As above.
    unsafe {
        let slot: RawSlot<(u16, u8, u32, u64, i8, i16, i32, i64)> = RawSlot::new(2_u8);
        assert_eq!(slot.read_unchecked::<u8>(), 2);
    }
    // SAFETY: `Big` is an alternative of the list; the read transfers
    // ownership to the caller.
    unsafe {
        let slot: RawSlot<(u8, Big)> = RawSlot::new(Big([9; 4]));
        assert_eq!(slot.read_unchecked::<Big>(), Big([9; 4]));
    }
}

// ---------------------------------------------------------------------------
// Drop accounting
// ---------------------------------------------------------------------------

struct DropTracker {
    name: String,
    log: Rc<RefCell<Vec<String>>>,
}

impl DropTracker {
    fn new(name: &str, log: Rc<RefCell<Vec<String>>>) -> Self {
        let tracker = Self {
            name: name.to_string(),
            log: log.clone(),
        };
        log.borrow_mut().push(format!("Created: {name}"));
        tracker
    }
}

impl Clone for DropTracker {
    fn clone(&self) -> Self {
        Self::new(&format!("{} (clone)", self.name), self.log.clone())
    }
}

impl Drop for DropTracker {
    fn drop(&mut self) {
        self.log
            .borrow_mut()
            .push(format!("Dropped: {}", self.name));
    }
}

impl fmt::Display for DropTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DropTracker({})", self.name)
    }
}

/// Counts of create/drop events in a log.
fn tally(log: &Rc<RefCell<Vec<String>>>) -> (usize, usize) {
    let log = log.borrow();
    let created = log.iter().filter(|line| line.starts_with("Created")).count();
    let dropped = log.iter().filter(|line| line.starts_with("Dropped")).count();
    (created, dropped)
}

#[test]
fn test_drop_live_dispatches_by_position() {
    let log = Rc::new(RefCell::new(Vec::new()));

    type L = (u32, DropTracker);

    // SAFETY: `DropTracker` is the alternative of `L` at position 1; it is
    // dropped exactly once below and the slot is not used afterwards.
    unsafe {
        let mut slot: RawSlot<L> = RawSlot::new(DropTracker::new("a", log.clone()));
        slot.drop_live(1);
    }

    assert_eq!(
        *log.borrow(),
        ["Created: a", "Dropped: a"],
        "teardown must run exactly once, through the position's vtable"
    );
}

#[test]
fn test_forgotten_slot_drops_nothing() {
    let log = Rc::new(RefCell::new(Vec::new()));

    {
        // SAFETY: `DropTracker` is an alternative of the list. The slot is
        // deliberately discarded without teardown: `RawSlot` pushes drop
        // responsibility to the owner, and this test pins that down.
        let slot: RawSlot<(u32, DropTracker)> =
            unsafe { RawSlot::new(DropTracker::new("leak-candidate", log.clone())) };
        drop(slot);
    }

    assert_eq!(tally(&log), (1, 0));
}

#[test]
fn test_read_transfers_ownership() {
    let log = Rc::new(RefCell::new(Vec::new()));

    // SAFETY: `DropTracker` is the live alternative; after the read the slot
    // is treated as empty (it is dropped without `drop_live`).
    let payload = unsafe {
        let slot: RawSlot<(u32, DropTracker)> =
            RawSlot::new(DropTracker::new("moved", log.clone()));
        slot.read_unchecked::<DropTracker>()
    };

    assert_eq!(tally(&log), (1, 0));
    drop(payload);
    assert_eq!(tally(&log), (1, 1));
}

#[test]
fn test_clone_slot_duplicates_the_live_position() {
    let log = Rc::new(RefCell::new(Vec::new()));

    type L = (u32, DropTracker);

    // SAFETY: Position 1 (`DropTracker`) is live in `slot`; the clone leaves
    // position 1 live in `copy`; both are torn down exactly once.
    unsafe {
        let mut slot: RawSlot<L> = RawSlot::new(DropTracker::new("orig", log.clone()));
        let mut copy: RawSlot<L> = <L as CloneAlternatives>::clone_slot(&slot, 1);

        assert_eq!(tally(&log), (2, 0));

        slot.drop_live(1);
        copy.drop_live(1);
    }

    assert_eq!(tally(&log), (2, 2));
}

#[test]
fn test_clone_slot_of_untracked_position_leaves_tracker_alone() {
    let log = Rc::new(RefCell::new(Vec::new()));

    type L = (u32, DropTracker);

    // SAFETY: Position 0 (`u32`) is live; the clone clones only that
    // position, and `u32` needs no teardown.
    unsafe {
        let slot: RawSlot<L> = RawSlot::new(77_u32);
        let copy: RawSlot<L> = <L as CloneAlternatives>::clone_slot(&slot, 0);
        assert_eq!(copy.read_unchecked::<u32>(), 77);
    }

    assert_eq!(tally(&log), (0, 0));
}

#[test]
fn test_overwrite_sequences_balance() {
    let log = Rc::new(RefCell::new(Vec::new()));

    type L = (u32, DropTracker);

    // SAFETY: Every write names a type of the list; every `drop_live` names
    // the position written most recently; the final state is torn down
    // before the slot is discarded.
    unsafe {
        let mut slot: RawSlot<L> = RawSlot::new(DropTracker::new("first", log.clone()));
        slot.drop_live(1);

        slot = RawSlot::new(5_u32);
        assert_eq!(slot.read_unchecked::<u32>(), 5);

        slot = RawSlot::new(DropTracker::new("second", log.clone()));
        slot.drop_live(1);
    }

    let (created, dropped) = tally(&log);
    assert_eq!(created, 2);
    assert_eq!(dropped, 2);
}
