#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
//! Internal implementation crate for [`trivium`].
//!
//! # Overview
//!
//! This crate contains the raw storage layer that powers the `TaggedUnion`
//! type of the [`trivium`] library: a single fixed-size, fixed-alignment
//! region that can hold exactly one value out of a closed list of alternative
//! types, together with the per-alternative function tables needed to tear the
//! live value down without knowing its type at the use site.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`trivium`] crate, not
//! this one.
//!
//! # Architecture
//!
//! - **[`list`]**: The compile-time description of an alternative set
//!   - [`AlternativeList`]: implemented for tuples of up to eight types; pairs
//!     a `#[repr(C)]` union (the shared storage layout) with one
//!     [`SlotVtable`] per position
//!   - [`TypeAt`]: positional type lookup, `(A, B): TypeAt<1, Type = B>`
//!   - [`CloneAlternatives`]: position-indexed clone dispatch for lists whose
//!     alternatives are all `Clone`
//! - **[`RawSlot`]**: the storage region itself, with unchecked typed access
//! - **[`SlotVtable`]**: `type_id` / `type_name` / `drop` function pointers
//!   for one alternative
//!
//! # Safety Strategy
//!
//! The storage region never knows which alternative is live; the owner does.
//! Every operation that touches the region is `unsafe` and states the exact
//! obligation the caller discharges, which is always some restatement of the
//! single crate-wide invariant: **the position the owner believes is live must
//! be the position whose value was most recently written and not yet dropped
//! or moved out**.
//!
//! Three mechanical facts make the pointer work sound:
//!
//! - The per-arity storage unions are `#[repr(C)]`, so every field lives at
//!   offset zero and the union is sized and aligned for its largest member.
//! - Union fields are wrapped in [`ManuallyDrop`], so the region itself never
//!   runs a destructor; teardown goes through the vtable exactly once, driven
//!   by the owner.
//! - Vtables are created as `&'static` references paired with a concrete type
//!   parameter at compile time, so a vtable can never disagree with the
//!   position it was generated for.
//!
//! [`trivium`]: https://docs.rs/trivium/latest/trivium/
//! [`AlternativeList`]: list::AlternativeList
//! [`TypeAt`]: list::TypeAt
//! [`CloneAlternatives`]: list::CloneAlternatives
//! [`ManuallyDrop`]: core::mem::ManuallyDrop

pub mod list;
mod raw;
mod vtable;

pub use raw::RawSlot;
pub use vtable::SlotVtable;
