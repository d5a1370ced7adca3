#![no_std]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Tri-state results and discriminant-checked tagged unions without heap
//! allocation.
//!
//! ## Overview
//!
//! This crate provides two reusable value types for safer error propagation
//! and closed-set polymorphism:
//!
//! - [`Outcome<T, E>`] — a result with three states: success, success with a
//!   warning (which carries a value *and* a diagnostic at the same time), and
//!   failure.
//! - [`TaggedUnion<D, L>`] — a value holding exactly one out of a closed list
//!   of alternative types in a single fixed-size storage slot, selected by an
//!   externally supplied positional discriminant.
//!
//! Both types own their payloads inline on the stack. There is no allocation
//! on any construction or access path; the only allocation in the crate is
//! the formatting of contract-violation messages.
//!
//! ## Quick Example
//!
//! ```
//! use trivium::prelude::*;
//!
//! fn parse_port(input: &str) -> Outcome<u16, String> {
//!     match input.trim().parse::<u16>() {
//!         Ok(port) if input.trim() == input => ok(port),
//!         Ok(port) => warn(port, format!("surrounding whitespace ignored in {input:?}")),
//!         Err(parse) => err(format!("not a port number: {parse}")),
//!     }
//! }
//!
//! let port = parse_port(" 8080 ");
//! assert!(port.is_ok());
//! assert!(port.has_warning());
//! assert_eq!(port.value(), &8080);
//! ```
//!
//! ## Contract violations
//!
//! Reading the wrong state — [`Outcome::value`] on a failure,
//! [`TaggedUnion::get`] with the wrong position — is a *contract violation*:
//! a programming error, not a recoverable runtime condition. Violations are
//! routed through a single process-wide failure handler which by default
//! panics with a diagnostic message. Embedding systems can install their own
//! handler with [`hooks::set_failure_handler`]; see the [`hooks`] module for
//! the guarantees that entails.
//!
//! Domain errors — the `E` payload of an [`Outcome`] — are ordinary data.
//! They are returned, matched on, and transformed; the crate never panics on
//! them.
//!
//! ## Picking an alternative by position
//!
//! A [`TaggedUnion`] alternative set is a tuple type, and the discriminant is
//! *positional*: it must equal the zero-based index of the intended
//! alternative. Because the same type may appear at several positions, the
//! discriminant is never inferred from the value being written; instead every
//! write validates that the named position actually holds the value's type:
//!
//! ```
//! use trivium::prelude::*;
//!
//! tags! {
//!     /// Positions of the `Text` alternatives.
//!     pub enum TextTag {
//!         U32,
//!         Str,
//!     }
//! }
//!
//! type Text = TaggedUnion<TextTag, (u32, &'static str)>;
//!
//! let mut text = Text::new(TextTag::U32, 7_u32);
//! assert_eq!(text.get::<{ TextTag::U32 as usize }>(), &7);
//!
//! text.assign(TextTag::Str, "seven");
//! assert_eq!(text.get::<{ TextTag::Str as usize }>(), &"seven");
//! ```
//!
//! ## Feature Flags
//!
//! - `std` *(default)*: the failure-handler registry uses
//!   [`std::sync::RwLock`]; without it, a [`spin`] lock is used instead. No
//!   other behavior changes; the crate is `no_std` either way.
//!
//! [`std::sync::RwLock`]: https://doc.rust-lang.org/std/sync/struct.RwLock.html
//! [`spin`]: https://docs.rs/spin

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod hooks;
pub mod prelude;

mod diagnostic;
mod discriminant;
mod outcome;
mod tagged_union;

pub use trivium_internals::list::{AlternativeList, CloneAlternatives, TypeAt};

pub use self::{
    diagnostic::Diagnostic,
    discriminant::Discriminant,
    outcome::{Outcome, err, ok, warn},
    tagged_union::TaggedUnion,
};
