//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use trivium::prelude::*;
//!
//! fn smallest(values: &[u32]) -> Outcome<u32, String> {
//!     match values.iter().copied().min() {
//!         Some(smallest) => ok(smallest),
//!         None => err(String::from("no values given")),
//!     }
//! }
//!
//! assert_eq!(smallest(&[3, 1, 2]).value(), &1);
//! ```
//!
//! # What's Included
//!
//! - **[`Outcome`]** with its free constructors [`ok`], [`warn`] and [`err`]
//! - **[`TaggedUnion`]** and the [`Discriminant`] trait, plus the
//!   [`tags!`](crate::tags) macro for declaring discriminant enums
//! - **[`Diagnostic`]**, the per-error-type text hook consulted by failure
//!   messages
//!
//! The failure-handler machinery stays behind [`crate::hooks`]: installing a
//! handler is a deliberate act, not something to reach for casually.

pub use crate::{Diagnostic, Discriminant, Outcome, TaggedUnion, err, ok, tags, warn};
