//! The per-error-type diagnostic customization point.

use alloc::{borrow::Cow, boxed::Box, string::String};
use core::convert::Infallible;

/// Supplies human-readable text for an error value, for inclusion in
/// contract-violation messages.
///
/// When [`Outcome::value`] is called on a failed outcome, the resulting
/// fatal message embeds whatever this trait reports for the error that *was*
/// there — turning "tried to unwrap the value of a failed outcome" into a
/// message that also says what went wrong. The provided default returns
/// [`None`], which yields the generic message; implementing the trait with
/// the default body opts a type into the fatal accessors without supplying
/// text.
///
/// This is a customization point, not a formatting trait: it is consulted
/// only on the failure path, and only by the accessors whose documentation
/// says so. Implementations for the common string types ship with the crate.
///
/// [`Outcome::value`]: crate::Outcome::value
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
///
/// use trivium::Diagnostic;
///
/// #[derive(Debug, PartialEq)]
/// enum LoadError {
///     Missing,
///     Corrupt { offset: usize },
/// }
///
/// impl Diagnostic for LoadError {
///     fn diagnostic(&self) -> Option<Cow<'_, str>> {
///         match self {
///             LoadError::Missing => Some(Cow::Borrowed("file is missing")),
///             LoadError::Corrupt { offset } => {
///                 Some(Cow::Owned(format!("corrupt at byte {offset}")))
///             }
///         }
///     }
/// }
/// ```
pub trait Diagnostic {
    /// Returns the diagnostic text for this error value, or [`None`] for the
    /// generic message.
    fn diagnostic(&self) -> Option<Cow<'_, str>> {
        None
    }
}

impl Diagnostic for String {
    fn diagnostic(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Diagnostic for &str {
    fn diagnostic(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Diagnostic for Box<str> {
    fn diagnostic(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Diagnostic for Cow<'_, str> {
    fn diagnostic(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

/// An `Outcome` with an `Infallible` error can never be in a failed state,
/// so no text is ever requested.
impl Diagnostic for Infallible {
    fn diagnostic(&self) -> Option<Cow<'_, str>> {
        match *self {}
    }
}
