//! The tri-state result type.

use crate::{Diagnostic, hooks};

/// A result with three states: success, success with a warning, and failure.
///
/// [`Outcome`] extends the familiar two-state result with a middle ground:
/// [`Warn`](Outcome::Warn) carries a usable value **and** a diagnostic at the
/// same time, for operations that succeeded in a degraded way. Both payloads
/// of a warning are independently retrievable.
///
/// The accessors split into two families:
///
/// - **Fatal on misuse**: [`value`](Self::value) and [`error`](Self::error)
///   (and their `mut`/`into` variants) return the live payload or report a
///   contract violation through the [failure hook](crate::hooks). Use these
///   where the state has already been established and a mismatch is a bug.
/// - **Never fatal**: [`value_or`](Self::value_or),
///   [`into_option`](Self::into_option), [`handle`](Self::handle) and
///   pattern matching, for code that still has to find out.
///
/// # Examples
///
/// ```
/// use trivium::prelude::*;
///
/// fn checked_halve(n: u32) -> Outcome<u32, String> {
///     if n % 2 == 0 {
///         ok(n / 2)
///     } else {
///         warn(n / 2, format!("{n} is odd, rounding down"))
///     }
/// }
///
/// let exact = checked_halve(8);
/// assert!(exact.is_ok() && !exact.has_warning());
///
/// let rounded = checked_halve(9);
/// assert!(rounded.is_ok() && rounded.has_warning());
/// assert_eq!(rounded.value(), &4);
/// assert_eq!(rounded.error(), &"9 is odd, rounding down");
/// ```
#[must_use = "this `Outcome` may be a failure, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Full success, holding a `T`.
    Ok(T),
    /// Degraded success, holding a usable `T` together with a diagnostic `E`.
    Warn(T, E),
    /// Failure, holding an `E`.
    Err(E),
}

/// Wraps a value as a fully successful [`Outcome`].
///
/// A free constructor so the other type parameter can be inferred from
/// context, in the spirit of [`Ok`](Result::Ok) for [`Result`].
///
/// # Examples
///
/// ```
/// use trivium::prelude::*;
///
/// let outcome: Outcome<u32, String> = ok(42);
/// assert!(outcome.is_ok());
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Wraps a value and a diagnostic as a degraded-success [`Outcome`].
#[inline]
pub fn warn<T, E>(value: T, diagnostic: E) -> Outcome<T, E> {
    Outcome::Warn(value, diagnostic)
}

/// Wraps an error as a failed [`Outcome`].
///
/// # Examples
///
/// ```
/// use trivium::prelude::*;
///
/// let outcome: Outcome<u32, &str> = err("bad input");
/// assert!(outcome.is_err());
/// ```
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` for [`Ok`](Self::Ok) and [`Warn`](Self::Warn): a value
    /// is present.
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_) | Self::Warn(_, _))
    }

    /// Returns `true` only for [`Warn`](Self::Warn).
    #[inline]
    #[must_use]
    pub fn has_warning(&self) -> bool {
        matches!(self, Self::Warn(_, _))
    }

    /// Returns `true` only for [`Err`](Self::Err).
    #[inline]
    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns a reference to the live value.
    ///
    /// The failure message embeds the error's [`Diagnostic`] text when it
    /// supplies one.
    ///
    /// # Contract
    ///
    /// The outcome must be [`Ok`](Self::Ok) or [`Warn`](Self::Warn); calling
    /// this on a failure is a contract violation reported through the
    /// [failure hook](crate::hooks).
    ///
    /// # Examples
    ///
    /// ```
    /// use trivium::prelude::*;
    ///
    /// let outcome: Outcome<u32, String> = ok(42);
    /// assert_eq!(outcome.value(), &42);
    /// ```
    #[track_caller]
    #[must_use]
    pub fn value(&self) -> &T
    where
        E: Diagnostic,
    {
        match self {
            Self::Ok(value) | Self::Warn(value, _) => value,
            Self::Err(error) => missing_value(error),
        }
    }

    /// Returns a mutable reference to the live value.
    ///
    /// # Contract
    ///
    /// Same as [`value`](Self::value).
    #[track_caller]
    #[must_use]
    pub fn value_mut(&mut self) -> &mut T
    where
        E: Diagnostic,
    {
        match self {
            Self::Ok(value) | Self::Warn(value, _) => value,
            Self::Err(error) => missing_value(error),
        }
    }

    /// Consumes the outcome and returns the value.
    ///
    /// For a warning, the diagnostic is dropped: the value path is the
    /// primary one.
    ///
    /// # Contract
    ///
    /// Same as [`value`](Self::value).
    #[track_caller]
    #[must_use]
    pub fn into_value(self) -> T
    where
        E: Diagnostic,
    {
        match self {
            Self::Ok(value) | Self::Warn(value, _) => value,
            Self::Err(error) => missing_value(&error),
        }
    }

    /// Returns a reference to the live error.
    ///
    /// Available for both [`Warn`](Self::Warn) and [`Err`](Self::Err) — a
    /// warning keeps its diagnostic alive alongside the value.
    ///
    /// # Contract
    ///
    /// The outcome must hold an error; calling this on [`Ok`](Self::Ok) is a
    /// contract violation reported through the [failure hook](crate::hooks).
    ///
    /// # Examples
    ///
    /// ```
    /// use trivium::prelude::*;
    ///
    /// let outcome: Outcome<u32, &str> = err("bad input");
    /// assert_eq!(outcome.error(), &"bad input");
    /// ```
    #[track_caller]
    #[must_use]
    pub fn error(&self) -> &E {
        match self {
            Self::Warn(_, error) | Self::Err(error) => error,
            Self::Ok(_) => missing_error(),
        }
    }

    /// Consumes the outcome and returns the error.
    ///
    /// # Contract
    ///
    /// Same as [`error`](Self::error).
    #[track_caller]
    #[must_use]
    pub fn into_error(self) -> E {
        match self {
            Self::Warn(_, error) | Self::Err(error) => error,
            Self::Ok(_) => missing_error(),
        }
    }

    /// Returns the warning diagnostic, if this outcome is a warning.
    ///
    /// Unlike [`error`](Self::error) this never reports a violation; it is
    /// the query-flavored way at the diagnostic of a degraded success.
    #[inline]
    #[must_use]
    pub fn warning(&self) -> Option<&E> {
        match self {
            Self::Warn(_, error) => Some(error),
            Self::Ok(_) | Self::Err(_) => None,
        }
    }

    /// Returns the live value, or `default` for a failure. Never fatal.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivium::prelude::*;
    ///
    /// let good: Outcome<u32, &str> = ok(2);
    /// let bad: Outcome<u32, &str> = err("nope");
    /// assert_eq!(good.value_or(7), 2);
    /// assert_eq!(bad.value_or(7), 7);
    /// ```
    #[inline]
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Ok(value) | Self::Warn(value, _) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the live value, or computes one from the error. Never fatal.
    #[inline]
    #[must_use]
    pub fn value_or_else(self, default: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(value) | Self::Warn(value, _) => value,
            Self::Err(error) => default(error),
        }
    }

    /// Converts the outcome into an [`Option`] over the value, discarding
    /// any error information. Never fatal.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivium::prelude::*;
    ///
    /// let good: Outcome<u32, &str> = ok(2);
    /// let bad: Outcome<u32, &str> = err("nope");
    /// assert_eq!(good.into_option(), Some(2));
    /// assert_eq!(bad.into_option(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Ok(value) | Self::Warn(value, _) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrows the payloads, producing an `Outcome<&T, &E>` in the same
    /// state.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Warn(value, error) => Outcome::Warn(value, error),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Folds the outcome into a single result by invoking exactly one of the
    /// two functions with the live payload.
    ///
    /// A warning takes the value path: `on_value` receives the value and the
    /// diagnostic is dropped. Both functions must return the same type —
    /// that requirement is the signature, not a runtime check.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivium::prelude::*;
    ///
    /// let good: Outcome<u32, &str> = ok(2);
    /// let bad: Outcome<u32, &str> = err("nope");
    ///
    /// assert_eq!(good.handle(|v| v * 10, |_| 0), 20);
    /// assert_eq!(bad.handle(|v| v * 10, |_| 0), 0);
    /// ```
    #[inline]
    pub fn handle<R>(self, on_value: impl FnOnce(T) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Ok(value) | Self::Warn(value, _) => on_value(value),
            Self::Err(error) => on_error(error),
        }
    }

    /// Maps the live value, preserving the state and any error payload.
    ///
    /// A warning's diagnostic rides along untouched; a failure short-circuits
    /// and `map` is never invoked. A closure returning `()` yields
    /// `Outcome<(), E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivium::prelude::*;
    ///
    /// let outcome: Outcome<u32, &str> = ok(42);
    /// assert_eq!(outcome.transform(|v| v + 1), ok(43));
    ///
    /// let degraded: Outcome<u32, &str> = warn(42, "stale");
    /// assert_eq!(degraded.transform(|v| v + 1), warn(43, "stale"));
    ///
    /// let failed: Outcome<u32, &str> = err("bad");
    /// assert_eq!(failed.transform(|v| v + 1), err("bad"));
    /// ```
    #[inline]
    pub fn transform<U>(self, map: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(map(value)),
            Self::Warn(value, error) => Outcome::Warn(map(value), error),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error payload, preserving the state and the value.
    ///
    /// The mirror image of [`transform`](Self::transform): a full success
    /// passes through untouched and `map` is never invoked.
    #[inline]
    pub fn transform_err<F>(self, map: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Warn(value, error) => Outcome::Warn(value, map(error)),
            Self::Err(error) => Outcome::Err(map(error)),
        }
    }

    /// Converts into a two-state [`Result`], treating a warning as a
    /// success.
    ///
    /// The warning diagnostic is dropped. Use
    /// [`into_result_strict`](Self::into_result_strict) to treat warnings as
    /// failures instead; the two methods exist so the choice is always
    /// explicit.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) | Self::Warn(value, _) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Converts into a two-state [`Result`], treating a warning as a
    /// failure.
    ///
    /// The warning's value is dropped and its diagnostic becomes the error.
    #[inline]
    pub fn into_result_strict(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Warn(_, error) | Self::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Lossless import of a two-state result: `Ok` maps to `Ok`, `Err` to
    /// `Err`. Warnings only arise through [`warn`].
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

/// Reports the value-on-failure violation, embedding the error's diagnostic
/// text when it supplies one.
#[cold]
#[track_caller]
fn missing_value<E: Diagnostic>(error: &E) -> ! {
    match error.diagnostic() {
        Some(text) => hooks::fail(format_args!(
            "tried to unwrap the value of a failed outcome: {text}"
        )),
        None => hooks::fail(format_args!(
            "tried to unwrap the value of a failed outcome"
        )),
    }
}

/// Reports the error-on-success violation.
#[cold]
#[track_caller]
fn missing_error() -> ! {
    hooks::fail(format_args!(
        "tried to retrieve the error of a successful outcome"
    ))
}
