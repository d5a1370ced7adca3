//! The failure hook: a single overridable channel for contract violations.
//!
//! Every contract violation in this crate — reading [`Outcome::value`] on a
//! failure, constructing a [`TaggedUnion`] with a discriminant that does not
//! match the written type, reading the wrong alternative — funnels through
//! one function. By default that function panics with a diagnostic message.
//!
//! # Installing a handler
//!
//! Embedding systems can replace the default with
//! [`set_failure_handler`]. A handler is a plain function pointer that
//! receives the [`ContractViolation`] and **must not return**: its `-> !`
//! signature makes the fail-fast contract part of the type. A handler that
//! wants violations to be recoverable can panic and let the embedder catch
//! the unwind; a handler for embedded targets might log over a serial line
//! and abort.
//!
//! Replacing the handler changes the safety story of the whole program —
//! every call site in this crate relies on the handler diverging — which is
//! why installation is a deliberate, global, explicit act rather than a
//! per-call parameter.
//!
//! # Examples
//!
//! ```
//! use trivium::hooks::{self, ContractViolation};
//!
//! fn log_and_panic(violation: &ContractViolation<'_>) -> ! {
//!     // Forward to your logging system here, then diverge.
//!     panic!("fatal: {violation}");
//! }
//!
//! let _previous = hooks::set_failure_handler(log_and_panic);
//! # hooks::reset_failure_handler();
//! ```
//!
//! [`Outcome::value`]: crate::Outcome::value
//! [`TaggedUnion`]: crate::TaggedUnion

mod hook_lock;

use alloc::{fmt, string::String};
use core::panic::Location;

use self::hook_lock::HookLock;

/// A contract violation: some caller misused an API in a way that can never
/// be valid, such as reading a value that is not there.
///
/// Carries the diagnostic message and the source location of the offending
/// call (captured via `#[track_caller]`, so it names the caller of the
/// violated API rather than a line inside this crate).
#[derive(Clone, Copy, Debug)]
pub struct ContractViolation<'a> {
    /// Human-readable description of the violated contract.
    message: &'a str,
    /// Source location of the offending call.
    location: &'static Location<'static>,
}

impl ContractViolation<'_> {
    /// The human-readable description of the violated contract.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message
    }

    /// The source location of the offending call.
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for ContractViolation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

impl core::error::Error for ContractViolation<'_> {}

/// The type of an installable failure handler.
///
/// The handler receives the violation and must diverge. See the
/// [module docs](self) for what installing one means.
pub type FailureHandler = fn(&ContractViolation<'_>) -> !;

/// The installed failure handler, if any.
static FAILURE_HANDLER: HookLock<FailureHandler> = HookLock::new();

/// Installs `handler` as the process-wide failure handler, returning the
/// previously installed one, if any.
///
/// # Examples
///
/// ```
/// use trivium::hooks::{self, ContractViolation};
///
/// fn quiet(violation: &ContractViolation<'_>) -> ! {
///     panic!("{}", violation.message());
/// }
///
/// hooks::set_failure_handler(quiet);
/// # hooks::reset_failure_handler();
/// ```
pub fn set_failure_handler(handler: FailureHandler) -> Option<FailureHandler> {
    FAILURE_HANDLER.replace(Some(handler))
}

/// Removes any installed failure handler, restoring the default
/// panic-with-message behavior. Returns the handler that was installed, if
/// any.
pub fn reset_failure_handler() -> Option<FailureHandler> {
    FAILURE_HANDLER.replace(None)
}

/// Reports a contract violation and diverges.
///
/// This is the single point every violated contract in the crate passes
/// through: it renders the message, hands the violation to the installed
/// handler if there is one, and otherwise panics.
#[cold]
#[track_caller]
pub(crate) fn fail(message: fmt::Arguments<'_>) -> ! {
    let message: String = render(message);
    let violation = ContractViolation {
        message: &message,
        location: Location::caller(),
    };
    if let Some(handler) = FAILURE_HANDLER.load() {
        handler(&violation);
    }
    panic!("contract violation: {violation}");
}

/// Renders format arguments without going through `format!`, reusing the
/// borrowed string when the message has no interpolations.
fn render(message: fmt::Arguments<'_>) -> String {
    match message.as_str() {
        Some(literal) => String::from(literal),
        None => fmt::format(message),
    }
}
