//! Demonstrates replacing the default failure handler.
//!
//! This example shows:
//! 1. Installing a process-wide handler with `hooks::set_failure_handler`
//! 2. What a handler receives: the message and the offending call site
//! 3. Turning contract violations into caught unwinds for supervision-style
//!    recovery
//!
//! The handler must diverge — its `-> !` signature is the fail-fast
//! contract. A supervising embedder diverges by panicking and catches the
//! unwind at a boundary, which is what this demo does.

use std::panic;

use trivium::{
    hooks::{self, ContractViolation},
    prelude::*,
};

/// Logs the violation the way an embedding application might, then panics so
/// the supervisor below can catch it.
fn supervised_handler(violation: &ContractViolation<'_>) -> ! {
    eprintln!("[contract] {} (from {})", violation.message(), violation.location());
    panic!("supervised contract violation");
}

fn risky_read(outcome: &Outcome<u32, String>) -> u32 {
    // With the handler installed this is no longer an abort-style failure:
    // the violation is logged and unwinds to the supervisor.
    *outcome.value()
}

fn main() {
    println!("=== Custom failure handler ===\n");

    hooks::set_failure_handler(supervised_handler);

    let good: Outcome<u32, String> = ok(7);
    println!("good read: {}", risky_read(&good));

    let bad: Outcome<u32, String> = err(String::from("disk on fire"));
    let recovered = panic::catch_unwind(|| risky_read(&bad));

    match recovered {
        Ok(value) => println!("unexpected success: {value}"),
        Err(_) => println!("violation was logged and contained; carrying on"),
    }

    // Back to the default panic-with-message behavior.
    hooks::reset_failure_handler();
    println!("\nhandler removed; the default would panic with the message instead");
}
