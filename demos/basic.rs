//! Basic introduction to tri-state outcomes.
//!
//! This example demonstrates the fundamental concepts:
//! 1. Producing `ok` / `warn` / `err` outcomes from a fallible operation
//! 2. Querying the state and reading payloads
//! 3. Chaining with `transform` and folding with `handle`
//! 4. The difference between the fatal accessors and the never-fatal ones

use trivium::prelude::*;

/// Parses a timeout given in whole seconds.
///
/// Accepts a plain number, tolerates (and warns about) a trailing `s`
/// suffix, and fails on anything else.
fn parse_timeout(input: &str) -> Outcome<u64, String> {
    if let Ok(seconds) = input.parse::<u64>() {
        return ok(seconds);
    }
    if let Some(stripped) = input.strip_suffix('s') {
        if let Ok(seconds) = stripped.parse::<u64>() {
            return warn(seconds, format!("ignoring trailing 's' in {input:?}"));
        }
    }
    err(format!("{input:?} is not a whole number of seconds"))
}

fn main() {
    println!("=== Tri-state outcomes ===\n");

    // Full success: a value, no diagnostic.
    let clean = parse_timeout("30");
    println!("parse_timeout(\"30\") -> is_ok={}, value={}", clean.is_ok(), clean.value());

    // Degraded success: the value is usable, the diagnostic explains what
    // was swept under the rug. Both payloads are alive at the same time.
    let degraded = parse_timeout("30s");
    if degraded.has_warning() {
        println!(
            "parse_timeout(\"30s\") -> value={}, warning={:?}",
            degraded.value(),
            degraded.error()
        );
    }

    // Failure: no value. `value_or` and `into_option` never fail; `value()`
    // on this one would be a contract violation.
    let failed = parse_timeout("soon");
    println!("parse_timeout(\"soon\") -> is_err={}", failed.is_err());
    println!("  with default: {}", failed.clone().value_or(60));
    println!("  as option:    {:?}", failed.clone().into_option());

    // `transform` maps the value path and short-circuits on failure.
    let millis = parse_timeout("2s").transform(|seconds| seconds * 1000);
    println!("\n2s as milliseconds: {}", millis.value());

    // `handle` folds both paths into one result type.
    let summary = parse_timeout("nope").handle(
        |seconds| format!("will wait {seconds}s"),
        |error| format!("using default, because {error}"),
    );
    println!("{summary}");
}
