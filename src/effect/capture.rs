//! The run-and-capture primitive.
//!
//! Every step boundary in the crate (combinators, adapters and each stage of
//! every fusion) goes through one of these functions. They are the only place
//! where panics are caught and where the diagnostic hook is notified.
//!
//! Each panic or `Err` caught here is a new capture and is reported, even if
//! it carries a `Fault` that was reported before. The one exception is a
//! fault re-raised by `Outcome::unwrap_or_raise`: it travels as a
//! `Propagated` payload and passes through silently.
//!
//! Catching a panic does not stop the standard panic hook from running first,
//! so a captured panic still prints its `thread '..' panicked at` line to
//! stderr. Callers who want silent capture install their own hook with
//! [`std::panic::set_hook`].

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::fault::{Fault, Propagated};
use super::hook;
use super::outcome::Outcome;

/// Records a newly captured fault with the hook and hands it back.
pub(crate) fn raise(fault: Fault) -> Fault {
    hook::report(&fault);
    fault
}

/// Runs a step that already produces an `Outcome`.
///
/// A `Fault` returned by the step passes through untouched (it was captured
/// where it arose); only a panic escaping the step is converted here.
pub(crate) fn capture<T, F>(step: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    match catch_unwind(AssertUnwindSafe(step)) {
        Ok(outcome) => outcome,
        Err(payload) => match payload.downcast::<Propagated>() {
            Ok(propagated) => Outcome::Fault(propagated.0),
            Err(payload) => Outcome::Fault(raise(Fault::from_panic(payload))),
        },
    }
}

/// Runs an infallible step, capturing a panic as a fault.
pub(crate) fn capture_value<T, F>(step: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    capture(|| Outcome::Success(step()))
}

/// Runs a fallible step, capturing both an `Err` and a panic as a fault.
pub(crate) fn capture_result<T, E, F>(step: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Fault>,
{
    capture(|| match step() {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Fault(raise(error.into())),
    })
}
