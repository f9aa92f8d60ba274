//! The result of running a [`Try`](super::Try).
//!
//! An [`Outcome`] is either a success value or a captured [`Fault`]. It has
//! no third, "unset" state: every `Outcome` is fully constructed before
//! anyone can look at it.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::{Fault, Outcome};
//!
//! let ok: Outcome<i32> = Outcome::Success(3);
//! assert_eq!(ok.map(|n| n * 2), Outcome::Success(6));
//!
//! let failed: Outcome<i32> = Outcome::Fault(Fault::message("boom"));
//! assert_eq!(failed.into_result().unwrap_err().to_string(), "boom");
//! ```

use std::fmt;

use super::fault::{Fault, Propagated};
use crate::control::Either;

/// A success value or a captured fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the fault says why.
    Fault(Fault),
}

impl<T> Outcome<T> {
    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Fault`.
    #[inline]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Converts into the success value, discarding a fault.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Fault(_) => None,
        }
    }

    /// Converts into the fault, discarding a success value.
    #[inline]
    pub fn fault(self) -> Option<Fault> {
        match self {
            Self::Success(_) => None,
            Self::Fault(fault) => Some(fault),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Fault(fault) => Outcome::Fault(fault.clone()),
        }
    }

    /// Applies a function to a success value; a fault passes through.
    ///
    /// Unlike [`Try::map`](super::Try::map) this does not capture panics:
    /// an `Outcome` is already-computed data, not a deferred computation.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Fault(fault) => Outcome::Fault(fault),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Fault(fault) => Err(fault),
        }
    }

    /// Returns the success value or raises the fault as a panic.
    ///
    /// Capturing the panic again, inside a `Try` or with
    /// [`Fault::from_panic`], recovers the same fault without reporting it to
    /// the diagnostic hook a second time.
    ///
    /// # Panics
    ///
    /// Panics with the contained fault if this is `Fault`.
    pub fn unwrap_or_raise(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Fault(fault) => std::panic::panic_any(Propagated(fault)),
        }
    }
}

impl<T> From<Result<T, Fault>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Fault>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Fault(fault),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Outcome<T>> for Either<Fault, T> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Right(value),
            Outcome::Fault(fault) => Self::Left(fault),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Fault(fault) => write!(formatter, "Fault({fault})"),
        }
    }
}
