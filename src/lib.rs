//! # tryfuse
//!
//! A deferred computation that captures its own failures, and the glue to
//! compose it with other effect shapes.
//!
//! ## Overview
//!
//! A [`Try<T>`](effect::Try) wraps work that may panic or return an error.
//! The work runs only when the `Try` is run, and runs again on every run.
//! Running never unwinds into the caller: failures come back as
//! [`Outcome::Fault`](effect::Outcome::Fault) and are reported once to a
//! diagnostic hook.
//!
//! - **Combinators**: `map`, `bind`, `filter`, `recover`, `fold`, ...
//! - **Adapters**: into `Option`, `TryOption`, or a one-element sequence
//! - **Fusion**: bind-and-project a `Try` with `Option`, `Either`, `Result`,
//!   `Reader`, `Writer`, `State`, `BTreeMap` and any `IntoIterator`
//! - **Fluent Contexts**: `on_success(..).on_fault(..)`
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid`
//! - `control`: the `Either` two-branch value
//! - `effect`: `Try`, `Outcome`, `Fault`, the hook, and `Reader`/`Writer`/`State`
//! - `fusion`: cross-effect fusion
//! - `tracing`: a hook that emits `tracing` events
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tryfuse::prelude::*;
//!
//! fn divide(numerator: i32, denominator: i32) -> Try<i32> {
//!     Try::new(move || numerator / denominator)
//! }
//!
//! assert_eq!(divide(10, 2).map(|x| x + 1).if_fail(-1), 6);
//! assert_eq!(divide(10, 0).map(|x| x + 1).if_fail(-1), -1);
//!
//! let labelled = divide(9, 3).fuse_option(|n| (n > 0).then_some("positive"), |n, label| format!("{n} is {label}"));
//! assert_eq!(labelled.as_deref(), Some("3 is positive"));
//! ```
//!
//! ## Panic Output
//!
//! Capturing a panic does not suppress the standard panic hook, which prints
//! a `thread '..' panicked at ..` line to stderr before the panic is caught.
//! The fault is still captured and reported. To keep captured panics quiet,
//! replace the standard hook:
//!
//! ```rust
//! use tryfuse::effect::Try;
//!
//! let previous = std::panic::take_hook();
//! std::panic::set_hook(Box::new(|_| {}));
//!
//! let quiet: Try<i32> = Try::new(|| panic!("not printed"));
//! assert!(quiet.run().is_fault());
//!
//! std::panic::set_hook(previous);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use tryfuse::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "fusion")]
    pub use crate::fusion::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "fusion")]
pub mod fusion;
