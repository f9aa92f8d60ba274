//! The `Try` effect and the shapes it composes with.
//!
//! This module provides a deferred computation that captures its own
//! failures, together with the pieces it is built from.
//!
//! # Core
//!
//! - [`Try`]: A re-runnable computation that yields an [`Outcome`]
//! - [`Outcome`]: A success value or a captured [`Fault`]
//! - [`TryOption`]: The optional-valued sibling of `Try`
//! - [`SuccessContext`] / [`SuccessUnitContext`]: Fluent handler staging
//!
//! # Diagnostic Hook
//!
//! Every captured fault is reported once, at the moment of capture, to the
//! hook selected by [`with_fault_hook`] or [`set_fault_hook`].
//!
//! # Foreign Shapes
//!
//! - [`Reader`]: Computations that read from an environment
//! - [`Writer`]: A result with accumulated output
//! - [`State`]: Computations that thread a state value
//!
//! The `fusion` module composes a `Try` with each of these.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::Try;
//!
//! let parsed = Try::fallible(|| "12".parse::<i32>())
//!     .map(|n| n * 2)
//!     .filter(|n| *n > 10);
//!
//! assert_eq!(parsed.if_fail(0), 24);
//! ```

// =============================================================================
// Faults and Outcomes
// =============================================================================

mod capture;
mod fault;
mod hook;
mod outcome;

pub(crate) use capture::capture_value;
pub use fault::{Fault, FaultKind};
#[cfg(feature = "tracing")]
pub use hook::tracing_hook;
pub use hook::{clear_fault_hook, set_fault_hook, with_fault_hook};
pub use outcome::Outcome;

// =============================================================================
// Deferred Computations
// =============================================================================

mod context;
mod try_effect;
mod try_option;

pub use context::{SuccessContext, SuccessUnitContext};
pub use try_effect::Try;
pub use try_option::TryOption;

// =============================================================================
// Foreign Shapes
// =============================================================================

mod reader;
mod state;
mod writer;

pub use reader::Reader;
pub use state::State;
pub use writer::Writer;
