//! Algebraic type classes used by the effect shapes.
//!
//! Only the structures the crate needs to accumulate output are provided:
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! [`Writer`](crate::effect::Writer) requires its output type to be a
//! [`Monoid`], which is also what lets a fused writer report an empty log
//! when the computation never ran.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::typeclass::{Monoid, Semigroup};
//!
//! let logs = vec!["opened".to_string()].combine(vec!["closed".to_string()]);
//! assert_eq!(logs, vec!["opened", "closed"]);
//!
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
