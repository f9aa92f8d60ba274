//! Control structures shared by the effect shapes.
//!
//! - [`Either`]: A value that can be one of two types. The sequence adapters
//!   of [`Try`](crate::effect::Try) yield `Either<Fault, T>` elements, and
//!   [`Try::fuse_either`](crate::effect::Try::fuse_either) fuses with it as a
//!   foreign two-branch shape.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::control::Either;
//!
//! let parsed: Either<String, i32> = "42".parse::<i32>().map_err(|error| error.to_string()).into();
//! assert_eq!(parsed.right(), Some(42));
//! ```

mod either;

pub use either::Either;
