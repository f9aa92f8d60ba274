//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is the crate's two-branch value. By convention `Left`
//! carries the failure and `Right` the success, which is the orientation the
//! fusion layer relies on: a fused `Either` short-circuits on `Left`.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::control::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! assert!(left.is_left());
//! assert_eq!(right.right().as_deref(), Some("hello"));
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// # Type Parameters
///
/// * `L` - The type of the left (failure) value
/// * `R` - The type of the right (success) value
///
/// # Examples
///
/// ```rust
/// use tryfuse::control::Either;
///
/// let success: Either<String, i32> = Either::from(Ok::<i32, String>(42));
/// assert_eq!(success, Either::Right(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left (failure) variant.
    Left(L),
    /// The right (success) variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into the left value, discarding a right one.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into the right value, discarding a left one.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_is_not_right() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.left(), Some(42));
    }

    #[rstest]
    fn right_extracts_only_right() {
        let value: Either<i32, &str> = Either::Right("hello");
        assert_eq!(value.right(), Some("hello"));
        assert_eq!(value.left(), None);
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either, Either::Left("error".to_string()));
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn debug_names_the_branch() {
        let value: Either<i32, i32> = Either::Right(7);
        assert_eq!(format!("{value:?}"), "Right(7)");
    }
}
