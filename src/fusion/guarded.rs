//! The bottom marker carried by fused reader, writer and state shapes.

use std::fmt;

use crate::effect::Outcome;

/// A value, or the marker left behind by a failed fusion.
///
/// `Reader`, `Writer` and `State` have no failure case of their own, so a
/// fusion into one of them reports failure in-band with `Bottom`. The fault
/// itself has already been delivered to the diagnostic hook by then.
///
/// # Examples
///
/// ```rust
/// use tryfuse::fusion::Guarded;
///
/// let present = Guarded::Value(3);
/// assert_eq!(present.map(|n| n + 1).into_option(), Some(4));
///
/// let bottom: Guarded<i32> = Guarded::Bottom;
/// assert!(bottom.is_bottom());
/// assert_eq!(bottom.unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guarded<A> {
    /// Every stage of the fusion succeeded.
    Value(A),
    /// Some stage of the fusion failed.
    Bottom,
}

impl<A> Guarded<A> {
    /// Returns `true` for `Value`.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` for `Bottom`.
    #[inline]
    pub const fn is_bottom(&self) -> bool {
        matches!(self, Self::Bottom)
    }

    /// Converts into an `Option`, with `Bottom` as `None`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Value(value) => Some(value),
            Self::Bottom => None,
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Guarded<&A> {
        match self {
            Self::Value(value) => Guarded::Value(value),
            Self::Bottom => Guarded::Bottom,
        }
    }

    /// Applies a function to a value; `Bottom` stays `Bottom`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Guarded<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Value(value) => Guarded::Value(function(value)),
            Self::Bottom => Guarded::Bottom,
        }
    }

    /// Returns the value, or `default` for `Bottom`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Value(value) => value,
            Self::Bottom => default,
        }
    }
}

impl<A> From<Outcome<A>> for Guarded<A> {
    /// `Success` becomes `Value`; the fault of a `Fault` is dropped.
    #[inline]
    fn from(outcome: Outcome<A>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Value(value),
            Outcome::Fault(_) => Self::Bottom,
        }
    }
}

impl<A> From<Guarded<A>> for Option<A> {
    #[inline]
    fn from(guarded: Guarded<A>) -> Self {
        guarded.into_option()
    }
}

impl<A: fmt::Display> fmt::Display for Guarded<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(formatter, "Value({value})"),
            Self::Bottom => write!(formatter, "Bottom"),
        }
    }
}
