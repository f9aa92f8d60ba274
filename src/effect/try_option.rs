//! `TryOption` - a deferred optional computation.
//!
//! `TryOption<T>` is the optional-valued sibling of [`Try`](super::Try): it
//! runs on demand and yields `Option<T>`. A panic inside any step collapses to
//! `None` (after being reported to the diagnostic hook), exactly as
//! [`Try::to_option`](super::Try::to_option) collapses a fault.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::{Try, TryOption};
//!
//! let lookup = TryOption::new(|| std::env::var("TRYFUSE_UNSET_VARIABLE").ok());
//! assert_eq!(lookup.map(|value| value.len()).run(), None);
//!
//! let deferred = Try::success(4).to_try_option().filter(|n| *n > 3);
//! assert_eq!(deferred.run(), Some(4));
//! ```

use std::fmt;
use std::rc::Rc;

use super::capture::{capture, capture_value};
use super::outcome::Outcome;

/// A deferred computation yielding an optional value.
pub struct TryOption<T>
where
    T: 'static,
{
    computation: Rc<dyn Fn() -> Option<T>>,
}

impl<T> TryOption<T>
where
    T: 'static,
{
    pub(crate) fn from_computation<F>(computation: F) -> Self
    where
        F: Fn() -> Option<T> + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// Creates a `TryOption` from a closure; a panic yields `None`.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn() -> Option<T> + 'static,
    {
        Self::from_computation(move || capture_value(&body).success().flatten())
    }

    /// Always yields a clone of `value`.
    pub fn some(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_computation(move || Some(value.clone()))
    }

    /// Always yields `None`.
    pub fn none() -> Self {
        Self::from_computation(|| None)
    }

    /// Runs the computation.
    pub fn run(&self) -> Option<T> {
        capture(|| Outcome::Success((self.computation)()))
            .success()
            .flatten()
    }

    /// Transforms the value; a panic inside `function` yields `None`.
    pub fn map<U, F>(self, function: F) -> TryOption<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        TryOption::from_computation(move || {
            self.run()
                .and_then(|value| capture_value(|| function(value)).success())
        })
    }

    /// Chains a computation that depends on the value.
    pub fn bind<U, F>(self, binder: F) -> TryOption<U>
    where
        F: Fn(T) -> TryOption<U> + 'static,
        U: 'static,
    {
        TryOption::from_computation(move || {
            self.run().and_then(|value| {
                capture_value(|| binder(value).run())
                    .success()
                    .flatten()
            })
        })
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::from_computation(move || {
            self.run().filter(|value| {
                capture_value(|| predicate(value))
                    .success()
                    .unwrap_or(false)
            })
        })
    }

    /// Runs the computation, substituting `default` for `None`.
    pub fn if_none(&self, default: T) -> T {
        self.run().unwrap_or(default)
    }

    /// Alias for [`TryOption::run`].
    pub fn to_option(&self) -> Option<T> {
        self.run()
    }
}

impl<T> Clone for TryOption<T>
where
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<T> fmt::Debug for TryOption<T>
where
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("TryOption(<deferred>)")
    }
}
