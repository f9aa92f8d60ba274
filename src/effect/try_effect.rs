//! Try - a deferred computation that captures its own failures.
//!
//! A `Try<T>` describes work that produces a `T` or fails. Nothing runs when
//! a `Try` is built or composed; the work happens each time [`Try::run`] is
//! called, and it happens again on every call. No result is cached.
//!
//! Running a `Try` never unwinds into the caller. A panic or an `Err` raised
//! by any step is captured into [`Outcome::Fault`] at the step where it
//! arose, reported once to the diagnostic hook, and passed through every
//! later step untouched. The only way to turn a fault back into a panic is
//! the explicit [`Try::run_unsafe`].
//!
//! # Laws
//!
//! For pure functions, `Try` satisfies the Functor and Monad laws with
//! respect to the outcomes it produces:
//!
//! - Identity: `t.map(|x| x)` runs to the same outcome as `t`
//! - Left Identity: `Try::success(a).bind(f)` runs to the same outcome as `f(a)`
//! - Right Identity: `t.bind(Try::success)` runs to the same outcome as `t`
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::Try;
//!
//! fn divide(numerator: i32, denominator: i32) -> Try<i32> {
//!     Try::new(move || numerator / denominator)
//! }
//!
//! let computed = divide(10, 2).map(|x| x + 1);
//! assert_eq!(computed.if_fail(-1), 6);
//!
//! let divided_by_zero = divide(10, 0).map(|x| x + 1);
//! assert_eq!(divided_by_zero.if_fail(-1), -1);
//! ```

use std::fmt;
use std::rc::Rc;

use super::capture::{capture, capture_result, capture_value};
use super::context::{SuccessContext, SuccessUnitContext};
use super::fault::Fault;
use super::outcome::Outcome;
use super::try_option::TryOption;
use crate::control::Either;

/// A deferred, re-runnable computation that yields an [`Outcome`].
///
/// Cloning a `Try` shares the underlying computation, never a result.
///
/// # Type Parameters
///
/// - `T`: The success value type.
pub struct Try<T>
where
    T: 'static,
{
    computation: Rc<dyn Fn() -> Outcome<T>>,
}

impl<T> Try<T>
where
    T: 'static,
{
    pub(crate) fn from_computation<F>(computation: F) -> Self
    where
        F: Fn() -> Outcome<T> + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// Creates a `Try` from a closure that may panic.
    ///
    /// The closure runs every time the `Try` is run, never at construction.
    ///
    /// A panic in the closure is captured, but the standard panic hook still
    /// runs first and prints the usual `panicked at` message to stderr. See
    /// the crate documentation for silencing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let parsed: Try<i32> = Try::new(|| "42".parse::<i32>().unwrap());
    /// assert_eq!(parsed.run_unsafe(), 42);
    ///
    /// let broken: Try<i32> = Try::new(|| "forty".parse::<i32>().unwrap());
    /// assert!(broken.run().is_fault());
    /// ```
    pub fn new<F>(body: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self::from_computation(move || capture_value(&body))
    }

    /// Creates a `Try` from a closure that reports failure through `Err`.
    ///
    /// Any error convertible into a [`Fault`] works, which includes every
    /// `std::error::Error + Send + Sync` type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::{FaultKind, Try};
    ///
    /// let parsed = Try::fallible(|| "17".parse::<u8>());
    /// assert_eq!(parsed.run_unsafe(), 17);
    ///
    /// let rejected = Try::fallible(|| "300".parse::<u8>());
    /// let fault = rejected.run().fault().unwrap();
    /// assert_eq!(fault.kind(), FaultKind::Error);
    /// ```
    pub fn fallible<F, E>(body: F) -> Self
    where
        F: Fn() -> Result<T, E> + 'static,
        E: Into<Fault>,
    {
        Self::from_computation(move || capture_result(&body))
    }

    /// Creates a `Try` that always succeeds with a clone of `value`.
    pub fn success(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_computation(move || Outcome::Success(value.clone()))
    }

    /// Creates a `Try` that always fails with `fault`.
    ///
    /// Nothing is captured here, so the diagnostic hook is not notified.
    pub fn fault(fault: Fault) -> Self {
        Self::from_computation(move || Outcome::Fault(fault.clone()))
    }

    /// Creates a `Try` that always yields `outcome`.
    pub fn from_outcome(outcome: Outcome<T>) -> Self
    where
        T: Clone,
    {
        Self::from_computation(move || outcome.clone())
    }

    /// Creates a `Try` from an optional value; `None` becomes [`Fault::absent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// assert_eq!(Try::from_option(Some(3)).to_option(), Some(3));
    /// assert_eq!(Try::<i32>::from_option(None).to_option(), None);
    /// ```
    pub fn from_option(option: Option<T>) -> Self
    where
        T: Clone,
    {
        match option {
            Some(value) => Self::success(value),
            None => Self::fault(Fault::absent()),
        }
    }

    // =========================================================================
    // Invocation
    // =========================================================================

    /// Runs the computation and returns its outcome.
    ///
    /// This never panics: failures of the computation, and of the glue
    /// around it, are returned as [`Outcome::Fault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::{Outcome, Try};
    ///
    /// let answer = Try::new(|| 6 * 7);
    /// assert_eq!(answer.run(), Outcome::Success(42));
    /// // Running again re-executes the computation.
    /// assert_eq!(answer.run(), Outcome::Success(42));
    /// ```
    pub fn run(&self) -> Outcome<T> {
        capture(|| (self.computation)())
    }

    /// Runs the computation and returns a standard `Result`.
    pub fn try_run(&self) -> Result<T, Fault> {
        self.run().into_result()
    }

    /// Runs the computation and returns the value, raising a fault as a panic.
    ///
    /// A `Try` that captures this panic, or [`Fault::from_panic`], recovers
    /// the same fault, and the diagnostic hook is not notified a second time.
    ///
    /// # Panics
    ///
    /// Panics if the computation fails.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use tryfuse::effect::Try;
    ///
    /// let failing: Try<i32> = Try::new(|| panic!("no value"));
    /// failing.run_unsafe();
    /// ```
    pub fn run_unsafe(&self) -> T {
        self.run().unwrap_or_raise()
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the success value.
    ///
    /// The function is not called when the source fails; a panic inside the
    /// function becomes the fault of the resulting `Try`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let doubled = Try::success(21).map(|x| x * 2);
    /// assert_eq!(doubled.run_unsafe(), 42);
    /// ```
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        Try::from_computation(move || match self.run() {
            Outcome::Success(value) => capture_value(|| function(value)),
            Outcome::Fault(fault) => Outcome::Fault(fault),
        })
    }

    /// Chains a computation that depends on the success value.
    ///
    /// The binder is never called when the source fails. Failures of the
    /// binder, and of the `Try` it returns, become the resulting fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let checked_half = |n: i32| Try::new(move || {
    ///     assert!(n % 2 == 0, "odd input");
    ///     n / 2
    /// });
    ///
    /// assert_eq!(Try::success(10).bind(checked_half).run_unsafe(), 5);
    /// assert!(Try::success(7).bind(checked_half).run().is_fault());
    /// ```
    pub fn bind<U, F>(self, binder: F) -> Try<U>
    where
        F: Fn(T) -> Try<U> + 'static,
        U: 'static,
    {
        Try::from_computation(move || match self.run() {
            Outcome::Success(value) => capture(|| binder(value).run()),
            Outcome::Fault(fault) => Outcome::Fault(fault),
        })
    }

    /// Alias for [`Try::bind`].
    pub fn and_then<U, F>(self, binder: F) -> Try<U>
    where
        F: Fn(T) -> Try<U> + 'static,
        U: 'static,
    {
        self.bind(binder)
    }

    /// Chains a fallible step that reports failure through `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let port = Try::success("8080".to_string()).bind_result(|text| text.parse::<u16>());
    /// assert_eq!(port.run_unsafe(), 8080);
    /// ```
    pub fn bind_result<U, E, F>(self, step: F) -> Try<U>
    where
        F: Fn(T) -> Result<U, E> + 'static,
        E: Into<Fault>,
        U: 'static,
    {
        Try::from_computation(move || match self.run() {
            Outcome::Success(value) => capture_result(|| step(value)),
            Outcome::Fault(fault) => Outcome::Fault(fault),
        })
    }

    /// Keeps the success value only if the predicate accepts it.
    ///
    /// A rejected value becomes the [`Fault::filtered`] sentinel, whose
    /// description is `"Filtered"`. An accepted value passes through as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let even = Try::success(4).filter(|n| n % 2 == 0);
    /// assert_eq!(even.run_unsafe(), 4);
    ///
    /// let odd = Try::success(3).filter(|n| n % 2 == 0);
    /// assert_eq!(odd.run().fault().unwrap().to_string(), "Filtered");
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::from_computation(move || match self.run() {
            Outcome::Success(value) => match capture_value(|| predicate(&value)) {
                Outcome::Success(true) => Outcome::Success(value),
                Outcome::Success(false) => Outcome::Fault(Fault::filtered()),
                Outcome::Fault(fault) => Outcome::Fault(fault),
            },
            Outcome::Fault(fault) => Outcome::Fault(fault),
        })
    }

    /// Maps both branches into a success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::{Fault, Try};
    ///
    /// let described = Try::<i32>::fault(Fault::message("offline"))
    ///     .bi_map(|n| format!("value {n}"), |fault| format!("error {fault}"));
    /// assert_eq!(described.run_unsafe(), "error offline");
    /// ```
    pub fn bi_map<U, S, F>(self, on_success: S, on_fault: F) -> Try<U>
    where
        S: Fn(T) -> U + 'static,
        F: Fn(Fault) -> U + 'static,
        U: 'static,
    {
        Try::from_computation(move || match self.run() {
            Outcome::Success(value) => capture_value(|| on_success(value)),
            Outcome::Fault(fault) => capture_value(|| on_fault(fault)),
        })
    }

    /// Falls back to another `Try` when this one fails.
    ///
    /// The fallback only runs if the source fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let primary: Try<&str> = Try::new(|| panic!("primary down"));
    /// let answer = primary.or_else(Try::success("replica"));
    /// assert_eq!(answer.run_unsafe(), "replica");
    /// ```
    pub fn or_else(self, fallback: Self) -> Self {
        Self::from_computation(move || match self.run() {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Fault(_) => fallback.run(),
        })
    }

    /// Recovers from a fault with a computation chosen from the fault.
    pub fn recover<F>(self, handler: F) -> Self
    where
        F: Fn(Fault) -> Self + 'static,
    {
        Self::from_computation(move || match self.run() {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Fault(fault) => capture(|| handler(fault).run()),
        })
    }

    /// Observes a fault without changing it.
    ///
    /// The observer only runs on failure. If the observer itself panics, that
    /// panic becomes the fault of the resulting `Try`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use tryfuse::effect::{Fault, Try};
    ///
    /// let seen: Rc<RefCell<Option<String>>> = Rc::default();
    /// let sink = Rc::clone(&seen);
    /// let observed = Try::<i32>::fault(Fault::message("timeout"))
    ///     .inspect_fault(move |fault| *sink.borrow_mut() = Some(fault.to_string()));
    ///
    /// assert!(observed.run().is_fault());
    /// assert_eq!(seen.borrow().as_deref(), Some("timeout"));
    /// ```
    pub fn inspect_fault<F>(self, observer: F) -> Self
    where
        F: Fn(&Fault) + 'static,
    {
        Self::from_computation(move || match self.run() {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Fault(fault) => match capture_value(|| observer(&fault)) {
                Outcome::Success(()) => Outcome::Fault(fault),
                Outcome::Fault(observer_fault) => Outcome::Fault(observer_fault),
            },
        })
    }

    // =========================================================================
    // Eliminators
    // =========================================================================

    /// Runs the computation and hands the result to exactly one handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let summary = Try::success(3).match_with(|n| n * 10, |_| 0);
    /// assert_eq!(summary, 30);
    /// ```
    pub fn match_with<R, S, F>(&self, on_success: S, on_fault: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Fault) -> R,
    {
        match self.run() {
            Outcome::Success(value) => on_success(value),
            Outcome::Fault(fault) => on_fault(fault),
        }
    }

    /// Like [`Try::match_with`], with a constant for the fault branch.
    pub fn match_or<R, S>(&self, on_success: S, fallback: R) -> R
    where
        S: FnOnce(T) -> R,
    {
        self.match_with(on_success, |_| fallback)
    }

    /// Returns the success value, or `default` if the computation fails.
    ///
    /// `default` is an owned `T`, so a missing default cannot be expressed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let failing: Try<i32> = Try::new(|| panic!("nope"));
    /// assert_eq!(failing.if_fail(-1), -1);
    /// assert_eq!(Try::success(5).if_fail(-1), 5);
    /// ```
    pub fn if_fail(&self, default: T) -> T {
        self.match_with(|value| value, |_| default)
    }

    /// Returns the success value, or the result of `default` if the computation fails.
    ///
    /// `default` is only called on failure.
    pub fn if_fail_with<F>(&self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|value| value, |_| default())
    }

    /// Returns the success value, or a value derived from the fault.
    pub fn if_fail_else<F>(&self, handler: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        self.match_with(|value| value, handler)
    }

    /// Runs `action` with the success value; does nothing on failure.
    pub fn if_succ<F>(&self, action: F)
    where
        F: FnOnce(T),
    {
        if let Outcome::Success(value) = self.run() {
            action(value);
        }
    }

    /// Folds the success value into `seed`; a failure returns `seed` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::{Fault, Try};
    ///
    /// assert_eq!(Try::success(5).fold(10, |total, n| total + n), 15);
    /// assert_eq!(Try::<i32>::fault(Fault::message("x")).fold(10, |total, n| total + n), 10);
    /// ```
    pub fn fold<S, F>(&self, seed: S, combine: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self.run() {
            Outcome::Success(value) => combine(seed, value),
            Outcome::Fault(_) => seed,
        }
    }

    /// Returns `pred(value)` on success and `false` on failure.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.match_with(|value| predicate(&value), |_| false)
    }

    /// Returns `pred(value)` on success and `false` on failure.
    ///
    /// A `Try` holds at most one value, so this agrees with
    /// [`Try::exists`]; in particular a failed `Try` is *not* vacuously
    /// accepted.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.match_with(|value| predicate(&value), |_| false)
    }

    /// Returns `1` on success and `0` on failure.
    pub fn count(&self) -> usize {
        usize::from(self.run().is_success())
    }

    // =========================================================================
    // Conversion Adapters
    // =========================================================================

    /// Runs the computation and keeps only a success value.
    ///
    /// The fault is discarded; this cannot be undone.
    pub fn to_option(&self) -> Option<T> {
        self.run().success()
    }

    /// Converts into a deferred optional computation without running anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let lazy = Try::<i32>::new(|| panic!("later")).to_try_option();
    /// assert_eq!(lazy.run(), None);
    /// ```
    pub fn to_try_option(self) -> TryOption<T> {
        TryOption::from_computation(move || self.run().success())
    }

    /// Runs the computation and yields its outcome as a one-element sequence.
    ///
    /// Unlike [`Try::to_option`], a fault stays observable as `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::control::Either;
    /// use tryfuse::effect::Try;
    ///
    /// let values: Vec<_> = Try::success(1).to_iter().collect();
    /// assert_eq!(values.len(), 1);
    /// assert!(matches!(values[0], Either::Right(1)));
    /// ```
    pub fn to_iter(&self) -> std::option::IntoIter<Either<Fault, T>> {
        Some(Either::from(self.run())).into_iter()
    }

    /// Same as [`Try::to_iter`], collected into a `Vec`.
    pub fn to_vec(&self) -> Vec<Either<Fault, T>> {
        self.to_iter().collect()
    }

    /// Same as [`Try::to_iter`], collected into a boxed slice.
    pub fn to_boxed_slice(&self) -> Box<[Either<Fault, T>]> {
        self.to_iter().collect()
    }

    // =========================================================================
    // Fluent Contexts
    // =========================================================================

    /// Stages a success handler; complete it with a fault handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let message = Try::success(200)
    ///     .on_success(|status| format!("status {status}"))
    ///     .on_fault(|fault| format!("failed: {fault}"));
    /// assert_eq!(message, "status 200");
    /// ```
    pub fn on_success<R, F>(self, on_success: F) -> SuccessContext<T, F>
    where
        F: FnOnce(T) -> R,
    {
        SuccessContext::new(self, on_success)
    }

    /// Stages an effect-only success handler; complete it with a fault handler.
    pub fn on_success_do<F>(self, action: F) -> SuccessUnitContext<T, F>
    where
        F: FnOnce(T),
    {
        SuccessUnitContext::new(self, action)
    }
}

impl<T> Clone for Try<T>
where
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<T> fmt::Debug for Try<T>
where
    T: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Try(<deferred>)")
    }
}

static_assertions::assert_not_impl_any!(Try<i32>: Send, Sync);
