//! Fluent contexts staging a success handler until a fault handler arrives.
//!
//! A context is produced by [`Try::on_success`] or [`Try::on_success_do`] and
//! has no accessors of its own: the only thing to do with it is to supply the
//! fault side, which runs the source once and returns the final result.

use super::fault::Fault;
use super::try_effect::Try;

/// A [`Try`] paired with a staged success handler.
///
/// # Examples
///
/// ```rust
/// use tryfuse::effect::Try;
///
/// let length = Try::success("hello").on_success(str::len).or_value(0);
/// assert_eq!(length, 5);
/// ```
#[must_use = "a staged success handler does nothing until a fault handler is supplied"]
pub struct SuccessContext<T, F>
where
    T: 'static,
{
    source: Try<T>,
    on_success: F,
}

impl<T, F> SuccessContext<T, F>
where
    T: 'static,
{
    pub(crate) const fn new(source: Try<T>, on_success: F) -> Self {
        Self { source, on_success }
    }
}

impl<T, R, F> SuccessContext<T, F>
where
    T: 'static,
    F: FnOnce(T) -> R,
{
    /// Supplies the fault handler and runs the source.
    pub fn on_fault<G>(self, on_fault: G) -> R
    where
        G: FnOnce(Fault) -> R,
    {
        self.source.match_with(self.on_success, on_fault)
    }

    /// Supplies a constant for the fault branch and runs the source.
    pub fn or_value(self, fallback: R) -> R {
        self.source.match_or(self.on_success, fallback)
    }
}

/// A [`Try`] paired with a staged effect-only success handler.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use tryfuse::effect::Try;
///
/// let log = RefCell::new(Vec::new());
/// Try::<i32>::new(|| panic!("unreachable host"))
///     .on_success_do(|value| log.borrow_mut().push(format!("ok {value}")))
///     .on_fault(|fault| log.borrow_mut().push(format!("failed: {fault}")));
/// assert_eq!(*log.borrow(), vec!["failed: unreachable host"]);
/// ```
#[must_use = "a staged success handler does nothing until a fault handler is supplied"]
pub struct SuccessUnitContext<T, F>
where
    T: 'static,
{
    source: Try<T>,
    action: F,
}

impl<T, F> SuccessUnitContext<T, F>
where
    T: 'static,
    F: FnOnce(T),
{
    pub(crate) const fn new(source: Try<T>, action: F) -> Self {
        Self { source, action }
    }

    /// Supplies the fault handler and runs the source.
    pub fn on_fault<G>(self, on_fault: G)
    where
        G: FnOnce(Fault),
    {
        self.source.match_with(self.action, on_fault);
    }

    /// Runs the source, performing the action on success and nothing on failure.
    pub fn or_ignore(self) {
        self.source.if_succ(self.action);
    }
}
