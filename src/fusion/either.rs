//! Fusion with two-branch shapes: `Either` and `Result`.
//!
//! A failure of the source, step or projector becomes a `Left`/`Err` built
//! from the [`Fault`](crate::effect::Fault), so the left type must accept
//! one via `From`. A `Left`/`Err` produced by the step is kept as is.

use super::enter;
use crate::control::Either;
use crate::effect::{Fault, Outcome, Try, capture_value};

impl<T> Try<T>
where
    T: Clone + 'static,
{
    /// Runs the source now, sequences with an `Either` step, and projects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::control::Either;
    /// use tryfuse::effect::{Fault, Try};
    ///
    /// let balance = Try::success(100);
    /// let withdraw = |amount: i32| move |balance: i32| {
    ///     if amount <= balance { Either::Right(amount) } else { Either::Left(Fault::message("insufficient funds")) }
    /// };
    ///
    /// let ok = balance.fuse_either(withdraw(30), |balance, amount| balance - amount);
    /// assert_eq!(ok.right(), Some(70));
    ///
    /// let refused = balance.fuse_either(withdraw(300), |balance, amount| balance - amount);
    /// assert_eq!(refused.left().map(|fault| fault.to_string()), Some("insufficient funds".to_string()));
    /// ```
    pub fn fuse_either<L, U, V, S, P>(&self, step: S, projector: P) -> Either<L, V>
    where
        L: From<Fault>,
        S: FnOnce(T) -> Either<L, U>,
        P: FnOnce(T, U) -> V,
    {
        match enter(self, step) {
            Outcome::Success((value, Either::Right(inner))) => {
                match capture_value(|| projector(value, inner)) {
                    Outcome::Success(projected) => Either::Right(projected),
                    Outcome::Fault(fault) => Either::Left(L::from(fault)),
                }
            }
            Outcome::Success((_, Either::Left(left))) => Either::Left(left),
            Outcome::Fault(fault) => Either::Left(L::from(fault)),
        }
    }

    /// Runs the source now, sequences with a `Result` step, and projects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::{Fault, Try};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum LoadError {
    ///     Parse(String),
    ///     Fault(String),
    /// }
    ///
    /// impl From<Fault> for LoadError {
    ///     fn from(fault: Fault) -> Self {
    ///         Self::Fault(fault.to_string())
    ///     }
    /// }
    ///
    /// let raw = Try::success("8080".to_string());
    /// let port = raw.fuse_result(
    ///     |text| text.parse::<u16>().map_err(|error| LoadError::Parse(error.to_string())),
    ///     |_, port| port,
    /// );
    /// assert_eq!(port, Ok(8080));
    ///
    /// let broken: Try<String> = Try::new(|| panic!("config missing"));
    /// let port = broken.fuse_result(|text| Ok::<_, LoadError>(text.len()), |_, length| length);
    /// assert_eq!(port, Err(LoadError::Fault("config missing".to_string())));
    /// ```
    pub fn fuse_result<E, U, V, S, P>(&self, step: S, projector: P) -> Result<V, E>
    where
        E: From<Fault>,
        S: FnOnce(T) -> Result<U, E>,
        P: FnOnce(T, U) -> V,
    {
        self.fuse_either(|value| Either::from(step(value)), projector)
            .into()
    }
}
