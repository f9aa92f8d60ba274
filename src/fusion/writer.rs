//! Fusion with [`Writer`].

use super::{Guarded, enter};
use crate::effect::{Outcome, Try, Writer, capture_value};
use crate::typeclass::Monoid;

impl<T> Try<T>
where
    T: Clone + 'static,
{
    /// Runs the source now, sequences with a `Writer` step, and projects.
    ///
    /// On success the step's output is kept next to the projected value. If
    /// the source or the step fails, the result is [`Guarded::Bottom`] with
    /// empty output. If only the projector fails, the step already produced
    /// its output, so that output is kept next to `Bottom`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::{Try, Writer};
    /// use tryfuse::fusion::Guarded;
    ///
    /// let order = Try::success(3_u32);
    /// let priced = order.fuse_writer(
    ///     |quantity| Writer::new(quantity * 250, vec![format!("priced {quantity} items")]),
    ///     |_, cents| cents,
    /// );
    ///
    /// let (total, log) = priced.into_parts();
    /// assert_eq!(total, Guarded::Value(750));
    /// assert_eq!(log, vec!["priced 3 items"]);
    /// ```
    pub fn fuse_writer<W, U, V, S, P>(&self, step: S, projector: P) -> Writer<W, Guarded<V>>
    where
        W: Monoid + 'static,
        S: FnOnce(T) -> Writer<W, U>,
        P: FnOnce(T, U) -> V,
        U: 'static,
        V: 'static,
    {
        match enter(self, step) {
            Outcome::Success((value, writer)) => {
                let (inner, output) = writer.into_parts();
                Writer::new(capture_value(|| projector(value, inner)).into(), output)
            }
            Outcome::Fault(_) => Writer::new(Guarded::Bottom, W::empty()),
        }
    }
}
