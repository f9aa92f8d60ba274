//! Fusion with [`State`].

use super::{Guarded, enter};
use crate::effect::{Outcome, State, Try, capture_value};

impl<T> Try<T>
where
    T: Clone + 'static,
{
    /// Sequences with a step returning a `State`, then projects both values.
    ///
    /// The result is a `State` transition. When it runs, the source, the
    /// step, the step's transition and the projector run in that order. On
    /// any failure the result is [`Guarded::Bottom`] and the state is left
    /// exactly as it was passed in, discarding any partial transition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::{State, Try};
    /// use tryfuse::fusion::Guarded;
    ///
    /// let amount = Try::success(5);
    /// let deposit = amount.fuse_state(
    ///     |amount| State::new(move |balance: i32| (balance + amount, balance + amount)),
    ///     |_, balance| balance,
    /// );
    /// assert_eq!(deposit.run(10), (Guarded::Value(15), 15));
    ///
    /// let invalid: Try<i32> = Try::new(|| panic!("amount unreadable"));
    /// let deposit = invalid.fuse_state(|amount| State::modify(move |b: i32| b + amount), |_, ()| ());
    /// assert_eq!(deposit.run(10), (Guarded::Bottom, 10));
    /// ```
    pub fn fuse_state<S, U, V, St, P>(self, step: St, projector: P) -> State<S, Guarded<V>>
    where
        S: Clone + 'static,
        St: Fn(T) -> State<S, U> + 'static,
        P: Fn(T, U) -> V + 'static,
        U: 'static,
        V: 'static,
    {
        State::new(move |state: S| {
            let initial = state.clone();
            match enter(&self, |value| step(value).run(state)) {
                Outcome::Success((value, (inner, next))) => {
                    match capture_value(|| projector(value, inner)) {
                        Outcome::Success(projected) => (Guarded::Value(projected), next),
                        Outcome::Fault(_) => (Guarded::Bottom, initial),
                    }
                }
                Outcome::Fault(_) => (Guarded::Bottom, initial),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::counting_hook;
    use crate::effect::{Fault, State, Try, with_fault_hook};
    use crate::fusion::Guarded;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn push(n: i32) -> State<Vec<i32>, usize> {
        State::new(move |mut stack: Vec<i32>| {
            stack.push(n);
            (stack.len(), stack)
        })
    }

    #[rstest]
    fn fuse_state_threads_the_state() {
        let fused = Try::success(7).fuse_state(push, |n, depth| (n, depth));
        assert_eq!(fused.run(vec![1]), (Guarded::Value((7, 2)), vec![1, 7]));
    }

    #[rstest]
    fn fuse_state_source_fault_keeps_input_state() {
        let calls = Rc::new(Cell::new(0));
        let step_calls = Rc::clone(&calls);
        let projector_calls = Rc::clone(&calls);
        let fused = Try::<i32>::fault(Fault::message("empty")).fuse_state(
            move |n| {
                step_calls.set(step_calls.get() + 1);
                push(n)
            },
            move |_, depth| {
                projector_calls.set(projector_calls.get() + 1);
                depth
            },
        );
        assert_eq!(fused.run(vec![3]), (Guarded::Bottom, vec![3]));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn fuse_state_projector_panic_rolls_back() {
        let (reports, hook) = counting_hook();
        let fused = Try::success(9).fuse_state(push, |_, _| -> usize { panic!("projection failed") });
        let result = with_fault_hook(hook, || fused.run(vec![]));
        assert_eq!(result, (Guarded::Bottom, vec![]));
        assert_eq!(reports.get(), 1);
    }

    #[rstest]
    fn fuse_state_reruns_on_every_run() {
        let fused = Try::success(1).fuse_state(push, |_, depth| depth);
        assert_eq!(fused.eval(vec![]), Guarded::Value(1));
        assert_eq!(fused.eval(vec![0, 0]), Guarded::Value(3));
    }
}
