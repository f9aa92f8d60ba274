//! Fusion with the crate's own shapes: `Try`, `TryOption` and `Option`.

use super::enter;
use crate::effect::{Outcome, Try, TryOption, capture_value};

impl<T> Try<T>
where
    T: Clone + 'static,
{
    /// Sequences with a step returning another `Try`, then projects both values.
    ///
    /// The result stays deferred: source, step and projector run each time
    /// the fused `Try` runs. The first fault wins and keeps its identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let price = Try::success(40_u32);
    /// let total = price.fuse(|net| Try::new(move || net / 4), |net, tax| net + tax);
    /// assert_eq!(total.run_unsafe(), 50);
    ///
    /// let free = Try::success(0_u32);
    /// let ratio = free.fuse(|net| Try::new(move || 100 / net), |_, ratio| ratio);
    /// assert!(ratio.run().is_fault());
    /// ```
    pub fn fuse<U, V, S, P>(self, step: S, projector: P) -> Try<V>
    where
        S: Fn(T) -> Try<U> + 'static,
        P: Fn(T, U) -> V + 'static,
        U: 'static,
        V: 'static,
    {
        Try::from_computation(move || match enter(&self, |value| step(value).run()) {
            Outcome::Success((value, Outcome::Success(inner))) => {
                capture_value(|| projector(value, inner))
            }
            Outcome::Success((_, Outcome::Fault(fault))) | Outcome::Fault(fault) => {
                Outcome::Fault(fault)
            }
        })
    }

    /// Sequences with a step returning a `TryOption`, then projects both values.
    ///
    /// Any failure along the way collapses to `None`. The result stays deferred.
    pub fn fuse_try_option<U, V, S, P>(self, step: S, projector: P) -> TryOption<V>
    where
        S: Fn(T) -> TryOption<U> + 'static,
        P: Fn(T, U) -> V + 'static,
        U: 'static,
        V: 'static,
    {
        TryOption::from_computation(move || match enter(&self, |value| step(value).run()) {
            Outcome::Success((value, Some(inner))) => {
                capture_value(|| projector(value, inner)).success()
            }
            Outcome::Success((_, None)) | Outcome::Fault(_) => None,
        })
    }

    /// Runs the source now, sequences with an optional step, and projects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use tryfuse::effect::Try;
    ///
    /// let ages = HashMap::from([("ada", 36)]);
    /// let name = Try::success("ada");
    ///
    /// let line = name.fuse_option(|key| ages.get(key).copied(), |key, age| format!("{key}: {age}"));
    /// assert_eq!(line.as_deref(), Some("ada: 36"));
    ///
    /// let unknown = Try::success("bob").fuse_option(|key| ages.get(key).copied(), |_, age| age);
    /// assert_eq!(unknown, None);
    /// ```
    pub fn fuse_option<U, V, S, P>(&self, step: S, projector: P) -> Option<V>
    where
        S: FnOnce(T) -> Option<U>,
        P: FnOnce(T, U) -> V,
    {
        match enter(self, step) {
            Outcome::Success((value, Some(inner))) => {
                capture_value(|| projector(value, inner)).success()
            }
            Outcome::Success((_, None)) | Outcome::Fault(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::counting_hook;
    use crate::effect::{Fault, Try, TryOption, with_fault_hook};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn failing_source() -> Try<i32> {
        Try::new(|| panic!("source failed"))
    }

    #[rstest]
    fn fuse_projects_both_values() {
        let fused = Try::success(2).fuse(|n| Try::success(n * 10), |n, m| (n, m));
        assert_eq!(fused.run_unsafe(), (2, 20));
    }

    #[rstest]
    fn fuse_skips_step_and_projector_on_source_fault() {
        let calls = Rc::new(Cell::new(0));
        let step_calls = Rc::clone(&calls);
        let projector_calls = Rc::clone(&calls);
        let fused = failing_source().fuse(
            move |n| {
                step_calls.set(step_calls.get() + 1);
                Try::success(n)
            },
            move |n, m| {
                projector_calls.set(projector_calls.get() + 1);
                n + m
            },
        );
        assert_eq!(
            fused.run().fault().map(|fault| fault.to_string()),
            Some("source failed".to_string())
        );
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn fuse_keeps_the_step_fault() {
        let original = Fault::message("step fault");
        let expected = original.clone();
        let fused = Try::success(1).fuse(move |_| Try::<i32>::fault(original.clone()), |n, m| n + m);
        assert!(fused.run().fault().is_some_and(|fault| fault.same_as(&expected)));
    }

    #[rstest]
    fn fuse_is_lazy_and_rerunnable() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let source = Try::new(move || {
            counter.set(counter.get() + 1);
            1
        });
        let fused = source.fuse(|n| Try::success(n), |n, m| n + m);
        assert_eq!(runs.get(), 0);
        fused.run();
        fused.run();
        assert_eq!(runs.get(), 2);
    }

    #[rstest]
    fn fuse_reports_projector_panic_once() {
        let (reports, hook) = counting_hook();
        let outcome = with_fault_hook(hook, || {
            Try::success(1)
                .fuse(|n| Try::success(n), |_, _: i32| -> i32 { panic!("projector failed") })
                .run()
        });
        assert!(outcome.fault().is_some_and(|fault| fault.is_panic()));
        assert_eq!(reports.get(), 1);
    }

    #[rstest]
    fn fuse_try_option_collapses_failures() {
        let missing = Try::success(1).fuse_try_option(|_| TryOption::<i32>::none(), |n, m| n + m);
        assert_eq!(missing.run(), None);

        let present = Try::success(1).fuse_try_option(TryOption::some, |n, m| n + m);
        assert_eq!(present.run(), Some(2));

        let failed = failing_source().fuse_try_option(TryOption::some, |n, m| n + m);
        assert_eq!(failed.run(), None);
    }

    #[rstest]
    #[case(Try::success(4), Some(8))]
    #[case(Try::success(3), None)]
    #[case(failing_source(), None)]
    fn fuse_option_short_circuits(#[case] source: Try<i32>, #[case] expected: Option<i32>) {
        let halved = source.fuse_option(|n| (n % 2 == 0).then_some(n / 2), |n, half| n * half);
        assert_eq!(halved, expected);
    }

    #[rstest]
    fn fuse_option_captures_step_panic() {
        let (reports, hook) = counting_hook();
        let fused = with_fault_hook(hook, || {
            Try::success(1).fuse_option(|_| -> Option<i32> { panic!("lookup failed") }, |n, m| n + m)
        });
        assert_eq!(fused, None);
        assert_eq!(reports.get(), 1);
    }
}
