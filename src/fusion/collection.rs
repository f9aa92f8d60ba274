//! Fusion with collections: key-ordered maps and arbitrary sequences.
//!
//! The step produces many values, so the projector runs once per element,
//! each time with a fresh clone of the source value. Any failure, including
//! a panic in the middle of the projection, yields an empty collection.

use std::collections::BTreeMap;

use super::enter;
use crate::effect::{Outcome, Try, capture_value};

impl<T> Try<T>
where
    T: Clone + 'static,
{
    /// Runs the source now, sequences with a map-producing step, and projects
    /// every entry's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tryfuse::effect::Try;
    ///
    /// let discount = Try::success(10_u32);
    /// let prices = discount.fuse_ordered_map(
    ///     |_| BTreeMap::from([("apple", 120_u32), ("pear", 90)]),
    ///     |discount, price| price - discount,
    /// );
    /// assert_eq!(prices, BTreeMap::from([("apple", 110), ("pear", 80)]));
    /// ```
    pub fn fuse_ordered_map<K, U, V, S, P>(&self, step: S, projector: P) -> BTreeMap<K, V>
    where
        K: Ord,
        S: FnOnce(T) -> BTreeMap<K, U>,
        P: Fn(T, U) -> V,
    {
        match enter(self, step) {
            Outcome::Success((value, entries)) => capture_value(|| {
                entries
                    .into_iter()
                    .map(|(key, inner)| (key, projector(value.clone(), inner)))
                    .collect::<BTreeMap<K, V>>()
            })
            .success()
            .unwrap_or_default(),
            Outcome::Fault(_) => BTreeMap::new(),
        }
    }

    /// Runs the source now, sequences with a step producing any iterable, and
    /// projects every element.
    ///
    /// Elements keep the order the step's iterator yields them in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Try;
    ///
    /// let word = Try::success("ab".to_string());
    /// let tagged = word.fuse_seq(|word| word.chars().collect::<Vec<_>>(), |word, letter| format!("{word}:{letter}"));
    /// assert_eq!(tagged, vec!["ab:a", "ab:b"]);
    ///
    /// let failed: Try<String> = Try::new(|| panic!("no word"));
    /// assert!(failed.fuse_seq(|word| word.into_bytes(), |_, byte| byte).is_empty());
    /// ```
    pub fn fuse_seq<I, U, V, S, P>(&self, step: S, projector: P) -> Vec<V>
    where
        I: IntoIterator<Item = U>,
        S: FnOnce(T) -> I,
        P: Fn(T, U) -> V,
    {
        match enter(self, step) {
            Outcome::Success((value, elements)) => capture_value(|| {
                elements
                    .into_iter()
                    .map(|inner| projector(value.clone(), inner))
                    .collect::<Vec<V>>()
            })
            .success()
            .unwrap_or_default(),
            Outcome::Fault(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::counting_hook;
    use crate::effect::{Fault, Try, with_fault_hook};
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    #[rstest]
    fn fuse_ordered_map_projects_each_value() {
        let fused = Try::success(100).fuse_ordered_map(
            |base| BTreeMap::from([("b", base + 2), ("a", base + 1)]),
            |base, value| value - base,
        );
        assert_eq!(fused.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 2)]);
    }

    #[rstest]
    fn fuse_ordered_map_source_fault_is_empty() {
        let calls = Cell::new(0);
        let fused: BTreeMap<i32, i32> = Try::<i32>::fault(Fault::message("none")).fuse_ordered_map(
            |n| {
                calls.set(calls.get() + 1);
                BTreeMap::from([(n, n)])
            },
            |n, m| {
                calls.set(calls.get() + 1);
                n + m
            },
        );
        assert!(fused.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn fuse_ordered_map_partial_projection_is_discarded() {
        let (reports, hook) = counting_hook();
        let fused = with_fault_hook(hook, || {
            Try::success(0).fuse_ordered_map(
                |_| BTreeMap::from([(1, 1), (2, 0)]),
                |_, divisor: i32| 10 / divisor,
            )
        });
        assert!(fused.is_empty());
        assert_eq!(reports.get(), 1);
    }

    #[rstest]
    #[case(Try::success(3), vec![3, 6, 9])]
    #[case(Try::success(0), vec![])]
    #[case(Try::new(|| panic!("source failed")), vec![])]
    fn fuse_seq_cases(#[case] source: Try<i32>, #[case] expected: Vec<i32>) {
        let fused = source.fuse_seq(|n| 1..=n, |n, k| n * k);
        assert_eq!(fused, expected);
    }

    #[rstest]
    fn fuse_seq_clones_source_per_element() {
        let fused = Try::success(vec![1]).fuse_seq(
            |_| 0..3,
            |mut values, k| {
                values.push(k);
                values.len()
            },
        );
        assert_eq!(fused, vec![2, 2, 2]);
    }

    #[rstest]
    fn fuse_seq_step_panic_is_reported_once() {
        let (reports, hook) = counting_hook();
        let fused = with_fault_hook(hook, || {
            Try::success(1).fuse_seq(|_| -> Vec<i32> { panic!("no elements") }, |n, m| n + m)
        });
        assert!(fused.is_empty());
        assert_eq!(reports.get(), 1);
    }
}
