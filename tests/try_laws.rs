#![cfg(feature = "effect")]
//! Property-based tests for Try laws.
//!
//! Tests the following laws using proptest:
//!
//! ## Functor Laws
//! - Identity: try.map(|x| x) == try
//! - Composition: try.map(f).map(g) == try.map(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: success(a).bind(f) == f(a)
//! - Right Identity: m.bind(success) == m
//! - Associativity: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//!
//! ## Observation Laws
//! - count is 1 for every success and 0 for every fault
//! - if_fail returns the value for a success and the default for a fault
//! - to_option is idempotent when re-wrapped with from_option

use proptest::prelude::*;
use tryfuse::effect::{Fault, Try};

fn source(value: Option<i32>) -> Try<i32> {
    match value {
        Some(value) => Try::success(value),
        None => Try::fault(Fault::message("generated fault")),
    }
}

fn half(x: i32) -> Try<i32> {
    Try::new(move || {
        assert!(x % 2 == 0, "odd");
        x / 2
    })
}

fn decrement(x: i32) -> Try<i32> {
    Try::fallible(move || x.checked_sub(1).ok_or_else(|| std::fmt::Error))
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: try.map(|x| x) == try
    #[test]
    fn prop_try_functor_identity(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(source(value).map(|x| x).run(), source(value).run());
    }

    /// Functor Composition Law: try.map(f).map(g) == try.map(|x| g(f(x)))
    #[test]
    fn prop_try_functor_composition(value in proptest::option::of(any::<i32>())) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left = source(value).map(function1).map(function2);
        let right = source(value).map(move |x| function2(function1(x)));

        prop_assert_eq!(left.run(), right.run());
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: success(a).bind(f) == f(a)
    #[test]
    fn prop_try_left_identity(value in any::<i32>()) {
        let left = Try::success(value).bind(half);
        let right = half(value);

        prop_assert_eq!(left.run(), right.run());
    }

    /// Right Identity Law: m.bind(success) == m
    #[test]
    fn prop_try_right_identity(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(source(value).bind(Try::success).run(), source(value).run());
    }

    /// Associativity Law: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
    #[test]
    fn prop_try_associativity(value in proptest::option::of(any::<i32>())) {
        let left = source(value).bind(half).bind(decrement);
        let right = source(value).bind(|x| half(x).bind(decrement));

        prop_assert_eq!(left.run(), right.run());
    }
}

// =============================================================================
// Observation Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_count_is_one_exactly_for_success(value in proptest::option::of(any::<i32>())) {
        let expected = usize::from(value.is_some());
        prop_assert_eq!(source(value).count(), expected);
    }

    #[test]
    fn prop_count_of_unit_success_is_one(_seed in any::<u8>()) {
        prop_assert_eq!(Try::success(()).count(), 1);
        prop_assert_eq!(Try::success(None::<i32>).count(), 1);
    }

    #[test]
    fn prop_if_fail_selects_value_or_default(
        value in proptest::option::of(any::<i32>()),
        default in any::<i32>(),
    ) {
        prop_assert_eq!(source(value).if_fail(default), value.unwrap_or(default));
    }

    #[test]
    fn prop_to_option_roundtrip_is_idempotent(value in proptest::option::of(any::<i32>())) {
        let once = source(value).to_option();
        let twice = Try::from_option(once).to_option();

        prop_assert_eq!(once, value);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_filter_keeps_or_marks(value in any::<i32>()) {
        let outcome = Try::success(value).filter(|x| x % 3 == 0).run();
        if value % 3 == 0 {
            prop_assert_eq!(outcome.success(), Some(value));
        } else {
            prop_assert!(outcome.fault().is_some_and(|fault| fault.is_filtered()));
        }
    }

    #[test]
    fn prop_exists_and_for_all_agree(value in proptest::option::of(any::<i32>())) {
        let predicate = |x: &i32| *x > 0;
        prop_assert_eq!(source(value).exists(predicate), source(value).for_all(predicate));
    }
}
