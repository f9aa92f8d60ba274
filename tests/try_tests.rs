#![cfg(feature = "effect")]
//! Integration tests for the Try effect.
//!
//! This module checks that computations are deferred, that every failure is
//! captured into an `Outcome`, and that the diagnostic hook sees each
//! captured fault exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tryfuse::control::Either;
use tryfuse::effect::{Fault, FaultKind, Outcome, Try, with_fault_hook};

fn divide(numerator: i32, denominator: i32) -> Try<i32> {
    Try::new(move || numerator / denominator)
}

fn recording_hook() -> (Rc<RefCell<Vec<String>>>, impl Fn(&Fault) + 'static) {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&seen);
    (seen, move |fault: &Fault| sink.borrow_mut().push(fault.to_string()))
}

// =============================================================================
// End-to-End
// =============================================================================

mod end_to_end {
    use super::*;

    #[test]
    fn test_divide_by_two_then_increment() {
        assert_eq!(divide(10, 2).map(|x| x + 1).if_fail(-1), 6);
    }

    #[test]
    fn test_divide_by_zero_then_increment_falls_back() {
        assert_eq!(divide(10, 0).map(|x| x + 1).if_fail(-1), -1);
    }

    #[test]
    fn test_divide_by_zero_reports_to_hook() {
        let (seen, hook) = recording_hook();
        let outcome = with_fault_hook(hook, || divide(10, 0).map(|x| x + 1).run());
        assert!(outcome.is_fault());
        assert_eq!(*seen.borrow(), vec!["attempt to divide by zero"]);
    }
}

// =============================================================================
// Deferral
// =============================================================================

mod deferral {
    use super::*;

    #[test]
    fn test_composition_runs_nothing() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let _composed = Try::new(move || {
            counter.set(counter.get() + 1);
            1
        })
        .map(|x| x + 1)
        .bind(|x| Try::success(x * 2))
        .filter(|x| *x > 0);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_every_run_reexecutes() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let computation = Try::new(move || {
            counter.set(counter.get() + 1);
            counter.get()
        });
        assert_eq!(computation.run_unsafe(), 1);
        assert_eq!(computation.run_unsafe(), 2);
        assert_eq!(computation.clone().run_unsafe(), 3);
    }

    #[test]
    fn test_rerun_of_failing_try_reports_again() {
        let (seen, hook) = recording_hook();
        let failing = divide(1, 0);
        with_fault_hook(hook, || {
            let first = failing.run();
            let second = failing.run();
            let first_fault = first.fault().expect("first run fails");
            let second_fault = second.fault().expect("second run fails");
            assert!(!first_fault.same_as(&second_fault));
        });
        assert_eq!(seen.borrow().len(), 2);
    }
}

// =============================================================================
// Short-Circuiting
// =============================================================================

mod short_circuit {
    use super::*;

    #[test]
    fn test_bind_never_calls_binder_on_fault() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let bound = divide(1, 0).bind(move |x| {
            counter.set(counter.get() + 1);
            Try::success(x)
        });
        assert!(bound.run().is_fault());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_binder_panic_is_captured() {
        let bound = Try::success(1).bind(|_| -> Try<i32> { panic!("binder failed") });
        assert_eq!(
            bound.run().fault().map(|fault| fault.to_string()),
            Some("binder failed".to_string())
        );
    }

    #[test]
    fn test_read_of_captured_fault_does_not_report_again() {
        let (seen, hook) = recording_hook();
        with_fault_hook(hook, || {
            let outcome = divide(1, 0).run();
            for _ in 0..3 {
                let _ = outcome.clone().into_result();
                let _ = Try::from_outcome(outcome.clone()).match_with(|_| 0, |_| 1);
            }
        });
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_success_path_never_reports() {
        let (seen, hook) = recording_hook();
        let value = with_fault_hook(hook, || {
            Try::success(5)
                .map(|x| x * 2)
                .bind(|x| Try::new(move || x + 1))
                .filter(|x| *x == 11)
                .run_unsafe()
        });
        assert_eq!(value, 11);
        assert!(seen.borrow().is_empty());
    }
}

// =============================================================================
// Filter
// =============================================================================

mod filter {
    use super::*;

    #[test]
    fn test_rejected_value_becomes_filtered_fault() {
        let fault = Try::success(3).filter(|x| *x > 5).run().fault().expect("rejected");
        assert_eq!(fault.to_string(), "Filtered");
        assert_eq!(fault.kind(), FaultKind::Filtered);
    }

    #[test]
    fn test_accepted_value_is_the_same_value() {
        let shared = Rc::new(7);
        let source = Rc::clone(&shared);
        let kept = Try::new(move || Rc::clone(&source)).filter(|_| true).run_unsafe();
        assert!(Rc::ptr_eq(&kept, &shared));
    }
}

// =============================================================================
// Errors
// =============================================================================

mod errors {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded for {0}")]
    struct QuotaError(&'static str);

    #[test]
    fn test_fallible_error_keeps_its_type() {
        let fault = Try::<u32>::fallible(|| Err(QuotaError("alice")))
            .run()
            .fault()
            .expect("error is captured");
        assert_eq!(fault.kind(), FaultKind::Error);
        assert_eq!(fault.to_string(), "quota exceeded for alice");
        assert!(fault.as_error().downcast_ref::<QuotaError>().is_some());
    }

    #[test]
    fn test_try_run_returns_result() {
        assert_eq!(Try::success(2).try_run().ok(), Some(2));
        assert!(divide(2, 0).try_run().is_err());
    }

    #[test]
    fn test_run_unsafe_raises_the_fault() {
        let failing = Try::<i32>::fault(Fault::message("explicit"));
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| failing.run_unsafe()))
            .expect_err("run_unsafe raises");
        let fault = Fault::from_panic(payload);
        assert_eq!(fault.to_string(), "explicit");
    }
}

// =============================================================================
// Adapters
// =============================================================================

mod adapters {
    use super::*;

    #[test]
    fn test_to_option_discards_fault() {
        assert_eq!(divide(8, 2).to_option(), Some(4));
        assert_eq!(divide(8, 0).to_option(), None);
    }

    #[test]
    fn test_to_iter_keeps_fault_visible() {
        let items: Vec<Either<Fault, i32>> = divide(8, 0).to_iter().collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_left());

        let items = divide(8, 2).to_boxed_slice();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Either::Right(4)));
    }

    #[test]
    fn test_outcome_to_either() {
        let either: Either<Fault, i32> = Outcome::Success(1).into();
        assert_eq!(either.right(), Some(1));
    }
}
