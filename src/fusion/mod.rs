//! Cross-effect fusion: sequencing a `Try` with a step of another shape.
//!
//! Every fusion takes a source [`Try<T>`], a step `T -> E<U>` producing a
//! value of some foreign shape `E`, and a projector `(T, U) -> V`. The result
//! is a value of the foreign shape carrying `V` (or a `Try<V>` when the step
//! itself returns a `Try`).
//!
//! All members follow the same order of evaluation:
//!
//! 1. Run the source. If it fails, return the shape's failure representative
//!    without calling the step or the projector.
//! 2. Call the step. If it panics, or returns the shape's own failure, return
//!    the failure representative (an `Either`/`Result` keeps its own `Left`).
//! 3. Call the projector with the source value and the unwrapped step value.
//!    A panic here also yields the failure representative.
//! 4. Wrap the projector's result in the shape's success representative.
//!
//! | method | step returns | result | on failure |
//! |---|---|---|---|
//! | [`fuse`](Try::fuse) | `Try<U>` | `Try<V>` | the fault |
//! | [`fuse_try_option`](Try::fuse_try_option) | `TryOption<U>` | `TryOption<V>` | `None` |
//! | [`fuse_option`](Try::fuse_option) | `Option<U>` | `Option<V>` | `None` |
//! | [`fuse_either`](Try::fuse_either) | `Either<L, U>` | `Either<L, V>` | `Left` |
//! | [`fuse_result`](Try::fuse_result) | `Result<U, E>` | `Result<V, E>` | `Err` |
//! | [`fuse_reader`](Try::fuse_reader) | `Reader<R, U>` | `Reader<R, Guarded<V>>` | [`Guarded::Bottom`] |
//! | [`fuse_writer`](Try::fuse_writer) | `Writer<W, U>` | `Writer<W, Guarded<V>>` | [`Guarded::Bottom`] |
//! | [`fuse_state`](Try::fuse_state) | `State<S, U>` | `State<S, Guarded<V>>` | [`Guarded::Bottom`], input state kept |
//! | [`fuse_ordered_map`](Try::fuse_ordered_map) | `BTreeMap<K, U>` | `BTreeMap<K, V>` | empty map |
//! | [`fuse_seq`](Try::fuse_seq) | `impl IntoIterator<Item = U>` | `Vec<V>` | empty `Vec` |
//!
//! Fusions whose result is itself deferred (`Try`, `TryOption`, `Reader`,
//! `State`) run the source each time the result runs. The others run the
//! source immediately.
//!
//! Every panic or error caught along the way reaches the diagnostic hook
//! exactly once.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::Try;
//!
//! let user_id = Try::success(7_u32);
//! let greeting = user_id.fuse_option(
//!     |id| if id == 7 { Some("ada") } else { None },
//!     |id, name| format!("#{id} {name}"),
//! );
//! assert_eq!(greeting.as_deref(), Some("#7 ada"));
//! ```

mod collection;
mod either;
mod guarded;
mod reader;
mod state;
mod try_shape;
mod writer;

pub use guarded::Guarded;

use crate::effect::{Outcome, Try, capture_value};

/// Runs the source and then the step, in that order.
///
/// Yields the source value alongside whatever the step produced, or the
/// first fault. The step is never called when the source fails, and a panic
/// inside the step is captured.
pub(crate) fn enter<T, X, S>(source: &Try<T>, step: S) -> Outcome<(T, X)>
where
    T: Clone + 'static,
    S: FnOnce(T) -> X,
{
    match source.run() {
        Outcome::Success(value) => {
            let input = value.clone();
            capture_value(move || step(input)).map(|foreign| (value, foreign))
        }
        Outcome::Fault(fault) => Outcome::Fault(fault),
    }
}

/// A hook that counts reports, for asserting the exactly-once guarantee.
#[cfg(test)]
fn counting_hook() -> (
    std::rc::Rc<std::cell::Cell<usize>>,
    impl Fn(&crate::effect::Fault) + 'static,
) {
    let reports = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = std::rc::Rc::clone(&reports);
    (reports, move |_: &crate::effect::Fault| {
        counter.set(counter.get() + 1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{Fault, with_fault_hook};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn enter_pairs_source_value_with_step_result() {
        let outcome = enter(&Try::success(3), |n| n * 10);
        assert_eq!(outcome, Outcome::Success((3, 30)));
    }

    #[rstest]
    fn enter_skips_step_on_source_fault() {
        let calls = Cell::new(0);
        let outcome = enter(&Try::<i32>::fault(Fault::message("source")), |n| {
            calls.set(calls.get() + 1);
            n
        });
        assert!(outcome.is_fault());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn enter_captures_step_panic_once() {
        let (reports, hook) = counting_hook();
        let outcome: Outcome<(i32, i32)> =
            with_fault_hook(hook, || enter(&Try::success(1), |_| panic!("step failed")));
        assert_eq!(
            outcome.fault().map(|fault| fault.to_string()),
            Some("step failed".to_string())
        );
        assert_eq!(reports.get(), 1);
    }
}
