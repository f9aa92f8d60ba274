//! State - a computation that threads a state value.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`. Fusing a
//! [`Try`](super::Try) with it ([`Try::fuse_state`](super::Try::fuse_state))
//! yields a `State<S, Guarded<V>>` that leaves the input state untouched when
//! any stage fails.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::State;
//!
//! let next_id: State<u32, u32> = State::new(|counter| (counter, counter + 1));
//! let two_ids = next_id.clone().flat_map(move |first| {
//!     next_id.clone().fmap(move |second| (first, second))
//! });
//!
//! assert_eq!(two_ids.run(7), ((7, 8), 9));
//! ```

use std::rc::Rc;

/// A state transition producing a result alongside the next state.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Shared so that cloning a State never clones the closure.
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the transition, returning the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the transition and returns only the result.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Maps a function over the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (function(result), new_state)
        })
    }

    /// Chains a State that depends on this one's result.
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            function(result).run(intermediate_state)
        })
    }

}

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Creates a State that returns the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}
