//! Writer - a result paired with accumulated output.
//!
//! A `Writer<W, A>` holds a result `A` and an output `W`, where `W` is a
//! [`Monoid`] so that outputs of sequential steps can be combined. Unlike
//! [`Reader`](super::Reader) and [`State`](super::State) it is a plain value,
//! so fusing a [`Try`](super::Try) with it
//! ([`Try::fuse_writer`](super::Try::fuse_writer)) runs the `Try` immediately.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::Writer;
//!
//! fn step(value: i32, message: &str) -> Writer<Vec<String>, i32> {
//!     Writer::new(value, vec![message.to_string()])
//! }
//!
//! let computation = step(40, "step 1").flat_map(|value| step(value + 2, "step 2"));
//!
//! let (result, logs) = computation.into_parts();
//! assert_eq!(result, 42);
//! assert_eq!(logs, vec!["step 1", "step 2"]);
//! ```

use crate::typeclass::Monoid;

/// A result together with accumulated output.
#[derive(Debug)]
pub struct Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    result: A,
    output: W,
}

impl<W, A> Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    /// Creates a new Writer with the given result and output.
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Returns clones of the result and the output.
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.result.clone(), self.output.clone())
    }

    /// Splits the Writer into its result and output.
    pub fn into_parts(self) -> (A, W) {
        (self.result, self.output)
    }

    /// Maps a function over the result, keeping the output.
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        Writer {
            result: function(self.result),
            output: self.output,
        }
    }

    /// Chains a Writer that depends on this one's result, combining outputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(10, vec!["first".to_string()]);
    /// let chained = writer.flat_map(|value| Writer::new(value * 2, vec!["second".to_string()]));
    /// assert_eq!(chained.run(), (20, vec!["first".to_string(), "second".to_string()]));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        B: 'static,
    {
        let next = function(self.result);
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }
}

impl<W, A> Clone for Writer<W, A>
where
    W: Monoid + Clone + 'static,
    A: Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            result: self.result.clone(),
            output: self.output.clone(),
        }
    }
}

impl<W, A> PartialEq for Writer<W, A>
where
    W: Monoid + PartialEq + 'static,
    A: PartialEq + 'static,
{
    fn eq(&self, other: &Self) -> bool {
        self.result == other.result && self.output == other.output
    }
}
