//! Reader - a computation that reads from an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. It is one of the foreign
//! shapes a [`Try`](super::Try) can be fused with: see
//! [`Try::fuse_reader`](super::Try::fuse_reader), which produces a
//! `Reader<R, Guarded<V>>` that is bottom when any stage fails.
//!
//! Reader provides its own `fmap` and `flat_map` rather than implementing a
//! functor trait, because the boxed function requires `'static` bounds that
//! a general trait cannot express.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! let address = Reader::asks(|config: Config| config.host)
//!     .flat_map(|host| Reader::asks(move |config: Config| format!("{host}:{}", config.port)));
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::rc::Rc;

/// A computation that, given an environment `R`, produces an `A`.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Shared so that cloning a Reader never clones the closure.
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the Reader with the given environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// assert_eq!(reader.run(0), 1);
    /// ```
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Maps a function over the result.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function((original_function)(environment)))
    }

    /// Chains a Reader that depends on this one's result.
    ///
    /// Both Readers see the same environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let a = (original_function)(environment.clone());
            function(a).run(environment)
        })
    }

    /// Creates a Reader that projects a value from the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }
}

impl<Env> Reader<Env, Env>
where
    Env: 'static,
{
    /// Creates a Reader that returns the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}
