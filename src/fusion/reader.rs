//! Fusion with [`Reader`].

use super::{Guarded, enter};
use crate::effect::{Reader, Try, capture_value};

impl<T> Try<T>
where
    T: Clone + 'static,
{
    /// Sequences with a step returning a `Reader`, then projects both values.
    ///
    /// The result is a `Reader` over the same environment. Nothing runs until
    /// it is given an environment; then the source, the step, the step's
    /// `Reader` and the projector run in that order. Any failure yields
    /// [`Guarded::Bottom`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::{Reader, Try};
    /// use tryfuse::fusion::Guarded;
    ///
    /// #[derive(Clone)]
    /// struct Config {
    ///     base_url: String,
    /// }
    ///
    /// let path = Try::success("/health".to_string());
    /// let url = path.fuse_reader(
    ///     |path| Reader::asks(move |config: Config| format!("{}{path}", config.base_url)),
    ///     |_, url| url,
    /// );
    ///
    /// let config = Config { base_url: "http://localhost".to_string() };
    /// assert_eq!(url.run(config), Guarded::Value("http://localhost/health".to_string()));
    /// ```
    pub fn fuse_reader<R, U, V, S, P>(self, step: S, projector: P) -> Reader<R, Guarded<V>>
    where
        R: 'static,
        S: Fn(T) -> Reader<R, U> + 'static,
        P: Fn(T, U) -> V + 'static,
        U: 'static,
        V: 'static,
    {
        Reader::new(move |environment: R| {
            match enter(&self, |value| step(value).run(environment)).success() {
                Some((value, inner)) => capture_value(|| projector(value, inner)).into(),
                None => Guarded::Bottom,
            }
        })
    }
}
