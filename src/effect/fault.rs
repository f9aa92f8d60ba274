//! Fault carrier for captured failures.
//!
//! A [`Fault`] is what a [`Try`](super::Try) holds instead of a value when
//! its computation panicked or returned an error. It is cheap to clone: all
//! clones share one allocation, so a fault read many times is still the same
//! fault.
//!
//! `Fault` deliberately does not implement [`std::error::Error`]. That keeps
//! the blanket `From<E: Error>` conversion available, which is what lets
//! fallible steps use `?` and `Err(e)` with any ordinary error type. Use
//! [`Fault::as_error`] to obtain a `&dyn Error` view when one is needed.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::{Fault, FaultKind};
//!
//! let fault = Fault::message("connection reset");
//! assert_eq!(fault.to_string(), "connection reset");
//! assert_eq!(fault.kind(), FaultKind::Raised);
//!
//! let parsed: Result<i32, _> = "x".parse::<i32>();
//! let fault = Fault::from(parsed.unwrap_err());
//! assert_eq!(fault.kind(), FaultKind::Error);
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Causes the crate raises on its own behalf.
///
/// These sit at the head of a fault's cause chain whenever the fault did not
/// originate from a user error value.
#[derive(Debug, thiserror::Error)]
enum Raised {
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Panic(String),
    #[error("Filtered")]
    Filtered,
    #[error("value was absent")]
    Absent,
}

/// Classifies how a [`Fault`] came into being.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Constructed from a message with [`Fault::message`].
    Raised,
    /// A panic captured while running a step.
    Panic,
    /// An error value returned by a fallible step.
    Error,
    /// The sentinel produced when a filter predicate rejects a value.
    Filtered,
    /// An absent optional value re-wrapped as a fault.
    Absent,
}

struct Inner {
    kind: FaultKind,
    error: Box<dyn Error + Send + Sync + 'static>,
}

/// Panic payload of a fault re-raised by
/// [`Outcome::unwrap_or_raise`](super::Outcome::unwrap_or_raise).
///
/// It was reported when first captured, so catching it again is silent.
pub(crate) struct Propagated(pub(crate) Fault);

/// A captured failure: a kind, a description and an optional cause chain.
///
/// # Equality
///
/// Two faults are equal when they have the same kind and description. Use
/// [`Fault::same_as`] to test whether two faults are the very same capture.
#[derive(Clone)]
pub struct Fault {
    inner: Arc<Inner>,
}

impl Fault {
    fn with(kind: FaultKind, error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::new(Inner { kind, error }),
        }
    }

    /// Creates a fault carrying only a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Fault;
    ///
    /// let fault = Fault::message("disk full");
    /// assert_eq!(fault.to_string(), "disk full");
    /// assert!(fault.source().is_none());
    /// ```
    pub fn message(message: impl Into<String>) -> Self {
        Self::with(FaultKind::Raised, Box::new(Raised::Message(message.into())))
    }

    /// The sentinel fault produced when a filter rejects a value.
    ///
    /// Its description is exactly `"Filtered"`.
    pub fn filtered() -> Self {
        Self::with(FaultKind::Filtered, Box::new(Raised::Filtered))
    }

    /// The fault an absent optional value becomes when re-wrapped as a `Try`.
    pub fn absent() -> Self {
        Self::with(FaultKind::Absent, Box::new(Raised::Absent))
    }

    /// Converts a panic payload into a fault.
    ///
    /// A fault re-raised by [`Try::run_unsafe`](super::Try::run_unsafe), or
    /// a `Fault` passed to [`std::panic::panic_any`], is returned unchanged,
    /// so it keeps its identity when captured again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    /// use tryfuse::effect::{Fault, Try};
    ///
    /// let original = Fault::message("quota exceeded");
    /// let failing = Try::<u32>::fault(original.clone());
    ///
    /// let payload = catch_unwind(AssertUnwindSafe(|| failing.run_unsafe())).unwrap_err();
    /// assert!(Fault::from_panic(payload).same_as(&original));
    /// ```
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Propagated>() {
            Ok(propagated) => return propagated.0,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<Self>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self::with(FaultKind::Panic, Box::new(Raised::Panic(message)))
    }

    /// Returns how this fault came into being.
    pub fn kind(&self) -> FaultKind {
        self.inner.kind
    }

    /// Returns `true` for the filter sentinel.
    pub fn is_filtered(&self) -> bool {
        self.inner.kind == FaultKind::Filtered
    }

    /// Returns `true` if this fault was a captured panic.
    pub fn is_panic(&self) -> bool {
        self.inner.kind == FaultKind::Panic
    }

    /// Views the head of the cause chain as a standard error.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.error.as_ref()
    }

    /// Returns the error underneath the head of the chain, if any.
    pub fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.error.source()
    }

    /// Iterates the cause chain, starting with the head error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryfuse::effect::Fault;
    ///
    /// let fault = Fault::from(std::io::Error::other("socket closed"));
    /// let messages: Vec<String> = fault.chain().map(|error| error.to_string()).collect();
    /// assert_eq!(messages, vec!["socket closed"]);
    /// ```
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        let head: &(dyn Error + 'static) = self.inner.error.as_ref();
        std::iter::successors(Some(head), |error: &&(dyn Error + 'static)| (*error).source())
    }

    /// Returns `true` if both values are clones of the same captured fault.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::with(FaultKind::Error, Box::new(error))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.inner.error)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Fault")
            .field("kind", &self.inner.kind)
            .field("description", &self.inner.error.to_string())
            .finish()
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
            || (self.kind() == other.kind() && self.to_string() == other.to_string())
    }
}

impl Eq for Fault {}

static_assertions::assert_impl_all!(Fault: Send, Sync, Clone);
