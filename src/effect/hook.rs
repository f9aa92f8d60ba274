//! Diagnostic hook invoked whenever a fault is captured.
//!
//! The hook is the crate's single observation point for failures. It is
//! called synchronously, on the capturing thread, at the moment a panic or an
//! error value is turned into a [`Fault`], before the fault reaches any
//! caller. Reading or cloning a captured fault never reports it again, and
//! neither does re-raising it with
//! [`Outcome::unwrap_or_raise`](super::Outcome::unwrap_or_raise). Running a
//! `Try` again is a new capture and is reported again.
//!
//! # Resolution
//!
//! 1. A hook installed for the current thread with [`with_fault_hook`].
//! 2. Otherwise the process-wide hook set with [`set_fault_hook`].
//! 3. Otherwise nothing happens.
//!
//! Register the process-wide hook once at start-up. Tests should prefer
//! [`with_fault_hook`]: it is scoped to the calling thread, so tests running
//! in parallel never observe each other's faults.
//!
//! # Examples
//!
//! ```rust
//! use tryfuse::effect::{Fault, clear_fault_hook, set_fault_hook};
//!
//! set_fault_hook(|fault: &Fault| eprintln!("captured: {fault}"));
//! clear_fault_hook();
//! ```

use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::RwLock;

use super::fault::Fault;

type GlobalHook = Arc<dyn Fn(&Fault) + Send + Sync>;
type ScopedHook = Rc<dyn Fn(&Fault)>;

static GLOBAL_HOOK: RwLock<Option<GlobalHook>> = parking_lot::const_rwlock(None);

thread_local! {
    static SCOPED_HOOK: RefCell<Option<ScopedHook>> = const { RefCell::new(None) };
}

/// Installs the process-wide hook, replacing any previous one.
///
/// Returns `true` if a hook was already installed.
pub fn set_fault_hook<H>(hook: H) -> bool
where
    H: Fn(&Fault) + Send + Sync + 'static,
{
    GLOBAL_HOOK.write().replace(Arc::new(hook)).is_some()
}

/// Removes the process-wide hook, restoring the no-op default.
///
/// Returns `true` if a hook was installed.
pub fn clear_fault_hook() -> bool {
    GLOBAL_HOOK.write().take().is_some()
}

/// Runs `body` with `hook` installed for the current thread only.
///
/// The previously scoped hook (if any) is restored when `body` returns or
/// unwinds. Scoped hooks take precedence over the process-wide hook.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use tryfuse::effect::{Fault, Try, with_fault_hook};
///
/// let seen: Rc<RefCell<Vec<String>>> = Rc::default();
/// let sink = Rc::clone(&seen);
///
/// let outcome = with_fault_hook(
///     move |fault: &Fault| sink.borrow_mut().push(fault.to_string()),
///     || Try::<i32>::new(|| panic!("division by zero")).run(),
/// );
///
/// assert!(outcome.is_fault());
/// assert_eq!(*seen.borrow(), vec!["division by zero"]);
/// ```
pub fn with_fault_hook<H, F, R>(hook: H, body: F) -> R
where
    H: Fn(&Fault) + 'static,
    F: FnOnce() -> R,
{
    struct Restore(Option<ScopedHook>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            SCOPED_HOOK.with(|slot| *slot.borrow_mut() = previous);
        }
    }

    let previous = SCOPED_HOOK.with(|slot| slot.borrow_mut().replace(Rc::new(hook)));
    let _restore = Restore(previous);
    body()
}

/// Reports a freshly captured fault to the active hook.
///
/// A panicking hook is contained here so it can never escape a capture
/// boundary.
pub(crate) fn report(fault: &Fault) {
    let scoped = SCOPED_HOOK.with(|slot| slot.borrow().clone());
    let outcome = if let Some(hook) = scoped {
        catch_unwind(AssertUnwindSafe(|| hook(fault)))
    } else {
        let global = GLOBAL_HOOK.read().clone();
        match global {
            Some(hook) => catch_unwind(AssertUnwindSafe(|| hook(fault))),
            None => Ok(()),
        }
    };
    #[cfg(feature = "tracing")]
    if outcome.is_err() {
        tracing::warn!(fault = %fault, "fault hook panicked; ignoring");
    }
    #[cfg(not(feature = "tracing"))]
    drop(outcome);
}

/// A hook that emits one structured `tracing` event per captured fault.
///
/// # Examples
///
/// ```rust
/// use tryfuse::effect::{set_fault_hook, tracing_hook};
///
/// set_fault_hook(tracing_hook());
/// # tryfuse::effect::clear_fault_hook();
/// ```
#[cfg(feature = "tracing")]
pub fn tracing_hook() -> impl Fn(&Fault) + Send + Sync + 'static {
    |fault: &Fault| {
        tracing::error!(kind = ?fault.kind(), fault = %fault, "captured fault");
    }
}
