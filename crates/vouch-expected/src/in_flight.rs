//! Failures currently being handled on this thread.
//!
//! [`handling`] marks a failure as in flight for the duration of a handler,
//! the way a `catch` block scopes the exception it caught. While the handler
//! runs, [`current`] and [`Expected::from_current`](crate::Expected::from_current)
//! see that failure. Handlers nest; the innermost failure wins.

use std::cell::RefCell;

use crate::Failure;

thread_local! {
    static IN_FLIGHT: RefCell<Vec<Failure>> = const { RefCell::new(Vec::new()) };
}

struct Unmark;

impl Drop for Unmark {
    fn drop(&mut self) {
        IN_FLIGHT.with_borrow_mut(|stack| {
            stack.pop();
        });
    }
}

/// Run `handler` with `failure` marked as in flight.
///
/// The mark is removed when the handler returns or unwinds.
///
/// # Examples
///
/// ```
/// use vouch_expected::{Expected, Failure, in_flight};
///
/// let failure = Failure::new(std::fmt::Error);
/// let result = in_flight::handling(failure, |_| Expected::<u32>::from_current())?;
/// assert!(result.is_failure_of::<std::fmt::Error>());
/// assert!(in_flight::current().is_none());
/// # Ok::<(), vouch_errors::NoActiveFailureError>(())
/// ```
pub fn handling<R, F>(failure: Failure, handler: F) -> R
where
    F: FnOnce(&Failure) -> R,
{
    IN_FLIGHT.with_borrow_mut(|stack| stack.push(failure.clone()));
    let _unmark = Unmark;
    handler(&failure)
}

/// The innermost failure being handled on this thread, if any.
pub fn current() -> Option<Failure> {
    IN_FLIGHT.with_borrow(|stack| stack.last().cloned())
}

/// How many handlers are active on this thread.
pub fn depth() -> usize {
    IN_FLIGHT.with_borrow(Vec::len)
}
