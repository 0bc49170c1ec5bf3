//! The checked result container.

use core::cell::Cell;
use core::fmt;
use core::mem;
use std::error::Error;
use std::panic::{self, UnwindSafe};

use vouch_errors::{NoActiveFailureError, PanicFailure, SlicedTypeError};

use crate::{Failure, in_flight, report};

/// Either a value of type `T` or a captured [`Failure`].
///
/// A failure has to be looked at before the container is dropped. Any of
/// [`is_value`](Self::is_value), [`get`](Self::get),
/// [`is_failure_of`](Self::is_failure_of), [`failure`](Self::failure) or
/// [`into_result`](Self::into_result) counts; dropping an unread failure is
/// reported through [`report`](crate::report).
///
/// # Examples
///
/// ```
/// use vouch_expected::Expected;
///
/// fn parse(input: &str) -> Expected<u16> {
///     match input.parse::<u16>() {
///         Ok(port) => Expected::from_value(port),
///         Err(err) => Expected::from_error(err).unwrap_or_else(|sliced| {
///             Expected::from_failure(vouch_expected::Failure::new(sliced))
///         }),
///     }
/// }
///
/// let port = parse("8080");
/// assert_eq!(port.get().ok(), Some(&8080));
///
/// let bad = parse("eighty");
/// assert!(bad.is_failure_of::<std::num::ParseIntError>());
/// ```
#[must_use = "an `Expected` holding a failure must be inspected before it is dropped"]
pub struct Expected<T> {
    state: State<T>,
}

enum State<T> {
    Value(T),
    Failure(Guarded),
}

/// A failure plus its examined flag. Reports on drop if never examined.
#[derive(Clone)]
struct Guarded {
    failure: Failure,
    examined: Cell<bool>,
}

impl Guarded {
    fn unread(failure: Failure) -> Self {
        Self {
            failure,
            examined: Cell::new(false),
        }
    }

    fn read(&self) -> &Failure {
        self.examined.set(true);
        &self.failure
    }
}

impl Drop for Guarded {
    fn drop(&mut self) {
        if !self.examined.get() {
            report::unchecked(&self.failure);
        }
    }
}

impl<T> Expected<T> {
    /// Wrap a successfully computed value.
    pub fn from_value(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Store an already captured failure.
    pub fn from_failure(failure: Failure) -> Self {
        tracing::trace!(failure = %failure, "failure captured");
        Self {
            state: State::Failure(Guarded::unread(failure)),
        }
    }

    /// Capture a concrete error as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`SlicedTypeError`] if `E` is a type-erasing handle such as
    /// [`Failure`] or `Arc<dyn Error + Send + Sync>`; use
    /// [`from_failure`](Self::from_failure) or `Failure::from` for those.
    /// Nothing is captured in that case.
    pub fn from_error<E>(err: E) -> Result<Self, SlicedTypeError>
    where
        E: Error + Send + Sync + 'static,
    {
        Failure::try_new(err).map(Self::from_failure)
    }

    /// Capture the failure currently being handled on this thread.
    ///
    /// # Errors
    ///
    /// Returns [`NoActiveFailureError`] outside of
    /// [`in_flight::handling`].
    pub fn from_current() -> Result<Self, NoActiveFailureError> {
        in_flight::current()
            .map(Self::from_failure)
            .ok_or(NoActiveFailureError)
    }

    /// Convert a `Result` whose error is a concrete error type.
    ///
    /// # Errors
    ///
    /// Returns [`SlicedTypeError`] under the same conditions as
    /// [`from_error`](Self::from_error).
    pub fn from_result<E>(result: Result<T, E>) -> Result<Self, SlicedTypeError>
    where
        E: Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Ok(Self::from_value(value)),
            Err(err) => Self::from_error(err),
        }
    }

    /// Run `f`, capturing a panic as a [`PanicFailure`].
    ///
    /// The panic hook still runs as usual before the panic is captured.
    pub fn catch_unwind<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(value) => Self::from_value(value),
            Err(payload) => {
                Self::from_failure(Failure::new(PanicFailure::from_payload(payload.as_ref())))
            }
        }
    }

    /// Returns `true` if a value is stored.
    ///
    /// Counts as inspecting the failure, if there is one.
    pub fn is_value(&self) -> bool {
        match &self.state {
            State::Value(_) => true,
            State::Failure(guarded) => {
                guarded.read();
                false
            }
        }
    }

    /// Borrow the value, or get the captured failure back.
    ///
    /// The returned failure is the one originally captured, shared rather
    /// than copied, so it can be propagated with `?` unchanged.
    ///
    /// # Errors
    ///
    /// Returns the stored [`Failure`] if there is no value.
    pub fn get(&self) -> Result<&T, Failure> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Failure(guarded) => Err(guarded.read().clone()),
        }
    }

    /// Mutably borrow the value, or get the captured failure back.
    ///
    /// # Errors
    ///
    /// Returns the stored [`Failure`] if there is no value.
    pub fn get_mut(&mut self) -> Result<&mut T, Failure> {
        match &mut self.state {
            State::Value(value) => Ok(value),
            State::Failure(guarded) => Err(guarded.read().clone()),
        }
    }

    /// Consume the container into a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns the stored [`Failure`] if there is no value.
    pub fn into_result(self) -> Result<T, Failure> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Failure(guarded) => Err(guarded.read().clone()),
        }
    }

    /// Returns `true` if a failure of exactly kind `K` is stored.
    ///
    /// Always counts as inspecting the failure, whatever its kind. Never
    /// propagates it. A `K` wrapped inside another error does not match;
    /// use [`Failure::chain_contains`] on [`failure`](Self::failure) for that.
    pub fn is_failure_of<K>(&self) -> bool
    where
        K: Error + 'static,
    {
        match &self.state {
            State::Value(_) => false,
            State::Failure(guarded) => guarded.read().is::<K>(),
        }
    }

    /// Borrow the stored failure, if any, without propagating it.
    pub fn failure(&self) -> Option<&Failure> {
        match &self.state {
            State::Value(_) => None,
            State::Failure(guarded) => Some(guarded.read()),
        }
    }

    /// Whether dropping this container right now would stay silent.
    ///
    /// Always `true` for a value. This is bookkeeping only and does not
    /// count as an inspection.
    pub fn is_examined(&self) -> bool {
        match &self.state {
            State::Value(_) => true,
            State::Failure(guarded) => guarded.examined.get(),
        }
    }

    /// Exchange contents with `other`.
    ///
    /// Payloads move together with their examined flags, so each side ends
    /// up exactly as the other side was, whatever the two held.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.state, &mut other.state);
    }

    fn acknowledge(&self) {
        if let State::Failure(guarded) = &self.state {
            guarded.examined.set(true);
        }
    }
}

impl<T: Clone> Clone for Expected<T> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            State::Value(value) => State::Value(value.clone()),
            State::Failure(guarded) => State::Failure(guarded.clone()),
        };
        Self { state }
    }

    /// Overwrites `self` with a copy of `source`.
    ///
    /// Whatever `self` held is released without the unread check, as with
    /// assignment; the examined flag of `source` is copied as is.
    fn clone_from(&mut self, source: &Self) {
        self.acknowledge();
        if let (State::Value(dst), State::Value(src)) = (&mut self.state, &source.state) {
            dst.clone_from(src);
            return;
        }
        *self = source.clone();
    }
}

impl<T> From<T> for Expected<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T> From<Result<T, Failure>> for Expected<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(failure) => Self::from_failure(failure),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Expected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => f.debug_tuple("Value").field(value).finish(),
            State::Failure(guarded) => f
                .debug_struct("Failure")
                .field("failure", &guarded.failure)
                .field("examined", &guarded.examined.get())
                .finish(),
        }
    }
}
