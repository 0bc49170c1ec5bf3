//! Errors raised while capturing or reporting failures.
//!
//! These are construction-time rejections: they are always returned to the
//! immediate caller and never stored inside a checked result.

use core::any::Any;

/// A concrete error was requested but a type-erasing handle was supplied.
///
/// Capturing a handle through the concrete-error entry point would wrap it,
/// hiding the dynamic type of the error it carries from later kind matching.
///
/// # Examples
///
/// ```
/// use vouch_errors::SlicedTypeError;
///
/// let err = SlicedTypeError::new("alloc::sync::Arc<dyn core::error::Error>");
/// assert!(err.to_string().contains("slicing detected"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slicing detected: `{declared}` erases the dynamic error type")]
pub struct SlicedTypeError {
    declared: &'static str,
}

impl SlicedTypeError {
    /// Create a new slicing error for the declared type name.
    pub fn new(declared: &'static str) -> Self {
        Self { declared }
    }

    /// The declared (static) type that was rejected.
    pub fn declared(&self) -> &'static str {
        self.declared
    }
}

/// No failure is in flight on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("no failure is currently being handled on this thread")]
pub struct NoActiveFailureError;

/// The process-wide unchecked-failure hook was already installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("unchecked failure hook already installed")]
pub struct HookAlreadySet;

/// A panic captured as a failure.
///
/// Panic payloads are `Box<dyn Any + Send>`; only `&str` and `String`
/// payloads carry a readable message, anything else is recorded as opaque.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("panicked: {message}")]
pub struct PanicFailure {
    message: String,
}

impl PanicFailure {
    /// Placeholder message for payloads that are neither `&str` nor `String`.
    pub const OPAQUE: &'static str = "<non-string panic payload>";

    /// Create a panic failure with an explicit message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract the message from a panic payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use vouch_errors::PanicFailure;
    ///
    /// let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
    /// assert_eq!(PanicFailure::from_payload(payload.as_ref()).message(), "boom");
    /// ```
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        if let Some(s) = payload.downcast_ref::<&'static str>() {
            Self::new(*s)
        } else if let Some(s) = payload.downcast_ref::<String>() {
            Self::new(s.clone())
        } else {
            Self::new(Self::OPAQUE)
        }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
