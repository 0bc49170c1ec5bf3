//! Common error types and utilities.
//!
//! This module provides the top-level error enum that wraps every
//! construction-time error, along with classification and a context chain
//! that decorates an error without hiding it from `source()` walks.

use core::fmt;

use crate::{ErrorCodeInfo, HookAlreadySet, NoActiveFailureError, SlicedTypeError};

/// Top-level error type for vouch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VouchError {
    /// A type-erasing handle was passed where a concrete error was expected
    #[error("Capture error: {0}")]
    Sliced(#[from] SlicedTypeError),

    /// No failure is in flight
    #[error("Capture error: {0}")]
    NoActiveFailure(#[from] NoActiveFailureError),

    /// The unchecked-failure hook was installed twice
    #[error("Reporting error: {0}")]
    HookAlreadySet(#[from] HookAlreadySet),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl VouchError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            VouchError::Sliced(_) | VouchError::NoActiveFailure(_) => ErrorCategory::Capture,
            VouchError::HookAlreadySet(_) => ErrorCategory::Reporting,
            VouchError::Config(_) => ErrorCategory::Config,
            VouchError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        VouchError::Config(msg.into())
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        VouchError::Other(msg.into())
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Capturing a failure into a checked result
    Capture = 0,
    /// Unchecked-failure reporting
    Reporting = 1,
    /// Configuration errors
    Config = 2,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Capture => write!(f, "Capture"),
            ErrorCategory::Reporting => write!(f, "Reporting"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Context information attached to an error.
///
/// Besides free-form key/value pairs, a context can carry any number of
/// [`ErrorCodeInfo`] records describing the system error codes involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation that was being performed
    pub operation: String,
    /// Additional context key-value pairs
    pub context: Vec<(String, String)>,
    /// System error codes attached to this context
    pub error_codes: Vec<ErrorCodeInfo>,
    /// Source location (file:line)
    pub location: Option<String>,
}

impl ErrorContext {
    /// Create a new error context for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            context: Vec::new(),
            error_codes: Vec::new(),
            location: None,
        }
    }

    /// Add a context key-value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Attach a system error code.
    pub fn with_error_code(mut self, info: ErrorCodeInfo) -> Self {
        self.error_codes.push(info);
        self
    }

    /// Set the source location.
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.location = Some(format!("{}:{}", file.into(), line));
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation: {}", self.operation)?;
        for (key, value) in &self.context {
            write!(f, ", {key}: {value}")?;
        }
        for info in &self.error_codes {
            write!(f, ", {info}")?;
        }
        if let Some(ref loc) = self.location {
            write!(f, " at {loc}")?;
        }
        Ok(())
    }
}

/// An error decorated with an [`ErrorContext`].
///
/// The wrapped error stays reachable through `source()`, so kind matching
/// that walks the chain still finds it.
#[derive(Debug)]
pub struct ContextError<E> {
    context: ErrorContext,
    source: E,
}

impl<E> ContextError<E> {
    /// Wrap `source` with `context`.
    pub fn new(context: ErrorContext, source: E) -> Self {
        Self { context, source }
    }

    /// The attached context.
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.source
    }

    /// Unwrap into the original error, dropping the context.
    pub fn into_inner(self) -> E {
        self.source
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl<E> std::error::Error for ContextError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Extension trait for adding context to errors.
pub trait ResultExt<T, E> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`ContextError`].
    fn context(self, ctx: ErrorContext) -> Result<T, ContextError<E>>;

    /// Add context with an operation name.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`ContextError`].
    fn with_context(self, operation: impl Into<String>) -> Result<T, ContextError<E>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn context(self, ctx: ErrorContext) -> Result<T, ContextError<E>> {
        self.map_err(|e| ContextError::new(ctx, e))
    }

    fn with_context(self, operation: impl Into<String>) -> Result<T, ContextError<E>> {
        self.context(ErrorContext::new(operation))
    }
}

/// Extension for I/O results: attach the OS error code automatically.
pub trait IoResultExt<T> {
    /// Add context naming `operation` plus the error's [`ErrorCodeInfo`].
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`ContextError`].
    fn with_error_code(
        self,
        operation: impl Into<String>,
    ) -> Result<T, ContextError<std::io::Error>>;
}

impl<T> IoResultExt<T> for Result<T, std::io::Error> {
    fn with_error_code(
        self,
        operation: impl Into<String>,
    ) -> Result<T, ContextError<std::io::Error>> {
        self.map_err(|e| {
            let ctx = ErrorContext::new(operation).with_error_code(ErrorCodeInfo::from_io(&e));
            ContextError::new(ctx, e)
        })
    }
}
