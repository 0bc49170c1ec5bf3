//! Formatting adapter for system error codes.
//!
//! [`ErrorCodeInfo`] turns a numeric code, its category, and its message into
//! a single diagnostic line that can be attached to an [`ErrorContext`].
//!
//! [`ErrorContext`]: crate::ErrorContext

use core::fmt;
use std::io;

/// A system error code rendered for diagnostics.
///
/// # Examples
///
/// ```
/// use vouch_errors::ErrorCodeInfo;
///
/// let info = ErrorCodeInfo::new(111, "system", "Connection refused");
/// assert_eq!(
///     info.to_string(),
///     "error_code(Connection refused, ec=111, ecat=system)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCodeInfo {
    value: i32,
    category: String,
    message: String,
}

impl ErrorCodeInfo {
    /// Category name used for operating system error numbers.
    pub const SYSTEM: &'static str = "system";
    /// Category name used for I/O errors that carry no OS code.
    pub const IO: &'static str = "io";
    /// Code reported for I/O errors that carry no OS code.
    pub const NO_OS_CODE: i32 = -1;

    /// Create an info record from its parts.
    pub fn new(value: i32, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            value,
            category: category.into(),
            message: message.into(),
        }
    }

    /// Build an info record from an I/O error.
    ///
    /// OS errors keep their raw code under the `system` category, with the
    /// trailing `(os error N)` stripped from the message. Other I/O errors use
    /// the `io` category and [`Self::NO_OS_CODE`].
    pub fn from_io(err: &io::Error) -> Self {
        let rendered = err.to_string();
        match err.raw_os_error() {
            Some(code) => {
                let suffix = format!(" (os error {code})");
                let message = rendered
                    .strip_suffix(suffix.as_str())
                    .map_or_else(|| rendered.clone(), str::to_owned);
                Self::new(code, Self::SYSTEM, message)
            }
            None => Self::new(Self::NO_OS_CODE, Self::IO, rendered),
        }
    }

    /// The numeric code.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The category name.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&io::Error> for ErrorCodeInfo {
    fn from(err: &io::Error) -> Self {
        Self::from_io(err)
    }
}

impl fmt::Display for ErrorCodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error_code({}, ec={}, ecat={})",
            self.message, self.value, self.category
        )
    }
}
