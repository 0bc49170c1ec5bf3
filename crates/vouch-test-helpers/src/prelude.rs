//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use vouch_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_failure, must_failure_of, must_some, must_value};

#[cfg(feature = "recording")]
pub use crate::recording::RecordingHook;

#[cfg(feature = "logging")]
pub use crate::logging::{capture_logs, init_tracing};

pub use crate::{assert_reported_drop, assert_silent_drop};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
