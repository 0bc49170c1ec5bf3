//! Prelude module for convenient imports.
//!
//! ```
//! use vouch_expected::prelude::*;
//!
//! let answer: Expected<u8> = 42.into();
//! assert!(answer.is_value());
//! ```

pub use crate::{
    config::{ReportConfig, UncheckedPolicy},
    expected::Expected,
    failure::Failure,
    in_flight,
    report::{self, ReportMode},
};

pub use vouch_errors::{NoActiveFailureError, PanicFailure, SlicedTypeError};
