//! Error types for vouch
//!
//! This crate holds everything the checked-result core can fail with, kept
//! apart from the container so that callers can match on errors without
//! pulling in the container itself.
//!
//! # Architecture
//!
//! - [`common`]: Top-level error enum, classification, and context chains
//! - [`capture`]: Errors raised while capturing or reporting failures
//! - [`error_code`]: Formatting adapter for system error codes
//!
//! # Example
//!
//! ```
//! use vouch_errors::prelude::*;
//!
//! fn open_config(path: &str) -> std::result::Result<String, ContextError<std::io::Error>> {
//!     std::fs::read_to_string(path).with_context("open_config")
//! }
//!
//! assert!(open_config("/definitely/not/here.toml").is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod capture;
pub mod common;
pub mod error_code;
pub mod prelude;

pub use capture::{HookAlreadySet, NoActiveFailureError, PanicFailure, SlicedTypeError};
pub use common::{ContextError, ErrorCategory, ErrorContext, IoResultExt, ResultExt, VouchError};
pub use error_code::ErrorCodeInfo;

/// A specialized `Result` type for vouch operations.
pub type Result<T> = std::result::Result<T, VouchError>;
