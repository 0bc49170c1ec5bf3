//! Checked result container for vouch
//!
//! [`Expected<T>`] holds either a value or a captured [`Failure`], and insists
//! on being looked at: dropping a failure that nobody inspected is reported as
//! a programming error.
//!
//! # Reporting
//!
//! By default an unread failure panics when dropped. Installing a hook, either
//! directly with [`report::set_hook`] or from a [`ReportConfig`], turns that
//! into a non-fatal report instead. The mode is process-wide and is read at
//! the moment a violation happens.
//!
//! # Threading
//!
//! An [`Expected`] is `Send` when `T` is, and never `Sync`: inspection flips
//! an internal flag through a shared reference. In-flight failures tracked by
//! [`in_flight`] are per thread.
//!
//! # Example
//!
//! ```
//! use vouch_expected::prelude::*;
//!
//! fn lookup(id: u32) -> Expected<&'static str> {
//!     match id {
//!         1 => Expected::from_value("admin"),
//!         _ => Expected::from_failure(Failure::new(std::fmt::Error)),
//!     }
//! }
//!
//! fn name_of(id: u32) -> Result<String, Failure> {
//!     let name = lookup(id);
//!     Ok(name.get()?.to_string())
//! }
//!
//! assert_eq!(name_of(1).ok().as_deref(), Some("admin"));
//! assert!(name_of(2).is_err_and(|f| f.is::<std::fmt::Error>()));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod expected;
pub mod failure;
pub mod in_flight;
pub mod prelude;
pub mod report;

pub use config::{ReportConfig, UNCHECKED_POLICY_ENV, UncheckedPolicy};
pub use expected::Expected;
pub use failure::Failure;
pub use report::ReportMode;

pub use vouch_errors::{HookAlreadySet, NoActiveFailureError, PanicFailure, SlicedTypeError};
