//! Shared test utilities for vouch.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers for `Result`, `Option`, and `Expected`
//! - [`assertions`] - Assertions about what dropping a container reports
//! - [`recording`] - Per-thread capture of unchecked-failure reports
//! - [`logging`] - Tracing subscriber setup and log capture for tests
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! vouch-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use vouch_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "recording")]
#[cfg_attr(docsrs, doc(cfg(feature = "recording")))]
pub mod recording;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;

pub use must::*;

#[cfg(feature = "recording")]
pub use recording::RecordingHook;

#[cfg(feature = "logging")]
pub use logging::{capture_logs, init_tracing};
