//! Prelude module for convenient error handling imports.
//!
//! # Example
//!
//! ```
//! use vouch_errors::prelude::*;
//!
//! fn parse_policy(raw: &str) -> Result<bool> {
//!     match raw {
//!         "strict" => Ok(true),
//!         "log" => Ok(false),
//!         other => Err(VouchError::config(format!("unknown policy '{other}'"))),
//!     }
//! }
//!
//! assert!(parse_policy("strict").is_ok_and(|strict| strict));
//! ```

pub use crate::{
    Result,
    capture::{HookAlreadySet, NoActiveFailureError, PanicFailure, SlicedTypeError},
    common::{ContextError, ErrorCategory, ErrorContext, IoResultExt, ResultExt, VouchError},
    error_code::ErrorCodeInfo,
};

/// Macro for creating an error context with key/value pairs.
///
/// # Example
///
/// ```
/// use vouch_errors::error_context;
///
/// let ctx = error_context!("connect", "endpoint" => "tcp://127.0.0.1:5555");
/// assert_eq!(ctx.context.len(), 1);
/// ```
#[macro_export]
macro_rules! error_context {
    ($operation:expr $(, $key:expr => $value:expr)* $(,)?) => {
        {
            let mut ctx = $crate::ErrorContext::new($operation);
            $(
                ctx = ctx.with($key, $value);
            )*
            ctx
        }
    };
}
