//! Assertion macros for unchecked-failure reporting.
//!
//! Both macros take a [`RecordingHook`](crate::RecordingHook) and an
//! expression whose value is dropped inside the macro.

/// Assert that dropping `$value` reports nothing.
///
/// # Example
///
/// ```rust
/// use vouch_expected::{Expected, Failure};
/// use vouch_test_helpers::{RecordingHook, assert_silent_drop};
///
/// let hook = RecordingHook::install();
/// let failed: Expected<u8> = Expected::from_failure(Failure::new(std::fmt::Error));
/// assert!(!failed.is_value());
/// assert_silent_drop!(hook, failed);
/// ```
#[macro_export]
macro_rules! assert_silent_drop {
    ($hook:expr, $value:expr $(,)?) => {{
        let hook = &$hook;
        let before = hook.count();
        ::core::mem::drop($value);
        let after = hook.count();
        if after != before {
            panic!(
                "assertion failed: dropping `{}` reported {} unchecked failure(s)",
                stringify!($value),
                after - before
            );
        }
    }};
}

/// Assert that dropping `$value` reports exactly one unchecked failure.
///
/// # Example
///
/// ```rust
/// use vouch_expected::{Expected, Failure};
/// use vouch_test_helpers::{RecordingHook, assert_reported_drop};
///
/// let hook = RecordingHook::install();
/// let failed: Expected<u8> = Expected::from_failure(Failure::new(std::fmt::Error));
/// assert_reported_drop!(hook, failed);
/// ```
#[macro_export]
macro_rules! assert_reported_drop {
    ($hook:expr, $value:expr $(,)?) => {{
        let hook = &$hook;
        let before = hook.count();
        ::core::mem::drop($value);
        let after = hook.count();
        if after != before + 1 {
            panic!(
                "assertion failed: dropping `{}` reported {} unchecked failure(s), expected 1",
                stringify!($value),
                after - before
            );
        }
    }};
}
