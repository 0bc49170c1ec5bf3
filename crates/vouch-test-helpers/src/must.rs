//! Unwrap helpers with good error messages.
//!
//! These replace `unwrap()` and `expect()` in test code. Every helper is
//! `#[track_caller]`, so a failing test points at the call site.
//!
//! The `Expected` helpers inspect the container they are given, which counts
//! as examining any failure it holds.

use std::error::Error;
use std::fmt::Debug;

use vouch_expected::{Expected, Failure};

/// Unwrap a `Result`, panicking with the error on `Err`.
///
/// # Example
///
/// ```rust
/// use vouch_test_helpers::must;
///
/// let result: Result<i32, &str> = Ok(42);
/// assert_eq!(must(result), 42);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` on `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Borrow the value of an `Expected`, panicking with the failure otherwise.
///
/// # Example
///
/// ```rust
/// use vouch_expected::Expected;
/// use vouch_test_helpers::must_value;
///
/// let answer = Expected::from_value(42);
/// assert_eq!(*must_value(&answer), 42);
/// ```
///
/// # Panics
///
/// Panics if the container holds a failure.
#[track_caller]
pub fn must_value<T>(expected: &Expected<T>) -> &T {
    match expected.get() {
        Ok(v) => v,
        Err(failure) => panic!("must_value: unexpected failure: {failure}"),
    }
}

/// Take the failure out of an `Expected`, panicking if it holds a value.
///
/// # Panics
///
/// Panics if the container holds a value.
#[track_caller]
pub fn must_failure<T: Debug>(expected: Expected<T>) -> Failure {
    match expected.into_result() {
        Ok(v) => panic!("must_failure: unexpected value: {v:?}"),
        Err(failure) => failure,
    }
}

/// Take the failure out of an `Expected` and check that it is of kind `K`.
///
/// # Example
///
/// ```rust
/// use vouch_expected::{Expected, Failure};
/// use vouch_test_helpers::must_failure_of;
///
/// let failed: Expected<u8> = Expected::from_failure(Failure::new(std::fmt::Error));
/// let failure = must_failure_of::<std::fmt::Error, _>(failed);
/// assert!(failure.is::<std::fmt::Error>());
/// ```
///
/// # Panics
///
/// Panics if the container holds a value or a failure of another kind.
#[track_caller]
pub fn must_failure_of<K, T>(expected: Expected<T>) -> Failure
where
    K: Error + 'static,
    T: Debug,
{
    let failure = must_failure(expected);
    if !failure.is::<K>() {
        panic!(
            "must_failure_of: expected a `{}`, got: {failure}",
            std::any::type_name::<K>()
        );
    }
    failure
}
