//! Tests run with no hook installed: unread failures panic on drop.
//!
//! Nothing in this binary may install a hook.

use std::fmt;

use vouch_expected::{Expected, Failure, NoActiveFailureError, ReportMode, in_flight, report};
use vouch_test_helpers::{capture_logs, must};

fn failed<T>() -> Expected<T> {
    Expected::from_failure(Failure::new(fmt::Error))
}

#[test]
fn test_default_mode_is_strict() {
    assert_eq!(report::mode(), ReportMode::Strict);
}

#[test]
#[should_panic(expected = "error result not checked")]
fn test_unread_failure_panics() {
    let _unread: Expected<u32> = failed();
}

#[test]
#[should_panic(
    expected = "error result not checked: an error occurred when formatting an argument"
)]
fn test_panic_message_names_failure() {
    let _unread: Expected<u32> = failed();
}

#[test]
#[should_panic(expected = "error result not checked")]
fn test_unread_clone_panics_even_if_original_read() {
    let original: Expected<u32> = failed();
    let copy = original.clone();
    assert!(!original.is_value());
    drop(original);
    drop(copy);
}

#[test]
#[should_panic(expected = "error result not checked")]
fn test_swapped_in_failure_panics_on_new_owner() {
    let mut a = Expected::from_value(1_u32);
    let mut b: Expected<u32> = failed();
    a.swap(&mut b);
    assert!(b.is_value());
    drop(b);
    drop(a);
}

#[test]
fn test_inspected_failures_drop_silently() {
    let by_is_value: Expected<u32> = failed();
    assert!(!by_is_value.is_value());

    let by_get: Expected<u32> = failed();
    assert!(matches!(by_get.get(), Err(ref f) if f.is::<fmt::Error>()));

    let by_kind: Expected<u32> = failed();
    assert!(by_kind.is_failure_of::<fmt::Error>());

    let by_failure: Expected<u32> = failed();
    assert!(by_failure.failure().is_some());

    let by_into: Expected<u32> = failed();
    assert!(matches!(by_into.into_result(), Err(_)));
}

#[test]
fn test_moved_failure_is_reported_once_by_destination() {
    let source: Expected<u32> = failed();
    let destination = source;
    assert!(!destination.is_examined());
    assert!(destination.is_failure_of::<fmt::Error>());
}

#[test]
fn test_mem_replace_hands_old_container_back() {
    let mut slot: Expected<u32> = failed();
    let old = std::mem::replace(&mut slot, Expected::from_value(9));
    assert!(!old.is_examined());
    assert!(old.failure().is_some());
    assert_eq!(slot.get().ok(), Some(&9));
}

#[test]
fn test_panic_while_unwinding_does_not_abort() {
    let outcome = std::panic::catch_unwind::<_, ()>(|| {
        let _unread: Expected<u32> = failed();
        std::panic::resume_unwind(Box::new("unrelated failure"));
    });
    let payload = outcome.err();
    let message = payload
        .as_ref()
        .and_then(|p| p.downcast_ref::<&'static str>())
        .copied();
    assert_eq!(message, Some("unrelated failure"));
}

#[test]
fn test_drop_during_unwind_is_logged() {
    let (outcome, logs) = capture_logs(|| {
        std::panic::catch_unwind::<_, ()>(|| {
            let _unread: Expected<u32> = failed();
            std::panic::resume_unwind(Box::new("unrelated failure"));
        })
    });
    assert!(matches!(outcome, Err(_)));
    let event = logs
        .lines()
        .find(|line| line.contains("error result not checked during unwind"));
    assert!(event.is_some_and(|line| line.contains("ERROR")), "logs were: {logs}");
    assert!(
        event.is_some_and(|line| line.contains("failure=an error occurred when formatting")),
        "logs were: {logs}"
    );
}

#[test]
fn test_from_current_outside_handler() {
    let result = Expected::<u32>::from_current();
    assert!(matches!(result, Err(NoActiveFailureError)));
}

#[test]
fn test_from_current_inside_handler() {
    let failure = Failure::new(fmt::Error);
    let captured = must(in_flight::handling(failure.clone(), |_| {
        Expected::<u32>::from_current()
    }));
    assert!(!captured.is_examined());
    assert!(matches!(captured.get(), Err(ref f) if Failure::ptr_eq(f, &failure)));
}
