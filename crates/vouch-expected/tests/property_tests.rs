//! Property-based tests for the examined-flag protocol.

use std::fmt;

use proptest::prelude::*;
use vouch_expected::{Expected, Failure};
use vouch_test_helpers::RecordingHook;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Coded(i32);

impl fmt::Display for Coded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed with code {}", self.0)
    }
}

impl std::error::Error for Coded {}

#[derive(Debug, Clone, Copy)]
enum Inspection {
    IsValue,
    Get,
    IsFailureOf,
    Failure,
    None,
}

fn inspection() -> impl Strategy<Value = Inspection> {
    prop_oneof![
        Just(Inspection::IsValue),
        Just(Inspection::Get),
        Just(Inspection::IsFailureOf),
        Just(Inspection::Failure),
        Just(Inspection::None),
    ]
}

fn inspect<T>(expected: &Expected<T>, how: Inspection) {
    match how {
        Inspection::IsValue => {
            expected.is_value();
        }
        Inspection::Get => {
            let _inspected = expected.get().is_ok();
        }
        Inspection::IsFailureOf => {
            expected.is_failure_of::<fmt::Error>();
        }
        Inspection::Failure => {
            expected.failure();
        }
        Inspection::None => {}
    }
}

fn reports_on_drop<T>(hook: RecordingHook, expected: Expected<T>) -> usize {
    let before = hook.count();
    drop(expected);
    hook.count() - before
}

proptest! {
    #[test]
    fn test_values_round_trip(v in any::<i64>()) {
        let hook = RecordingHook::install();
        let expected = Expected::from_value(v);
        prop_assert!(expected.is_value());
        prop_assert_eq!(expected.get().ok(), Some(&v));
        prop_assert_eq!(reports_on_drop(hook, expected), 0);
    }

    #[test]
    fn test_failure_reports_iff_uninspected(code in any::<i32>(), how in inspection()) {
        let hook = RecordingHook::install();
        let expected: Expected<String> = Expected::from_failure(Failure::new(Coded(code)));
        inspect(&expected, how);
        let expected_reports = usize::from(matches!(how, Inspection::None));
        prop_assert_eq!(reports_on_drop(hook, expected), expected_reports);
        hook.take();
    }

    #[test]
    fn test_get_preserves_failure_content(code in any::<i32>()) {
        let hook = RecordingHook::install();
        let expected: Expected<u8> = Expected::from_failure(Failure::new(Coded(code)));
        let returned = expected.get().err();
        let coded = returned.as_ref().and_then(|f| f.downcast_ref::<Coded>());
        prop_assert_eq!(coded, Some(&Coded(code)));
        prop_assert_eq!(reports_on_drop(hook, expected), 0);
    }

    #[test]
    fn test_clones_need_their_own_inspection(
        code in any::<i32>(),
        copies in 1usize..6,
        inspected in proptest::collection::vec(any::<bool>(), 6),
    ) {
        let hook = RecordingHook::install();
        let original: Expected<u8> = Expected::from_failure(Failure::new(Coded(code)));
        let clones: Vec<Expected<u8>> = (0..copies).map(|_| original.clone()).collect();
        prop_assert!(original.failure().is_some());

        let mut unread = 0;
        for (clone, read) in clones.iter().zip(inspected.iter()) {
            if *read {
                prop_assert!(!clone.is_value());
            } else {
                unread += 1;
            }
        }

        let before = hook.count();
        drop(clones);
        drop(original);
        prop_assert_eq!(hook.count() - before, unread);
        hook.take();
    }

    #[test]
    fn test_swap_twice_is_identity(
        value in any::<u32>(),
        code in any::<i32>(),
        read_first in any::<bool>(),
    ) {
        let hook = RecordingHook::install();
        let mut a = Expected::from_value(value);
        let mut b: Expected<u32> = Expected::from_failure(Failure::new(Coded(code)));
        if read_first {
            prop_assert!(!b.is_value());
        }

        a.swap(&mut b);
        prop_assert_eq!(a.is_examined(), read_first);
        prop_assert!(b.is_examined());

        a.swap(&mut b);
        prop_assert!(a.is_examined());
        prop_assert_eq!(b.is_examined(), read_first);
        prop_assert_eq!(a.get().ok(), Some(&value));
        prop_assert!(b.is_failure_of::<Coded>());
        prop_assert_eq!(reports_on_drop(hook, a) + reports_on_drop(hook, b), 0);
    }
}
