//! Snapshot tests for error message formatting.
//!
//! These messages end up in logs and panic output, so their shape is pinned.

use vouch_errors::{
    capture::{HookAlreadySet, NoActiveFailureError, PanicFailure, SlicedTypeError},
    common::{ContextError, ErrorCategory, ErrorContext, VouchError},
    error_code::ErrorCodeInfo,
};

mod capture_snapshots {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_sliced_type() {
        assert_snapshot!(
            SlicedTypeError::new("vouch_expected::failure::Failure").to_string(),
            @"slicing detected: `vouch_expected::failure::Failure` erases the dynamic error type"
        );
    }

    #[test]
    fn test_no_active_failure() {
        assert_snapshot!(
            NoActiveFailureError.to_string(),
            @"no failure is currently being handled on this thread"
        );
    }

    #[test]
    fn test_hook_already_set() {
        assert_snapshot!(HookAlreadySet.to_string(), @"unchecked failure hook already installed");
    }

    #[test]
    fn test_panic_failure() {
        assert_snapshot!(PanicFailure::new("worker died").to_string(), @"panicked: worker died");
    }
}

mod vouch_error_snapshots {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_wrapped_capture() {
        assert_snapshot!(
            VouchError::from(NoActiveFailureError).to_string(),
            @"Capture error: no failure is currently being handled on this thread"
        );
    }

    #[test]
    fn test_wrapped_reporting() {
        assert_snapshot!(
            VouchError::from(HookAlreadySet).to_string(),
            @"Reporting error: unchecked failure hook already installed"
        );
    }

    #[test]
    fn test_config() {
        assert_snapshot!(
            VouchError::config("unknown policy 'sometimes'").to_string(),
            @"Configuration error: unknown policy 'sometimes'"
        );
    }

    #[test]
    fn test_categories() {
        let rendered = [
            ErrorCategory::Capture,
            ErrorCategory::Reporting,
            ErrorCategory::Config,
            ErrorCategory::Other,
        ]
        .map(|c| c.to_string())
        .join(",");
        assert_snapshot!(rendered, @"Capture,Reporting,Config,Other");
    }
}

mod context_snapshots {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_full_context() {
        let ctx = ErrorContext::new("dial")
            .with("peer", "db")
            .with_error_code(ErrorCodeInfo::new(111, "system", "refused"))
            .at("net.rs", 8);
        assert_snapshot!(
            ctx.to_string(),
            @"operation: dial, peer: db, error_code(refused, ec=111, ecat=system) at net.rs:8"
        );
    }

    #[test]
    fn test_context_error() {
        let err = ContextError::new(ErrorContext::new("install"), HookAlreadySet);
        assert_snapshot!(
            err.to_string(),
            @"operation: install: unchecked failure hook already installed"
        );
    }

    #[test]
    fn test_error_code() {
        assert_snapshot!(
            ErrorCodeInfo::new(-1, "io", "peer hung up").to_string(),
            @"error_code(peer hung up, ec=-1, ecat=io)"
        );
    }
}
