//! Reporting of failures that were dropped without being inspected.
//!
//! There is one process-wide reporting mode, read at the moment a violation
//! happens:
//!
//! - **Strict** (nothing installed): the drop panics. Release builds of this
//!   workspace use `panic = "abort"`, so this terminates the process.
//! - **Hook**: an installed hook receives the failure and execution continues.
//!
//! A hook can be installed once per process, either directly with
//! [`set_hook`] or through [`install`] with a [`ReportConfig`].

use std::sync::OnceLock;

use vouch_errors::HookAlreadySet;

use crate::Failure;
use crate::config::{ReportConfig, UncheckedPolicy};

/// Callback invoked with every failure dropped unread.
pub type UncheckedHook = Box<dyn Fn(&Failure) + Send + Sync + 'static>;

static HOOK: OnceLock<UncheckedHook> = OnceLock::new();

/// The reporting mode currently in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Unread failures panic on drop.
    Strict,
    /// Unread failures are forwarded to the installed hook.
    Hook,
}

/// Install the process-wide unchecked-failure hook.
///
/// The hook may run on any thread that drops an [`Expected`](crate::Expected).
///
/// # Errors
///
/// Returns [`HookAlreadySet`] if a hook was installed earlier.
pub fn set_hook<F>(hook: F) -> Result<(), HookAlreadySet>
where
    F: Fn(&Failure) + Send + Sync + 'static,
{
    if HOOK.set(Box::new(hook)).is_err() {
        return Err(HookAlreadySet);
    }
    tracing::debug!("unchecked failure hook installed");
    Ok(())
}

/// Install a hook that logs unread failures as `tracing` errors.
///
/// # Errors
///
/// Returns [`HookAlreadySet`] if a hook was installed earlier.
pub fn set_tracing_hook() -> Result<(), HookAlreadySet> {
    set_hook(|failure| {
        tracing::error!(failure = %failure, "error result not checked");
    })
}

/// Apply a reporting configuration.
///
/// [`UncheckedPolicy::Strict`] leaves the default in place;
/// [`UncheckedPolicy::Log`] installs the tracing hook.
///
/// # Errors
///
/// Returns [`HookAlreadySet`] if the policy needs a hook and one was
/// installed earlier.
pub fn install(config: &ReportConfig) -> Result<(), HookAlreadySet> {
    match config.policy {
        UncheckedPolicy::Strict => Ok(()),
        UncheckedPolicy::Log => set_tracing_hook(),
    }
}

/// The reporting mode in effect right now.
pub fn mode() -> ReportMode {
    if HOOK.get().is_some() {
        ReportMode::Hook
    } else {
        ReportMode::Strict
    }
}

#[expect(
    clippy::panic,
    reason = "strict mode treats an unread failure as a fatal programming error"
)]
pub(crate) fn unchecked(failure: &Failure) {
    if let Some(hook) = HOOK.get() {
        hook(failure);
        return;
    }
    // A second panic while unwinding aborts and hides the first one.
    if std::thread::panicking() {
        tracing::error!(failure = %failure, "error result not checked during unwind");
        return;
    }
    panic!("error result not checked: {failure}");
}
