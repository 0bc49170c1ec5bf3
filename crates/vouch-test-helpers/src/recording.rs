//! Capture of unchecked-failure reports in tests.
//!
//! The reporting hook is process-wide and can only be installed once, while
//! tests in one binary run in parallel on separate threads. [`RecordingHook`]
//! installs a single hook for the whole binary and files every report under
//! the thread that dropped the failure, so each test only sees its own.
//!
//! A test binary that uses this never runs in strict mode: keep strict-mode
//! tests in a different `tests/*.rs` file.

use std::sync::Once;
use std::thread::{self, ThreadId};

use parking_lot::{Mutex, const_mutex};
use vouch_expected::{Failure, report};

static REPORTS: Mutex<Vec<(ThreadId, Failure)>> = const_mutex(Vec::new());
static INSTALL: Once = Once::new();

/// Handle to the recording hook.
///
/// # Example
///
/// ```rust
/// use vouch_expected::{Expected, Failure};
/// use vouch_test_helpers::RecordingHook;
///
/// let hook = RecordingHook::install();
/// drop(Expected::<u8>::from_failure(Failure::new(std::fmt::Error)));
/// assert_eq!(hook.count(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecordingHook {
    _private: (),
}

impl RecordingHook {
    /// Install the recording hook if it is not installed yet.
    ///
    /// # Panics
    ///
    /// Panics if some other hook was installed in this process first.
    pub fn install() -> Self {
        INSTALL.call_once(|| {
            if report::set_hook(record).is_err() {
                panic!("RecordingHook: another unchecked-failure hook is already installed");
            }
        });
        Self { _private: () }
    }

    /// Number of failures reported on the current thread and not yet taken.
    pub fn count(&self) -> usize {
        let me = thread::current().id();
        REPORTS.lock().iter().filter(|(id, _)| *id == me).count()
    }

    /// Remove and return the failures reported on the current thread.
    pub fn take(&self) -> Vec<Failure> {
        let me = thread::current().id();
        let mut reports = REPORTS.lock();
        let (mine, others): (Vec<_>, Vec<_>) = reports.drain(..).partition(|(id, _)| *id == me);
        *reports = others;
        mine.into_iter().map(|(_, failure)| failure).collect()
    }
}

fn record(failure: &Failure) {
    REPORTS.lock().push((thread::current().id(), failure.clone()));
}
