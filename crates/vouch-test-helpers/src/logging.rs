//! Tracing setup for tests.

use std::io;
use std::sync::{Arc, Once};

use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: Once = Once::new();

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "vouch_expected=trace,vouch_errors=debug";

/// Route `tracing` output through the test harness' captured writer.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
        if let Err(err) = installed {
            eprintln!("init_tracing: subscriber already set elsewhere: {err}");
        }
    });
}

/// Shared in-memory sink for formatted log lines.
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-scoped subscriber and return what it logged.
///
/// Events are formatted without ANSI colours, at every level, so tests can
/// match on messages and `key=value` fields. Only events emitted on the
/// calling thread while `f` runs are captured.
///
/// # Example
///
/// ```rust
/// use vouch_expected::{Expected, Failure};
/// use vouch_test_helpers::capture_logs;
///
/// let (failed, logs) =
///     capture_logs(|| Expected::<u8>::from_failure(Failure::new(std::fmt::Error)));
/// assert!(failed.is_failure_of::<std::fmt::Error>());
/// assert!(logs.contains("failure captured"));
/// ```
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(LevelFilter::TRACE)
        .finish();
    let result = {
        let _scope = subscriber.set_default();
        f()
    };
    (result, buffer.contents())
}
