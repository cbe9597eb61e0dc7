//! Status-reporting capability.
//!
//! The scratch registry and the dependency checker want to say things
//! ("removed this directory", "that tool is missing") without depending on
//! a concrete logger. They take a [`Reporter`] at construction instead:
//! wire in a [`Logger`](crate::log::Logger) for leveled output, fall back
//! to [`ConsoleReporter`] for plain stderr, or use [`RecordingReporter`]
//! in tests to observe what would have been said.

use std::sync::Mutex;

/// Receiver for status messages from other modules.
pub trait Reporter: Send + Sync {
    /// Routine trace, e.g. a successful cleanup. Best-effort; the
    /// plain-console fallback drops these.
    fn report_debug(&self, message: &str);

    /// Report a serious condition, e.g. a failed cleanup or a missing
    /// dependency.
    fn report_critical(&self, message: &str);
}

/// Plain stderr fallback used when no logger is wired in.
///
/// Debug traces are dropped; critical reports are printed as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report_debug(&self, _message: &str) {}

    fn report_critical(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Test double that records every message it receives.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    debugs: Mutex<Vec<String>>,
    criticals: Mutex<Vec<String>>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Debug messages received so far, in order.
    pub fn debugs(&self) -> Vec<String> {
        self.debugs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Critical messages received so far, in order.
    pub fn criticals(&self) -> Vec<String> {
        self.criticals
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Reporter for RecordingReporter {
    fn report_debug(&self, message: &str) {
        self.debugs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }

    fn report_critical(&self, message: &str) {
        self.criticals
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
