//! Tracked scratch directories with drop-time cleanup.
//!
//! Scripts that abort halfway through are the main way temporary
//! directories leak. The registry closes that hole by owning every
//! directory it hands out: callers get a path, the registry keeps the
//! obligation to delete it, and the delete happens when the registry is
//! dropped at the end of the process, whichever exit path gets there.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{GuylineError, Result};
use crate::report::{ConsoleReporter, Reporter};

/// Registry of scratch directories, cleaned up on drop.
///
/// Owned by the process entry point and shared by reference. Creation
/// failures are fatal by policy: callers receive the error and the binary
/// exits non-zero without retrying. Cleanup failures are the opposite -
/// reported through the injected [`Reporter`] and skipped, so one
/// undeletable directory never masks the removal of the rest.
///
/// Dropping an empty registry does nothing; the cleanup obligation is
/// armed by the first successful [`create_dir`](Self::create_dir).
pub struct ScratchRegistry {
    dirs: Mutex<Vec<PathBuf>>,
    reporter: Arc<dyn Reporter>,
}

impl ScratchRegistry {
    /// Create a registry reporting through the plain-console fallback.
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(ConsoleReporter))
    }

    /// Create a registry with an injected reporter.
    pub fn with_reporter(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            dirs: Mutex::new(Vec::new()),
            reporter,
        }
    }

    /// Create a fresh, uniquely named scratch directory and register it
    /// for removal.
    ///
    /// The directory lives under the OS temp root with a `guyline-`
    /// prefix. The caller owns its contents until the registry drops, at
    /// which point the directory is deleted unconditionally.
    pub fn create_dir(&self) -> Result<PathBuf> {
        let parent = std::env::temp_dir();
        let dir = tempfile::Builder::new()
            .prefix("guyline-")
            .tempdir_in(&parent)
            .map_err(|source| GuylineError::ScratchCreation {
                parent: parent.clone(),
                source,
            })?;
        // Detach from tempfile's own drop-time deletion; removal is the
        // registry's job from here on.
        let path = dir.keep();
        self.lock().push(path.clone());
        Ok(path)
    }

    /// Registered paths, in creation order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().clone()
    }

    /// Number of directories currently registered.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the registry holds no directories.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove every registered directory, in creation order.
    ///
    /// Runs automatically on drop. The registry is drained first, so the
    /// pass happens exactly once even if this is also called explicitly.
    /// A failed removal is reported at critical level and the loop moves
    /// on; a successful one leaves a debug trace.
    pub fn run_cleanup(&self) {
        let drained: Vec<PathBuf> = self.lock().drain(..).collect();
        for path in drained {
            match fs::remove_dir_all(&path) {
                Ok(()) => self
                    .reporter
                    .report_debug(&format!("Removed scratch directory {}", path.display())),
                Err(err) => self.reporter.report_critical(&format!(
                    "Failed to remove scratch directory {}: {}",
                    path.display(),
                    err
                )),
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PathBuf>> {
        self.dirs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ScratchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScratchRegistry {
    fn drop(&mut self) {
        self.run_cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;

    #[test]
    fn create_dir_returns_unique_writable_directories() {
        let registry = ScratchRegistry::new();
        let a = registry.create_dir().unwrap();
        let b = registry.create_dir().unwrap();

        assert_ne!(a, b);
        assert!(a.is_dir());
        assert!(b.is_dir());
        fs::write(a.join("probe"), "x").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn drop_removes_directories_and_their_contents() {
        let registry = ScratchRegistry::new();
        let a = registry.create_dir().unwrap();
        let b = registry.create_dir().unwrap();
        fs::write(a.join("data.txt"), "one").unwrap();
        fs::create_dir(b.join("nested")).unwrap();
        fs::write(b.join("nested/data.txt"), "two").unwrap();

        drop(registry);

        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn cleanup_continues_past_a_failed_removal() {
        let reporter = Arc::new(RecordingReporter::new());
        let registry = ScratchRegistry::with_reporter(reporter.clone());
        let first = registry.create_dir().unwrap();
        let gone = registry.create_dir().unwrap();
        let last = registry.create_dir().unwrap();

        // Remove the middle entry out from under the registry so its own
        // removal attempt fails.
        fs::remove_dir_all(&gone).unwrap();

        registry.run_cleanup();

        assert!(!first.exists());
        assert!(!last.exists());
        let criticals = reporter.criticals();
        assert_eq!(criticals.len(), 1);
        assert!(criticals[0].contains(&gone.display().to_string()));
        assert_eq!(reporter.debugs().len(), 2);
    }

    #[test]
    fn cleanup_runs_exactly_once() {
        let reporter = Arc::new(RecordingReporter::new());
        let registry = ScratchRegistry::with_reporter(reporter.clone());
        registry.create_dir().unwrap();

        registry.run_cleanup();
        assert!(registry.is_empty());
        registry.run_cleanup();
        drop(registry);

        assert_eq!(reporter.debugs().len(), 1);
        assert!(reporter.criticals().is_empty());
    }

    #[test]
    fn cleanup_preserves_creation_order() {
        let reporter = Arc::new(RecordingReporter::new());
        let registry = ScratchRegistry::with_reporter(reporter.clone());
        let a = registry.create_dir().unwrap();
        let b = registry.create_dir().unwrap();
        assert_eq!(registry.paths(), vec![a.clone(), b.clone()]);

        drop(registry);

        let debugs = reporter.debugs();
        assert_eq!(debugs.len(), 2);
        assert!(debugs[0].contains(&a.display().to_string()));
        assert!(debugs[1].contains(&b.display().to_string()));
    }

    #[test]
    fn empty_registry_drop_reports_nothing() {
        let reporter = Arc::new(RecordingReporter::new());
        drop(ScratchRegistry::with_reporter(reporter.clone()));

        assert!(reporter.debugs().is_empty());
        assert!(reporter.criticals().is_empty());
    }
}
