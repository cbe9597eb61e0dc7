//! Dependency preflight: executable lookup on the search path.
//!
//! Resolution walks the `PATH` directories directly instead of shelling
//! out to `which` - `which` behavior varies across systems and is
//! sometimes a shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{GuylineError, Result};
use crate::report::{ConsoleReporter, Reporter};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not
/// permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a command name against an explicit list of directories.
///
/// Returns the first candidate that exists and is executable.
pub fn resolve_in(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in dirs {
        let candidate = dir.join(name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Resolve a command name against the system PATH.
pub fn resolve(name: &str) -> Option<PathBuf> {
    resolve_in(name, &search_path())
}

/// Whether `name` resolves to an executable on the system PATH.
pub fn is_installed(name: &str) -> bool {
    resolve(name).is_some()
}

/// Fail-fast presence checks for required external commands.
///
/// A miss is reported at critical level through the injected [`Reporter`]
/// and surfaces as [`GuylineError::MissingDependency`]; the binary maps
/// that to a non-zero exit.
pub struct DependencyChecker {
    reporter: Arc<dyn Reporter>,
}

impl DependencyChecker {
    /// Create a checker reporting through the plain-console fallback.
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(ConsoleReporter))
    }

    /// Create a checker with an injected reporter.
    pub fn with_reporter(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }

    /// Verify that one command is present on PATH.
    pub fn check(&self, name: &str) -> Result<()> {
        if is_installed(name) {
            return Ok(());
        }
        self.reporter.report_critical(&format!(
            "Required command '{name}' was not found on PATH"
        ));
        Err(GuylineError::MissingDependency {
            name: name.to_string(),
        })
    }

    /// Verify a list of commands in order, stopping at the first miss.
    ///
    /// No aggregation: names after the first missing one are never probed.
    pub fn check_all<I, S>(&self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.check(name.as_ref())?;
        }
        Ok(())
    }
}

impl Default for DependencyChecker {
    fn default() -> Self {
        Self::new()
    }
}
