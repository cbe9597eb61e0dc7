//! Error types for Guyline operations.
//!
//! This module defines [`GuylineError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `ScratchCreation` and `MissingDependency` are fatal by policy: the
//!   binary maps them to a non-zero exit without retrying
//! - Cleanup failures are *not* errors; they are reported through the
//!   [`Reporter`](crate::report::Reporter) capability and never interrupt
//!   the remaining cleanup work
//! - Logging never produces an error at all; an unwritable log file
//!   degrades silently to console-only output

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Guyline operations.
#[derive(Debug, Error)]
pub enum GuylineError {
    /// The OS could not create a scratch directory.
    #[error("Failed to create scratch directory under {parent}: {source}")]
    ScratchCreation {
        parent: PathBuf,
        source: std::io::Error,
    },

    /// A required external command is not on PATH.
    #[error("Missing dependency '{name}': not found on PATH")]
    MissingDependency { name: String },

    /// A child command could not be spawned.
    #[error("Failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Guyline operations.
pub type Result<T> = std::result::Result<T, GuylineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_creation_displays_parent_and_source() {
        let err = GuylineError::ScratchCreation {
            parent: PathBuf::from("/tmp"),
            source: std::io::Error::other("disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn missing_dependency_displays_name() {
        let err = GuylineError::MissingDependency {
            name: "xorriso".into(),
        };
        assert!(err.to_string().contains("xorriso"));
        assert!(err.to_string().contains("PATH"));
    }

    #[test]
    fn command_spawn_displays_command() {
        let err = GuylineError::CommandSpawn {
            command: "sh".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("sh"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GuylineError = io_err.into();
        assert!(matches!(err, GuylineError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GuylineError::MissingDependency { name: "jq".into() })
        }
        assert!(returns_error().is_err());
    }
}
