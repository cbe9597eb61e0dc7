//! Guyline - logging, scratch directories, and dependency preflight for
//! command-line tools.
//!
//! Guyline bundles the three support facilities that ad-hoc scripts keep
//! reinventing: leveled dual-sink logging, temporary directories that are
//! guaranteed to be cleaned up on exit, and fail-fast checks for external
//! commands.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`deps`] - Executable lookup on PATH and dependency preflight
//! - [`error`] - Error types and result aliases
//! - [`log`] - Leveled, colorized, dual-sink logging
//! - [`report`] - Status-reporting capability injected into the other modules
//! - [`scratch`] - Tracked scratch directories with drop-time cleanup
//!
//! # Example
//!
//! ```
//! use guyline::log::Level;
//! use guyline::scratch::ScratchRegistry;
//!
//! let registry = ScratchRegistry::new();
//! let dir = registry.create_dir().unwrap();
//! assert!(dir.is_dir());
//! assert!(Level::Debug > Level::Info);
//! // Dropping the registry removes `dir` and everything inside it.
//! drop(registry);
//! assert!(!dir.exists());
//! ```

pub mod cli;
pub mod deps;
pub mod error;
pub mod log;
pub mod report;
pub mod scratch;

pub use error::{GuylineError, Result};
