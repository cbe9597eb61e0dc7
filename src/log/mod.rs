//! Leveled, colorized, dual-sink logging.
//!
//! Every message is rendered twice from a single captured instant: an
//! ANSI-free line appended to the log file (when one is configured and
//! writable) and a colorized line on stderr, the latter filtered by the
//! logger's verbosity. See [`Logger::emit`] for the exact formats.

pub mod level;
pub mod logger;

pub use level::Level;
pub use logger::{should_use_colors, Logger, LoggerConfig};
