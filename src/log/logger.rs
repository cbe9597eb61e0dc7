//! Dual-sink log emission.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Local, Utc};
use console::strip_ansi_codes;

use super::level::Level;
use crate::report::Reporter;

/// Timestamp layout for the file sink: RFC3339 with nanoseconds, UTC.
/// Machine-sortable, so file records can be correlated across runs.
const FILE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

/// Default timestamp layout for the console sink (local time).
const CONSOLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Check if colors should be enabled on the console sink.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Messages go to stderr, so that is the stream that matters
    console::Term::stderr().is_term()
}

/// Configuration for [`Logger`] construction.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Console verbosity threshold. The file sink ignores it.
    pub verbosity: Level,
    /// Path of the persistent log file. The file must already exist and be
    /// writable; otherwise file-sink writes are silently skipped.
    pub log_file: Option<PathBuf>,
    /// Program name shown in console lines. Defaults to the current
    /// executable's file stem.
    pub program: Option<String>,
    /// `chrono` format string for console timestamps.
    pub console_time_format: String,
    /// Whether to colorize console level labels.
    pub color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbosity: Level::default(),
            log_file: None,
            program: None,
            console_time_format: CONSOLE_TIME_FORMAT.to_string(),
            color: should_use_colors(),
        }
    }
}

/// Leveled, dual-sink logger.
///
/// Construction is cheap and carries no process-global state; two loggers
/// built from the same [`LoggerConfig`] behave identically. Verbosity is
/// the only mutable part and sits behind a lock so a shared logger can be
/// handed out as `Arc<Logger>` across threads.
///
/// The logger never fails its caller: sink I/O errors are swallowed and an
/// unwritable log file degrades to console-only output.
#[derive(Debug)]
pub struct Logger {
    verbosity: RwLock<Level>,
    log_file: Option<PathBuf>,
    program: String,
    console_time_format: String,
    color: bool,
}

impl Logger {
    /// Create a logger from a configuration.
    pub fn new(config: LoggerConfig) -> Self {
        let program = config.program.unwrap_or_else(program_name);
        Self {
            verbosity: RwLock::new(config.verbosity),
            log_file: config.log_file,
            program,
            console_time_format: config.console_time_format,
            color: config.color,
        }
    }

    /// Current console verbosity threshold.
    pub fn verbosity(&self) -> Level {
        *self
            .verbosity
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adjust the console verbosity threshold at runtime.
    pub fn set_verbosity(&self, level: Level) {
        *self
            .verbosity
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
    }

    /// Whether a message at `level` would be echoed to the console.
    pub fn console_echoes(&self, level: Level) -> bool {
        self.verbosity() >= level
    }

    /// Emit one message to both sinks.
    ///
    /// A single instant is captured and rendered twice: RFC3339-nanosecond
    /// UTC for the file line, local time for the console line, so the two
    /// records stay correlated.
    ///
    /// File sink (unconditional, ANSI-stripped, append-only):
    /// `[<ts>] <LABEL padded>: <message>` or `[<ts>] <message>` without a
    /// level. The write is skipped silently unless the configured file
    /// already exists and opens for append; this is probed on every write,
    /// never cached.
    ///
    /// Console sink (stderr, only when verbosity >= level):
    /// `[<ts>] {<program>} <colored LABEL>: <message>` or the label-free
    /// form. Messages with no level are always echoed.
    pub fn emit(&self, level: Option<Level>, args: fmt::Arguments<'_>) {
        let now = Utc::now();
        let message = args.to_string();

        self.write_file(&now, level, &message);

        if level.map_or(true, |l| self.console_echoes(l)) {
            eprintln!("{}", self.format_console_line(&now, level, &message));
        }
    }

    /// Plain message: no level label, always echoed to the console.
    pub fn plain(&self, args: fmt::Arguments<'_>) {
        self.emit(None, args);
    }

    /// Critical-level message (magenta).
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.emit(Some(Level::Critical), args);
    }

    /// Error-level message (red).
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Some(Level::Error), args);
    }

    /// Warning-level message (yellow).
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(Some(Level::Warning), args);
    }

    /// Info-level message (blue).
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Some(Level::Info), args);
    }

    /// Debug-level message (uncolored).
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Some(Level::Debug), args);
    }

    fn write_file(&self, now: &DateTime<Utc>, level: Option<Level>, message: &str) {
        let Some(path) = &self.log_file else {
            return;
        };
        // Append only if the file already exists and is writable. Probed on
        // every write so the sink can appear or vanish mid-run.
        let Ok(mut file) = OpenOptions::new().append(true).open(path) else {
            return;
        };
        let _ = writeln!(file, "{}", format_file_line(now, level, message));
    }

    fn format_console_line(
        &self,
        now: &DateTime<Utc>,
        level: Option<Level>,
        message: &str,
    ) -> String {
        let ts = now
            .with_timezone(&Local)
            .format(&self.console_time_format);
        match level {
            Some(l) => {
                let label = if self.color {
                    // The color decision was already made at construction;
                    // don't let console's own TTY probe second-guess it.
                    l.style()
                        .force_styling(true)
                        .apply_to(l.padded_label())
                        .to_string()
                } else {
                    l.padded_label()
                };
                format!("[{ts}] {{{}}} {label}: {message}", self.program)
            }
            None => format!("[{ts}] {{{}}} {message}", self.program),
        }
    }
}

impl Reporter for Logger {
    fn report_debug(&self, message: &str) {
        self.debug(format_args!("{message}"));
    }

    fn report_critical(&self, message: &str) {
        self.critical(format_args!("{message}"));
    }
}

/// Render a file-sink line: ANSI-free, fixed-width label column.
fn format_file_line(now: &DateTime<Utc>, level: Option<Level>, message: &str) -> String {
    let ts = now.format(FILE_TIME_FORMAT);
    let clean = strip_ansi_codes(message);
    match level {
        Some(l) => format!("[{ts}] {}: {clean}", l.padded_label()),
        None => format!("[{ts}] {clean}"),
    }
}

/// Program name for console lines, derived from the running executable.
fn program_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "guyline".to_string())
}
