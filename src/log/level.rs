//! Severity levels and their console styling.

use std::fmt;
use std::str::FromStr;

use console::Style;

/// Width of the level label column in formatted log lines.
pub const LABEL_WIDTH: usize = 10;

/// Message severity, ordered from quietest to most verbose.
///
/// The same enum doubles as the console verbosity threshold: a message is
/// echoed to the console when the logger's verbosity is at or above the
/// message's level. The file sink ignores verbosity entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Nothing is echoed to the console.
    Silent = 0,
    /// Unrecoverable conditions.
    #[default]
    Critical = 1,
    /// Errors the caller may still handle.
    Error = 2,
    /// Suspicious but non-fatal conditions.
    Warning = 3,
    /// Routine progress.
    Info = 4,
    /// Diagnostic detail.
    Debug = 5,
}

impl Level {
    /// The textual label inserted into leveled log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Silent => "SILENT",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// The label left-justified to the fixed column width.
    pub fn padded_label(&self) -> String {
        format!("{:<width$}", self.label(), width = LABEL_WIDTH)
    }

    /// Console style for this level's label.
    pub fn style(&self) -> Style {
        match self {
            Self::Critical => Style::new().magenta(),
            Self::Error => Style::new().red(),
            Self::Warning => Style::new().yellow(),
            Self::Info => Style::new().blue(),
            Self::Silent | Self::Debug => Style::new(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric verbosity (0-5) as consumed from the environment. Values above
/// the debug level clamp to `Debug`.
impl From<u8> for Level {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Silent,
            1 => Self::Critical,
            2 => Self::Error,
            3 => Self::Warning,
            4 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "silent" => Ok(Self::Silent),
            "1" | "critical" => Ok(Self::Critical),
            "2" | "error" => Ok(Self::Error),
            "3" | "warning" | "warn" => Ok(Self::Warning),
            "4" | "info" => Ok(Self::Info),
            "5" | "debug" => Ok(Self::Debug),
            _ => Err(format!("unknown log level: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_from_quietest_to_most_verbose() {
        assert!(Level::Silent < Level::Critical);
        assert!(Level::Critical < Level::Error);
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Info);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn default_level_is_critical() {
        assert_eq!(Level::default(), Level::Critical);
    }

    #[test]
    fn from_u8_maps_each_value() {
        assert_eq!(Level::from(0), Level::Silent);
        assert_eq!(Level::from(1), Level::Critical);
        assert_eq!(Level::from(2), Level::Error);
        assert_eq!(Level::from(3), Level::Warning);
        assert_eq!(Level::from(4), Level::Info);
        assert_eq!(Level::from(5), Level::Debug);
    }

    #[test]
    fn from_u8_clamps_out_of_range_to_debug() {
        assert_eq!(Level::from(6), Level::Debug);
        assert_eq!(Level::from(255), Level::Debug);
    }

    #[test]
    fn from_str_accepts_names_and_digits() {
        assert_eq!("critical".parse::<Level>(), Ok(Level::Critical));
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("3".parse::<Level>(), Ok(Level::Warning));
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn padded_label_is_fixed_width() {
        for level in [
            Level::Critical,
            Level::Error,
            Level::Warning,
            Level::Info,
            Level::Debug,
        ] {
            assert_eq!(level.padded_label().len(), LABEL_WIDTH);
            assert!(level.padded_label().starts_with(level.label()));
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(format!("{}", Level::Info), "INFO");
    }
}
