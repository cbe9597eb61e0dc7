//! Guyline CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use guyline::cli::{dispatch, Cli};
use guyline::log::{should_use_colors, Level, Logger, LoggerConfig};
use guyline::GuylineError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logger = Arc::new(Logger::new(LoggerConfig {
        verbosity: Level::from(cli.verbosity),
        log_file: cli.log_file.clone(),
        color: !cli.no_color && should_use_colors(),
        ..LoggerConfig::default()
    }));

    match dispatch(&cli, logger.clone()) {
        Ok(result) => ExitCode::from(result.exit_code.clamp(0, 255) as u8),
        Err(err) => {
            // Missing dependencies were already reported at critical level
            // by the checker itself.
            if !matches!(err, GuylineError::MissingDependency { .. }) {
                logger.critical(format_args!("{err}"));
            }
            ExitCode::from(1)
        }
    }
}
