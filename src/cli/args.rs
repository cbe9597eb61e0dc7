//! Argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Logging, scratch directories, and dependency preflight for scripts.
#[derive(Debug, Parser)]
#[command(name = "guyline", version, about)]
pub struct Cli {
    /// Console verbosity: 0 silent, 1 critical, 2 error, 3 warning,
    /// 4 info, 5 debug.
    #[arg(
        long,
        global = true,
        env = "GUYLINE_VERBOSITY",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub verbosity: u8,

    /// Append an ANSI-free copy of every message to this file. The file
    /// must already exist and be writable; otherwise it is skipped.
    #[arg(long, global = true, env = "GUYLINE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify that required commands are present on PATH.
    Check(CheckArgs),
    /// Run a command with tracked scratch directories.
    Scratch(ScratchArgs),
}

/// Arguments for `guyline check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Command names to verify, in order. Checking stops at the first
    /// missing one.
    #[arg(required = true)]
    pub tools: Vec<String>,
}

/// Arguments for `guyline scratch`.
#[derive(Debug, Args)]
pub struct ScratchArgs {
    /// Number of scratch directories to create.
    #[arg(long, default_value_t = 1)]
    pub dirs: usize,

    /// Command to run after `--`. The first directory is exported as
    /// GUYLINE_SCRATCH, all of them as GUYLINE_SCRATCH_0, _1, ...
    #[arg(required = true, last = true)]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn check_parses_tool_list() {
        let cli = Cli::try_parse_from(["guyline", "check", "git", "jq"]).unwrap();
        match cli.command {
            Commands::Check(args) => assert_eq!(args.tools, vec!["git", "jq"]),
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn check_requires_at_least_one_tool() {
        let err = Cli::try_parse_from(["guyline", "check"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn scratch_parses_command_after_separator() {
        let cli =
            Cli::try_parse_from(["guyline", "scratch", "--dirs", "2", "--", "sh", "-c", "true"])
                .unwrap();
        match cli.command {
            Commands::Scratch(args) => {
                assert_eq!(args.dirs, 2);
                assert_eq!(args.command, vec!["sh", "-c", "true"]);
            }
            _ => panic!("expected scratch subcommand"),
        }
    }

    #[test]
    fn verbosity_rejects_out_of_range_values() {
        let err = Cli::try_parse_from(["guyline", "--verbosity", "9", "check", "git"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn verbosity_defaults_to_critical() {
        let cli = Cli::try_parse_from(["guyline", "check", "git"]).unwrap();
        assert_eq!(cli.verbosity, 1);
    }
}
