//! Command implementations.

use std::process::Command;
use std::sync::Arc;

use crate::cli::args::{CheckArgs, Cli, Commands, ScratchArgs};
use crate::deps::DependencyChecker;
use crate::error::{GuylineError, Result};
use crate::log::Logger;
use crate::scratch::ScratchRegistry;

/// Outcome of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code to report.
    pub exit_code: i32,
}

impl CommandResult {
    /// Successful outcome.
    pub fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatch a parsed command line.
pub fn dispatch(cli: &Cli, logger: Arc<Logger>) -> Result<CommandResult> {
    match &cli.command {
        Commands::Check(args) => run_check(args, logger),
        Commands::Scratch(args) => run_scratch(args, logger),
    }
}

fn run_check(args: &CheckArgs, logger: Arc<Logger>) -> Result<CommandResult> {
    let checker = DependencyChecker::with_reporter(logger.clone());
    checker.check_all(&args.tools)?;
    logger.info(format_args!(
        "All {} required commands are present",
        args.tools.len()
    ));
    Ok(CommandResult::ok())
}

fn run_scratch(args: &ScratchArgs, logger: Arc<Logger>) -> Result<CommandResult> {
    let registry = ScratchRegistry::with_reporter(logger.clone());
    let mut dirs = Vec::with_capacity(args.dirs.max(1));
    for _ in 0..args.dirs.max(1) {
        dirs.push(registry.create_dir()?);
    }
    logger.debug(format_args!("Created {} scratch directories", dirs.len()));

    let (program, rest) = args
        .command
        .split_first()
        .ok_or_else(|| GuylineError::Other(anyhow::anyhow!("no command given")))?;

    let mut child = Command::new(program);
    child.args(rest).env("GUYLINE_SCRATCH", &dirs[0]);
    for (i, dir) in dirs.iter().enumerate() {
        child.env(format!("GUYLINE_SCRATCH_{i}"), dir);
    }

    let status = child.status().map_err(|source| GuylineError::CommandSpawn {
        command: program.clone(),
        source,
    })?;

    // The registry drops on return, which is when the directories vanish.
    // A signal death carries no code; report failure in that case.
    Ok(CommandResult {
        exit_code: status.code().unwrap_or(1),
    })
}
