//! Command-line interface for Guyline.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, ScratchArgs};
pub use commands::{dispatch, CommandResult};
