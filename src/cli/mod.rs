//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap definitions
//! - `commands`: one handler per subcommand
//! - `report`: terminal output
//! - `exit_status`: process exit codes

mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args)?;
    Ok(status.into())
}
