use std::process::ExitCode;

use clap::Parser;
use lexi::cli::{Arguments, Command, ExitStatus};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = lexi::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match lexi::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Logs go to stderr so stdout stays usable for reports and the MCP transport.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("LEXI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
