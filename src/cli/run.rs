use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        config::config, extract::extract, find::find, init::init, keys::keys, lookup::lookup,
    },
    exit_status::ExitStatus,
};

/// Dispatch a parsed command line to its handler.
///
/// Async handlers run on a current-thread runtime; locale parsing happens on
/// the blocking pool.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match command {
        Some(Command::Extract(cmd)) => runtime.block_on(extract(cmd)),
        Some(Command::Keys(cmd)) => runtime.block_on(keys(cmd)),
        Some(Command::Lookup(cmd)) => runtime.block_on(lookup(cmd)),
        Some(Command::Find(cmd)) => runtime.block_on(find(cmd)),
        Some(Command::Config(cmd)) => config(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
