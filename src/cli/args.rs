//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Move a string from a Ruby/ERB file into a locale file
//! - `keys`: List the `I18n.t` keys used by a file
//! - `lookup`: Show the value of a key
//! - `find`: Find the key holding a string
//! - `init`: Initialize a lexi configuration file
//! - `config`: Show the configuration or edit its base file list
//! - `serve`: Start MCP server for AI integration

use std::{ops::Range, path::PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Find(cmd)) => cmd.common.verbose,
            Some(Command::Config(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Base locale (overrides config file)
    #[arg(long, env = "LEXI_BASE_LOCALE")]
    pub base_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Ruby (.rb) or ERB (.erb) file to extract from
    pub file: PathBuf,

    /// Character range to extract, e.g. 120..142
    #[arg(long, value_parser = parse_span, conflicts_with = "find", required_unless_present = "find")]
    pub span: Option<Range<usize>>,

    /// Extract the first occurrence of this text
    #[arg(long)]
    pub find: Option<String>,

    /// Which occurrence of --find to extract (1-based)
    #[arg(long, default_value_t = 1)]
    pub occurrence: usize,

    /// Key suffix for a new entry (prompted for when omitted)
    #[arg(long, conflicts_with = "auto_key")]
    pub key: Option<String>,

    /// Derive the key suffix from the extracted text
    #[arg(long)]
    pub auto_key: bool,

    /// Actually write the locale file and the source file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// File whose I18n.t calls are listed
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Key with or without the locale segment, e.g. models.user.greeting
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FindCommand {
    /// Exact locale value, placeholders included, e.g. "Hola %{name}"
    pub text: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration and the base file entries
    Show,
    /// Add a YAML file searched first for existing keys
    AddBaseFile {
        /// Path relative to the project root
        path: String,
    },
    /// Remove a file from the base file list
    RemoveBaseFile {
        /// Path as listed in the configuration
        path: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace a hard-coded string with an I18n.t call and store it in a locale file
    Extract(ExtractCommand),
    /// List the I18n.t keys used in a file with their values
    Keys(KeysCommand),
    /// Show the value and location of a key
    Lookup(LookupCommand),
    /// Find the key that holds a string
    Find(FindCommand),
    /// Initialize a new .lexirc.json configuration file
    Init,
    /// Show or edit the configuration
    Config(ConfigCommand),
    /// Start MCP server for AI coding agents
    Serve,
}

/// Parse `START..END` (character offsets, end exclusive).
fn parse_span(value: &str) -> Result<Range<usize>, String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got \"{}\"", value))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start offset \"{}\"", start))?;
    let end: usize = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid end offset \"{}\"", end))?;
    if start > end {
        return Err(format!("start {} is after end {}", start, end));
    }
    Ok(start..end)
}
