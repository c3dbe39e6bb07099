use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    cli::{
        exit_status::ExitStatus,
        report::{FAILURE_MARK, SUCCESS_MARK},
    },
    config::{CONFIG_FILE_NAME, default_config_json},
};

/// Write the default configuration to the current directory.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    println!(
        "  Edit {} and {} to match your project",
        "baseLocale".cyan(),
        "localeVariants".cyan()
    );

    Ok(ExitStatus::Success)
}
