use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::helper::open_workspace;
use crate::{
    cli::{
        args::{CommonArgs, ConfigAction, ConfigCommand},
        exit_status::ExitStatus,
        report::{FAILURE_MARK, SUCCESS_MARK, display_path, print_not_found},
    },
    config::{CONFIG_FILE_NAME, load_config, save_config},
    core::locale::parse_locale_file,
};

pub fn config(cmd: ConfigCommand) -> Result<ExitStatus> {
    match cmd.action {
        ConfigAction::Show => show(&cmd.common),
        ConfigAction::AddBaseFile { path } => add_base_file(&cmd.common, &path),
        ConfigAction::RemoveBaseFile { path } => remove_base_file(&cmd.common, &path),
    }
}

fn show(common: &CommonArgs) -> Result<ExitStatus> {
    let workspace = open_workspace(common)?;

    match &workspace.config_path {
        Some(path) => println!(
            "{} {}",
            "Config:".bold(),
            display_path(&workspace.root, path)
        ),
        None => println!(
            "{} {}",
            "Config:".bold(),
            format!("no {} found, using defaults", CONFIG_FILE_NAME).dimmed()
        ),
    }
    println!("{}", serde_json::to_string_pretty(&workspace.config)?);

    if !workspace.config.base_yml_files.is_empty() {
        println!("\n{}", "Base files:".bold());
        for file in &workspace.config.base_yml_files {
            if workspace.root.join(file).is_file() {
                println!("  {} {}", SUCCESS_MARK.green(), file);
            } else {
                println!("  {} {} {}", FAILURE_MARK.red(), file, "(missing)".red());
            }
        }
    }

    Ok(ExitStatus::Success)
}

fn add_base_file(common: &CommonArgs, path: &str) -> Result<ExitStatus> {
    let root = canonical_root(&common.root)?;
    let path = normalize(path);
    let file = root.join(path);

    if !file.is_file() {
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} does not exist", path).red()
        );
        return Ok(ExitStatus::Failure);
    }
    if let Err(warning) = parse_locale_file(&file) {
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} is not a locale file: {}", path, warning.error).red()
        );
        return Ok(ExitStatus::Failure);
    }

    let loaded = load_config(&root)?;
    let config_path = loaded.path.unwrap_or_else(|| root.join(CONFIG_FILE_NAME));
    let mut config = loaded.config;

    if !config.add_base_file(path) {
        println!("{} {} is already listed", SUCCESS_MARK.green(), path);
        return Ok(ExitStatus::Success);
    }
    save_config(&config_path, &config)?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Added {} to {}", path, display_path(&root, &config_path)).green()
    );

    Ok(ExitStatus::Success)
}

fn remove_base_file(common: &CommonArgs, path: &str) -> Result<ExitStatus> {
    let root = canonical_root(&common.root)?;
    let path = normalize(path);

    let loaded = load_config(&root)?;
    let Some(config_path) = loaded.path else {
        print_not_found(&format!("Base file \"{}\"", path));
        return Ok(ExitStatus::Failure);
    };
    let mut config = loaded.config;

    if !config.remove_base_file(path) {
        print_not_found(&format!("Base file \"{}\"", path));
        return Ok(ExitStatus::Failure);
    }
    save_config(&config_path, &config)?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Removed {} from {}", path, display_path(&root, &config_path)).green()
    );

    Ok(ExitStatus::Success)
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize()
        .with_context(|| format!("Invalid project root: {}", root.display()))
}

/// `./shared.yml` and `shared.yml` name the same entry.
fn normalize(path: &str) -> &str {
    path.trim().trim_start_matches("./")
}
