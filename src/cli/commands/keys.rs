use std::fs;

use anyhow::{Context, Result};

use super::helper::{load_locales, open_workspace};
use crate::{
    cli::{
        args::KeysCommand,
        exit_status::ExitStatus,
        report::{display_path, print_usages},
    },
    core::usage::{find_usages, resolve_usages},
};

pub async fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    let path = workspace.resolve_file(&cmd.file)?;
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let usages = find_usages(&source);
    load_locales(&workspace).await?;
    let resolved = resolve_usages(&usages, &workspace.store);

    print_usages(
        &display_path(&workspace.root, &path),
        &source,
        &resolved,
        &workspace.root,
    );

    if resolved.iter().all(|usage| usage.is_found()) {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
