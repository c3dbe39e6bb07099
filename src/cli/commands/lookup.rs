use anyhow::Result;

use super::helper::{load_locales, open_workspace};
use crate::cli::{
    args::LookupCommand,
    exit_status::ExitStatus,
    report::{print_definition, print_not_found},
};

pub async fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    load_locales(&workspace).await?;

    let key = cmd.key.trim();
    match workspace.store.find_by_suffix(key) {
        Some(entry) => {
            let line = workspace.definition_line(&entry.source_file, &entry.key);
            print_definition(
                &entry.key,
                &entry.value,
                &entry.source_file,
                line,
                &workspace.root,
            );
            Ok(ExitStatus::Success)
        }
        None => {
            print_not_found(&format!("Key \"{}\"", key));
            Ok(ExitStatus::Failure)
        }
    }
}
