use anyhow::Result;

use super::helper::{load_locales, open_workspace};
use crate::cli::{
    args::FindCommand,
    exit_status::ExitStatus,
    report::{print_definition, print_not_found},
};

pub async fn find(cmd: FindCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    load_locales(&workspace).await?;

    match workspace.key_for_text(&cmd.text) {
        Some(found) => {
            let line = workspace.definition_line(&found.source_file, &found.key);
            print_definition(
                &found.key,
                &cmd.text,
                &found.source_file,
                line,
                &workspace.root,
            );
            Ok(ExitStatus::Success)
        }
        None => {
            print_not_found(&format!("Text \"{}\"", cmd.text));
            Ok(ExitStatus::Failure)
        }
    }
}
