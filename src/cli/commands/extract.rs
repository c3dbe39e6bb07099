use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use tracing::warn;

use super::helper::open_workspace;
use crate::{
    cli::{
        args::ExtractCommand,
        exit_status::ExitStatus,
        report::{print_extraction, print_notice},
    },
    core::{
        ExtractError,
        document::{AutoKey, FileDocument, FixedKey, KeyPrompt},
        processor::run_extraction,
    },
};

/// Asks for the key suffix on stderr and reads the answer from stdin.
///
/// Empty input or end of input cancels.
struct StdinPrompt;

impl KeyPrompt for StdinPrompt {
    fn ask(&mut self, suggestion: &str) -> Option<String> {
        eprint!(
            "{} {} ",
            "Key suffix".bold(),
            format!("(e.g. {}):", suggestion).dimmed()
        );
        io::stderr().flush().ok();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(answer.trim().to_string()).filter(|answer| !answer.is_empty()),
        }
    }
}

pub async fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    let path = workspace.resolve_file(&cmd.file)?;
    let mut document = FileDocument::open(&path)?;

    let selected = match (&cmd.span, &cmd.find) {
        (Some(span), _) => document.select_chars(span.clone()),
        (None, Some(text)) => document.select_text(text, cmd.occurrence),
        (None, None) => Ok(()),
    };
    if let Err(err) = selected {
        return Ok(notice(&err));
    }

    let load = workspace.store.spawn_load();

    let mut prompt: Box<dyn KeyPrompt> = match (&cmd.key, cmd.auto_key) {
        (Some(key), _) => Box::new(FixedKey(key.clone())),
        (None, true) => Box::new(AutoKey),
        (None, false) => Box::new(StdinPrompt),
    };

    let result = run_extraction(
        workspace.context(),
        &mut document,
        prompt.as_mut(),
        cmd.apply,
    )
    .await;

    if let Ok(Err(err)) = load.await {
        warn!("Locale index is incomplete: {}", err);
    }

    match result {
        Ok(outcome) => {
            if cmd.apply {
                document.save()?;
            }
            print_extraction(&outcome, &workspace.root, cmd.apply);
            Ok(ExitStatus::Success)
        }
        Err(err) if err.is_notice() => Ok(notice(&err)),
        Err(err) => Err(err.into()),
    }
}

/// Report a notice. A cancelled prompt is not a failure.
fn notice(err: &ExtractError) -> ExitStatus {
    print_notice(err);
    match err {
        ExtractError::UserCancelled => ExitStatus::Success,
        _ => ExitStatus::Failure,
    }
}
