use anyhow::Result;
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    core::locale::LoadSummary,
    workspace::Workspace,
};

/// Load the workspace named by `common` without indexing it yet.
pub fn open_workspace(common: &CommonArgs) -> Result<Workspace> {
    Workspace::load(&common.root, common.base_locale.as_deref())
}

/// Index every locale file of `workspace` and wait for the result.
pub async fn load_locales(workspace: &Workspace) -> Result<LoadSummary> {
    let summary = workspace.store.spawn_load().await??;
    debug!(
        "Indexed {} keys from {} locale files ({} skipped)",
        summary.entries,
        summary.files,
        summary.warnings.len()
    );
    Ok(summary)
}
