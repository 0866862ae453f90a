//! Init command: patch the shared project files and create the manifest.

use crate::app::AppContext;
use crate::domain::paths::{STYLESHEET_PATH, UTILS_MODULE_PATH};
use crate::domain::{AppError, ProjectManifest};
use crate::ports::{ManifestStore, ProjectStore, Prompt, TemplateStore};
use crate::services::scaffold_assets;

/// Result of the init command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Stylesheet and utility module merged, manifest created.
    Initialized,
    /// Manifest already present; nothing was written.
    AlreadyInitialized,
}

/// Execute the init command.
///
/// The three artifact writes are independent; a failure surfaces
/// immediately and whatever already succeeded stays on disk. Re-running
/// is safe because every sub-step is idempotent.
pub fn execute<M, P, T, Q>(ctx: &AppContext<M, P, T, Q>) -> Result<InitOutcome, AppError>
where
    M: ManifestStore,
    P: ProjectStore,
    T: TemplateStore,
    Q: Prompt,
{
    if ctx.manifest().exists() {
        return Ok(InitOutcome::AlreadyInitialized);
    }

    let stylesheet = ctx.project().read_text(STYLESHEET_PATH)?.unwrap_or_default();
    ctx.project().write_text(STYLESHEET_PATH, &scaffold_assets::merge_stylesheet(&stylesheet))?;

    let utils = ctx.project().read_text(UTILS_MODULE_PATH)?.unwrap_or_default();
    ctx.project().write_text(UTILS_MODULE_PATH, &scaffold_assets::merge_utils(&utils))?;

    ctx.manifest().persist(&ProjectManifest::initial())?;

    Ok(InitOutcome::Initialized)
}
