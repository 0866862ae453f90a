//! Add command: copy one component template into the project.

use crate::app::resolver::{self, CopyAction};
use crate::app::AppContext;
use crate::domain::{paths, AppError, ComponentName, ProjectManifest};
use crate::ports::{ManifestStore, ProjectStore, Prompt, TemplateStore};

/// Result of the add command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Fresh destination; template copied and name registered.
    Added,
    /// Existing destination replaced after approval.
    Replaced,
    /// Existing destination kept; nothing was written.
    Skipped,
}

/// Execute the add command.
///
/// Registration happens only after a successful copy, so a name appears in
/// the manifest iff its file landed in this run or a prior one.
pub fn execute<M, P, T, Q>(
    ctx: &AppContext<M, P, T, Q>,
    name: &str,
    force: bool,
) -> Result<AddOutcome, AppError>
where
    M: ManifestStore,
    P: ProjectStore,
    T: TemplateStore,
    Q: Prompt,
{
    let name = ComponentName::new(name)?;
    let template = ctx
        .templates()
        .find(name.as_str())
        .ok_or_else(|| AppError::TemplateNotFound(name.as_str().to_string()))?;

    let dest = paths::component_dest(name.as_str());
    let action =
        resolver::resolve(ctx.project().exists(&dest), force, name.as_str(), ctx.prompt())?;

    let outcome = match action {
        CopyAction::SkipPreserveExisting => return Ok(AddOutcome::Skipped),
        CopyAction::CreateDirect => AddOutcome::Added,
        CopyAction::Overwrite => AddOutcome::Replaced,
    };

    ctx.project().write_bytes(&dest, template.contents)?;

    let initialized = ctx.manifest().exists();
    let mut manifest =
        if initialized { ctx.manifest().load()? } else { ProjectManifest::initial() };
    if manifest.register_component(name.as_str()) || !initialized {
        ctx.manifest().persist(&manifest)?;
    }

    Ok(outcome)
}
