//! List command: report installed components and the template catalog.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ManifestStore, ProjectStore, Prompt, TemplateStore};

/// Installed and available component names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOutput {
    /// Names from the manifest, in installation order.
    pub installed: Vec<String>,
    /// Template names embedded in the binary, sorted.
    pub available: Vec<String>,
}

/// Execute the list command.
pub fn execute<M, P, T, Q>(ctx: &AppContext<M, P, T, Q>) -> Result<ListOutput, AppError>
where
    M: ManifestStore,
    P: ProjectStore,
    T: TemplateStore,
    Q: Prompt,
{
    let installed =
        if ctx.manifest().exists() { ctx.manifest().load()?.components } else { Vec::new() };

    Ok(ListOutput { installed, available: ctx.templates().names() })
}
