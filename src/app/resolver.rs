//! Decides what to do with a destination file that may already exist.

use crate::domain::AppError;
use crate::ports::Prompt;

/// Terminal action for a single destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    /// Destination absent: write without asking.
    CreateDirect,
    /// Destination present and the operator approved replacing it.
    Overwrite,
    /// Destination present and the operator declined: leave it untouched.
    SkipPreserveExisting,
}

/// Resolve the action for a destination, asking the operator when needed.
///
/// `force` stands in for an already-given approval and suppresses the
/// prompt entirely.
pub fn resolve<Q: Prompt>(
    destination_exists: bool,
    force: bool,
    component: &str,
    prompt: &Q,
) -> Result<CopyAction, AppError> {
    if !destination_exists {
        return Ok(CopyAction::CreateDirect);
    }
    if force {
        return Ok(CopyAction::Overwrite);
    }

    let answer = prompt.ask(&format!("⚠ {component} already exists. Replace? (y/n):"))?;
    Ok(interpret_answer(&answer))
}

/// `y`/`yes` in any casing approves the overwrite; anything else skips.
fn interpret_answer(answer: &str) -> CopyAction {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => CopyAction::Overwrite,
        _ => CopyAction::SkipPreserveExisting,
    }
}
