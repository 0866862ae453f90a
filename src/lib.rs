//! simple-ui: install reusable UI component templates into a consumer
//! project, patching the shared stylesheet and class-merge helper along
//! the way and recording installs in `simple-ui.json`.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::{add, init, list};
use app::AppContext;
use domain::paths::{MANIFEST_FILE, STYLESHEET_PATH, UTILS_MODULE_PATH};
use services::{ConsolePrompt, EmbeddedTemplateStore, FilesystemProjectStore, JsonManifestStore};

pub use app::commands::add::AddOutcome;
pub use app::commands::init::InitOutcome;
pub use app::commands::list::ListOutput;
pub use domain::AppError;

type DefaultContext =
    AppContext<JsonManifestStore, FilesystemProjectStore, EmbeddedTemplateStore, ConsolePrompt>;

fn current_context() -> Result<DefaultContext, AppError> {
    let root = std::env::current_dir()?;
    Ok(AppContext::new(
        JsonManifestStore::new(root.clone()),
        FilesystemProjectStore::new(root),
        EmbeddedTemplateStore::new(),
        ConsolePrompt::new(),
    ))
}

/// Initialize simple-ui in the current directory.
pub fn init() -> Result<InitOutcome, AppError> {
    let ctx = current_context()?;
    let outcome = init::execute(&ctx)?;

    match outcome {
        InitOutcome::Initialized => {
            println!("✅ Updated {STYLESHEET_PATH}");
            println!("✅ Added {UTILS_MODULE_PATH} with cn function");
            println!("✅ Created {MANIFEST_FILE}");
            println!("🎉 Simple UI setup complete!");
        }
        InitOutcome::AlreadyInitialized => {
            println!("⚠ Simple UI already initialized. Skipping...");
        }
    }
    Ok(outcome)
}

/// Install the named component template into the current directory.
pub fn add(name: &str, force: bool) -> Result<AddOutcome, AppError> {
    let ctx = current_context()?;
    let outcome = add::execute(&ctx, name, force)?;

    match outcome {
        AddOutcome::Added => println!("✅ Added {name}"),
        AddOutcome::Replaced => println!("✅ Replaced {name}"),
        AddOutcome::Skipped => println!("⚠ Skipped {name}"),
    }
    Ok(outcome)
}

/// Show installed components and the embedded template catalog.
pub fn list() -> Result<ListOutput, AppError> {
    let ctx = current_context()?;
    let output = list::execute(&ctx)?;

    if output.installed.is_empty() {
        println!("No components installed yet");
    } else {
        println!("Installed components:");
        for name in &output.installed {
            println!("  {name}");
        }
    }

    println!("Available templates:");
    for name in &output.available {
        println!("  {name}");
    }
    Ok(output)
}
