mod manifest_json;
mod project_filesystem;
mod prompt_console;
mod templates_embedded;

pub mod scaffold_assets;

pub use manifest_json::JsonManifestStore;
pub use project_filesystem::FilesystemProjectStore;
pub use prompt_console::ConsolePrompt;
pub use templates_embedded::EmbeddedTemplateStore;
