//! Test doubles for the capability ports. Compiled only for unit tests.

mod memory_manifest_store;
mod memory_project_store;
mod scripted_prompt;
mod static_template_store;

pub use memory_manifest_store::MemoryManifestStore;
pub use memory_project_store::MemoryProjectStore;
pub use scripted_prompt::ScriptedPrompt;
pub use static_template_store::StaticTemplateStore;
