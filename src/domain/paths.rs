//! Fixed project-relative locations patched or created by the installer.

/// Persisted manifest at the consumer project root.
pub const MANIFEST_FILE: &str = "simple-ui.json";

/// Global stylesheet receiving the directive/theme merge.
pub const STYLESHEET_PATH: &str = "app/globals.css";

/// Utility module holding the class-merge helper.
pub const UTILS_MODULE_PATH: &str = "lib/utils.ts";

/// Folder components are installed into.
pub const COMPONENT_DIR: &str = "components/ui";

/// Extension shared by every template and installed component.
pub const TEMPLATE_EXT: &str = ".tsx";

/// Project-relative destination for a named component.
pub fn component_dest(name: &str) -> String {
    format!("{COMPONENT_DIR}/{name}{TEMPLATE_EXT}")
}
