use serde::{Deserialize, Serialize};

use crate::domain::paths::STYLESHEET_PATH;

/// Path prefixes for the fixed logical roots of a consumer project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases {
    pub ui: String,
    pub lib: String,
    pub hooks: String,
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            ui: "@/components/ui".to_string(),
            lib: "@/lib".to_string(),
            hooks: "@/hooks".to_string(),
        }
    }
}

/// Persisted record of initialization state and installed components.
///
/// Lives at `simple-ui.json` in the consumer project root; absence of the
/// file means the project is not initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Stylesheet the directive/theme merge targets.
    #[serde(rename = "styleEntry", default = "default_style_entry")]
    pub style_entry: String,

    #[serde(default)]
    pub aliases: Aliases,

    /// Installed component names, insertion-ordered, each at most once.
    #[serde(default)]
    pub components: Vec<String>,
}

fn default_style_entry() -> String {
    STYLESHEET_PATH.to_string()
}

impl ProjectManifest {
    /// Fresh manifest with no installed components. Does not write anything.
    pub fn initial() -> Self {
        Self {
            style_entry: default_style_entry(),
            aliases: Aliases::default(),
            components: Vec::new(),
        }
    }

    /// Append `name` iff not already present. Returns whether the set changed.
    pub fn register_component(&mut self, name: &str) -> bool {
        if self.components.iter().any(|existing| existing == name) {
            return false;
        }
        self.components.push(name.to_string());
        true
    }
}
