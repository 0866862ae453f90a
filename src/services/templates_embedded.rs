use include_dir::{Dir, include_dir};

use crate::domain::paths::TEMPLATE_EXT;
use crate::ports::{TemplateFile, TemplateStore};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template catalog compiled into the binary.
#[derive(Debug, Default, Clone)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn find(&self, name: &str) -> Option<TemplateFile> {
        let file = TEMPLATE_DIR.get_file(format!("{name}{TEMPLATE_EXT}"))?;
        Some(TemplateFile { name: name.to_string(), contents: file.contents() })
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = TEMPLATE_DIR
            .files()
            .filter_map(|file| {
                let path = file.path();
                if path.extension().is_some_and(|ext| ext == "tsx") {
                    path.file_stem().and_then(|stem| stem.to_str()).map(str::to_string)
                } else {
                    None
                }
            })
            .collect();

        names.sort();
        names
    }
}
