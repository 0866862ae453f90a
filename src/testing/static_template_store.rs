use crate::ports::{TemplateFile, TemplateStore};

/// Template catalog over a fixed in-memory set.
#[derive(Default)]
pub struct StaticTemplateStore {
    templates: Vec<(String, &'static [u8])>,
}

impl StaticTemplateStore {
    pub fn with_templates<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = (S, &'static [u8])>,
        S: Into<String>,
    {
        Self { templates: templates.into_iter().map(|(name, bytes)| (name.into(), bytes)).collect() }
    }
}

impl TemplateStore for StaticTemplateStore {
    fn find(&self, name: &str) -> Option<TemplateFile> {
        self.templates
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(name, contents)| TemplateFile { name: name.clone(), contents })
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.templates.iter().map(|(name, _)| name.clone()).collect();
        names.sort();
        names
    }
}
