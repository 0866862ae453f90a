/// A component template embedded in the binary.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Component name (the file stem).
    pub name: String,
    /// Raw template bytes, copied verbatim on install.
    pub contents: &'static [u8],
}

/// Port for the read-only template catalog.
pub trait TemplateStore {
    /// Look up a template by component name.
    fn find(&self, name: &str) -> Option<TemplateFile>;

    /// All template names, sorted.
    fn names(&self) -> Vec<String>;
}
