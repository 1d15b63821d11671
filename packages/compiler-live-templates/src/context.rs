use std::collections::HashSet;

pub const DEFAULT_GROUP: &str = "UXCore";

/// Options for live-template generation
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    /// Qualified keys that are never collected
    pub skip: HashSet<String>,
    /// Parent names whose children keep their bare name as key
    pub skip_parent_name: HashSet<String>,
    /// Prepended to every template name
    pub prefix: String,
    /// Template set group, also used in each template's description
    pub group: String,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            skip: HashSet::new(),
            skip_parent_name: HashSet::new(),
            prefix: String::new(),
            group: DEFAULT_GROUP.to_string(),
        }
    }
}

/// Output buffer holding newline-separated document parts
#[derive(Debug, Default)]
pub struct TemplateContext {
    parts: Vec<String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>) {
        self.parts.push(text.into());
    }

    pub fn get_output(&self) -> String {
        self.parts.join("\n")
    }
}
