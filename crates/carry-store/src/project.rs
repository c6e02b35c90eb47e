use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A learner project: named text fields under a header id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier the learner's progress refers to this project by.
    pub header_id: String,
    /// File name to file text.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Project {
    /// Create an empty project.
    pub fn new(header_id: impl Into<String>) -> Self {
        Self {
            header_id: header_id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.insert(name.into(), text.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Set a field, returning its previous text.
    pub fn set_field(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), text.into())
    }

    pub fn remove_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_accessors() {
        let mut project = Project::new("h1")
            .with_field("main.ts", "let x = 1")
            .with_field("pxt.json", "{}");
        assert_eq!(project.field("main.ts"), Some("let x = 1"));
        assert_eq!(project.set_field("main.ts", "let x = 2").as_deref(), Some("let x = 1"));
        assert_eq!(project.remove_field("pxt.json").as_deref(), Some("{}"));
        assert!(project.field("pxt.json").is_none());
    }

    #[test]
    fn serde_uses_camel_case() {
        let project = Project::new("h1").with_field("main.py", "pass");
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["headerId"], "h1");
        assert_eq!(value["fields"]["main.py"], "pass");

        let back: Project = serde_json::from_value(value).unwrap();
        assert_eq!(back, project);
    }
}
