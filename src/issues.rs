//! Defect types produced by a scan.
//!
//! A defect is a single occurrence of text or an attribute value that looks
//! like an unresolved translation placeholder. Each defect carries everything
//! the reporters need: what was found, on which element, and where.

use serde::{Deserialize, Serialize};

/// Where in the element the placeholder was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectKind {
    Text,
    Attribute,
}

impl std::fmt::Display for DefectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefectKind::Text => write!(f, "text"),
            DefectKind::Attribute => write!(f, "attribute"),
        }
    }
}

/// One untranslated-looking string occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    pub kind: DefectKind,
    /// The offending string, trimmed.
    pub value: String,
    /// Set only for attribute defects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    /// Uppercase tag name of the owning element.
    pub element_tag: String,
    pub location_path: String,
}

impl Defect {
    pub fn text(value: &str, element_tag: &str, location_path: String) -> Self {
        Self {
            kind: DefectKind::Text,
            value: value.trim().to_string(),
            attribute_name: None,
            element_tag: element_tag.to_ascii_uppercase(),
            location_path,
        }
    }

    pub fn attribute(
        attribute_name: &str,
        value: &str,
        element_tag: &str,
        location_path: String,
    ) -> Self {
        Self {
            kind: DefectKind::Attribute,
            value: value.trim().to_string(),
            attribute_name: Some(attribute_name.to_string()),
            element_tag: element_tag.to_ascii_uppercase(),
            location_path,
        }
    }

    /// Short rule-like label, e.g. `text` or `attribute:placeholder`.
    pub fn label(&self) -> String {
        match &self.attribute_name {
            Some(name) => format!("{}:{}", self.kind, name),
            None => self.kind.to_string(),
        }
    }
}
