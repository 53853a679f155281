//! Item metadata documents
//!
//! The text recovered from an item payload is a YAML rendering of the
//! item's metadata. The fields the resolver cares about all live under
//! the top-level `meta` mapping:
//!
//! ```yaml
//! meta:
//!   display-name: '"My Sword"'
//!   title: An Adventure
//!   stored-enchants:
//!     minecraft:sharpness: 5
//! ```
//!
//! [`ItemMeta`] keeps both the parsed tree and the original source text,
//! so callers can inspect the document exactly as it was stored.

use serde_yaml::Value;

/// Errors that can occur while parsing item metadata
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Parsed item metadata document
#[derive(Debug, Clone)]
pub struct ItemMeta {
    source: String,
    root: Value,
}

impl ItemMeta {
    /// Parse a YAML document into an `ItemMeta`.
    pub fn from_yaml(text: &str) -> Result<Self, MetaError> {
        let root: Value = serde_yaml::from_str(text)?;
        Ok(Self {
            source: text.to_string(),
            root,
        })
    }

    /// Original YAML text, exactly as stored
    pub fn source(&self) -> &str {
        &self.source
    }

    /// `meta.display-name`, when present and scalar
    pub fn display_name(&self) -> Option<String> {
        self.meta_field("display-name")
    }

    /// `meta.title`, when present and scalar
    pub fn title(&self) -> Option<String> {
        self.meta_field("title")
    }

    /// `meta.stored-enchants` mapping, when present
    pub fn stored_enchants(&self) -> Option<&serde_yaml::Mapping> {
        self.root.get("meta")?.get("stored-enchants")?.as_mapping()
    }

    fn meta_field(&self, key: &str) -> Option<String> {
        scalar_string(self.root.get("meta")?.get(key)?)
    }
}

/// String form of a scalar node. Mappings and sequences have none.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
