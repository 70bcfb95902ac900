//! Serde model of packaged icon-set documents.
//!
//! The format is a JSON object with a `prefix`, an `icons` mapping, an
//! optional `aliases` mapping, and optional set-level dimension defaults.
//! Unknown keys are ignored so newer documents keep loading.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{IconError, Result};
use crate::svg::ViewBox;

/// A packaged icon-set document.
#[derive(Debug, Clone, Deserialize)]
pub struct IconSetDocument {
    pub prefix: String,
    pub icons: BTreeMap<String, IconRecord>,
    #[serde(default)]
    pub aliases: BTreeMap<String, AliasRecord>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub info: Option<SetInfo>,
}

/// One icon definition inside a document.
#[derive(Debug, Clone, Deserialize)]
pub struct IconRecord {
    pub body: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub hidden: bool,
}

/// An alternative name for an icon already in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct AliasRecord {
    pub parent: String,
    #[serde(default)]
    pub hidden: bool,
}

/// Display metadata carried by some packaged sets.
#[derive(Debug, Clone, Deserialize)]
pub struct SetInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl IconSetDocument {
    /// Parse a document from JSON text.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| IconError::Set {
            message: format!("invalid icon set JSON: {e}"),
            help: None,
        })
    }

    /// Whether `name` exists in the document, as an icon or an alias.
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name) || self.aliases.contains_key(name)
    }

    /// The viewbox for one icon record, falling back to set-level defaults
    /// and then to the conventional 16x16 box.
    pub fn record_viewbox(&self, record: &IconRecord) -> ViewBox {
        ViewBox::new(
            record.left.or(self.left).unwrap_or(0.0),
            record.top.or(self.top).unwrap_or(0.0),
            record.width.or(self.width).unwrap_or(16.0),
            record.height.or(self.height).unwrap_or(16.0),
        )
    }

    /// Select a sub-document containing exactly the requested names.
    ///
    /// Entries may be plain names or `prefix:name` identifiers whose prefix
    /// matches this document. A selected alias brings its parent icon along.
    /// Returns `None` when no entry matches anything.
    pub fn select(&self, names: &[String]) -> Option<IconSetDocument> {
        let mut icons = BTreeMap::new();
        let mut aliases = BTreeMap::new();

        for entry in names {
            let Some(name) = self.resolve_entry(entry) else {
                continue;
            };
            if let Some(record) = self.icons.get(name) {
                icons.insert(name.to_string(), record.clone());
            } else if let Some(alias) = self.aliases.get(name) {
                if let Some(parent) = self.icons.get(&alias.parent) {
                    icons.insert(alias.parent.clone(), parent.clone());
                    aliases.insert(name.to_string(), alias.clone());
                }
            }
        }

        if icons.is_empty() {
            return None;
        }
        Some(IconSetDocument {
            prefix: self.prefix.clone(),
            icons,
            aliases,
            width: self.width,
            height: self.height,
            left: self.left,
            top: self.top,
            info: self.info.clone(),
        })
    }

    /// Map an allowlist entry onto a name present in this document.
    ///
    /// Plain names win; a `prefix:name` identifier matches only when the
    /// prefix is this document's.
    fn resolve_entry<'a>(&self, entry: &'a str) -> Option<&'a str> {
        if self.contains(entry) {
            return Some(entry);
        }
        let (prefix, name) = entry.split_once(':')?;
        (prefix == self.prefix && self.contains(name)).then_some(name)
    }
}
