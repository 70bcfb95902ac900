//! Icon set model.
//!
//! An [`IconSetDocument`] is the serde view of a packaged icon-set JSON
//! file; an [`IconSet`] is the runtime mapping the pipeline works on. Icon
//! names are unique within a set. Collisions across different sets are left
//! alone — the emitted CSS is a plain concatenation.

mod document;
mod name;

use std::collections::BTreeMap;

use crate::svg::ViewBox;

pub use document::{AliasRecord, IconRecord, IconSetDocument, SetInfo};
pub use name::{is_valid_name, normalize_name, organize_icons_list, IconName};

/// One normalized icon: inner SVG markup plus the box it is drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub body: String,
    pub viewbox: ViewBox,
}

/// A named collection of icons sharing one CSS prefix.
///
/// Iteration order is sorted by icon name, which keeps every run over the
/// same inputs byte-identical downstream.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    prefix: String,
    icons: BTreeMap<String, Icon>,
}

impl IconSet {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            icons: BTreeMap::new(),
        }
    }

    /// Build a runtime set from a packaged document.
    ///
    /// Hidden icons are skipped; aliases resolve to a copy of their parent
    /// under the alias name.
    pub fn from_document(document: &IconSetDocument) -> Self {
        let mut set = Self::new(&document.prefix);
        for (name, record) in &document.icons {
            if record.hidden {
                continue;
            }
            set.insert(
                name.clone(),
                Icon {
                    body: record.body.clone(),
                    viewbox: document.record_viewbox(record),
                },
            );
        }
        for (name, alias) in &document.aliases {
            if alias.hidden {
                continue;
            }
            let Some(record) = document.icons.get(&alias.parent) else {
                continue;
            };
            if record.hidden {
                continue;
            }
            set.insert(
                name.clone(),
                Icon {
                    body: record.body.clone(),
                    viewbox: document.record_viewbox(record),
                },
            );
        }
        set
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Insert an icon, returning the previous entry for that name if any.
    pub fn insert(&mut self, name: impl Into<String>, icon: Icon) -> Option<Icon> {
        self.icons.insert(name.into(), icon)
    }

    /// Remove an icon by name.
    pub fn remove(&mut self, name: &str) -> Option<Icon> {
        self.icons.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Icon> {
        self.icons.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icon names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// (name, icon) pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Icon)> {
        self.icons.iter().map(|(name, icon)| (name.as_str(), icon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> IconSetDocument {
        IconSetDocument::from_json(
            r##"{
                "prefix": "demo",
                "icons": {
                    "home": { "body": "<path d=\"M2 8l6-6 6 6\"/>" },
                    "wide": { "body": "<path d=\"M0 0h32\"/>", "width": 32 },
                    "secret": { "body": "<path d=\"M0 0\"/>", "hidden": true }
                },
                "aliases": {
                    "house": { "parent": "home" },
                    "ghost": { "parent": "secret" },
                    "dangling": { "parent": "nope" }
                },
                "width": 16,
                "height": 16
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_from_document_skips_hidden_icons() {
        let set = IconSet::from_document(&sample_document());

        assert!(set.contains("home"));
        assert!(set.contains("wide"));
        assert!(!set.contains("secret"));
    }

    #[test]
    fn test_from_document_resolves_aliases() {
        let set = IconSet::from_document(&sample_document());

        assert_eq!(set.get("house"), set.get("home"));
        assert!(!set.contains("ghost"));
        assert!(!set.contains("dangling"));
    }

    #[test]
    fn test_from_document_applies_dimension_defaults() {
        let set = IconSet::from_document(&sample_document());

        assert_eq!(set.get("home").unwrap().viewbox.width, 16.0);
        assert_eq!(set.get("wide").unwrap().viewbox.width, 32.0);
        assert_eq!(set.get("wide").unwrap().viewbox.height, 16.0);
    }

    #[test]
    fn test_names_are_sorted() {
        let mut set = IconSet::new("demo");
        let icon = Icon {
            body: String::new(),
            viewbox: ViewBox::default(),
        };
        set.insert("zebra", icon.clone());
        set.insert("apple", icon.clone());
        set.insert("mango", icon);

        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_insert_reports_replacement() {
        let mut set = IconSet::new("demo");
        let icon = Icon {
            body: "<path/>".to_string(),
            viewbox: ViewBox::default(),
        };
        assert!(set.insert("home", icon.clone()).is_none());
        assert!(set.insert("home", icon).is_some());
        assert_eq!(set.len(), 1);
    }
}
