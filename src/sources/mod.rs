//! Icon source loading.
//!
//! A source is either a packaged icon-set document (optionally restricted
//! to an allowlist of names) or a directory of individual SVG files. Loading
//! turns the source list into runtime icon sets, preserving list order.

mod directory;

use std::path::PathBuf;

use crate::error::{IconError, Result};
use crate::output::{plural, Printer};
use crate::set::{IconSet, IconSetDocument};

pub use directory::{import_directory, normalize_icon};

/// One entry in the compiled-in source list.
#[derive(Debug, Clone)]
pub enum IconSource {
    /// A packaged document, with an optional allowlist of icon names.
    Json {
        document: IconSetDocument,
        icons: Option<Vec<String>>,
    },
    /// A directory of SVG files assembled into a fresh set.
    Directory {
        dir: PathBuf,
        prefix: String,
        monotone: bool,
    },
}

impl IconSource {
    /// A packaged document used in full.
    pub fn packaged(json: &str) -> Result<Self> {
        Ok(Self::Json {
            document: IconSetDocument::from_json(json)?,
            icons: None,
        })
    }

    /// A packaged document restricted to the named icons.
    pub fn packaged_subset<I, S>(json: &str, icons: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::Json {
            document: IconSetDocument::from_json(json)?,
            icons: Some(icons.into_iter().map(Into::into).collect()),
        })
    }

    /// A directory source with the given naming prefix.
    pub fn directory(dir: impl Into<PathBuf>, prefix: impl Into<String>, monotone: bool) -> Self {
        Self::Directory {
            dir: dir.into(),
            prefix: prefix.into(),
            monotone,
        }
    }

    /// The CSS prefix this source contributes icons under.
    pub fn prefix(&self) -> &str {
        match self {
            Self::Json { document, .. } => &document.prefix,
            Self::Directory { prefix, .. } => prefix,
        }
    }
}

/// Load every source into an icon set, in source-list order.
///
/// An allowlist that matches nothing in its document fails the whole run;
/// per-icon failures inside a directory source only drop that icon.
pub fn load_sources(sources: &[IconSource], printer: &Printer) -> Result<Vec<IconSet>> {
    let mut sets = Vec::with_capacity(sources.len());
    for source in sources {
        match source {
            IconSource::Json { document, icons } => {
                let allowlist = icons.as_deref().filter(|names| !names.is_empty());
                let document = match allowlist {
                    Some(names) => {
                        document.select(names).ok_or_else(|| IconError::MissingIcons {
                            prefix: document.prefix.clone(),
                            names: names.to_vec(),
                        })?
                    }
                    None => document.clone(),
                };
                let set = IconSet::from_document(&document);
                printer.status("Loading", &describe_set(&document, &set));
                sets.push(set);
            }
            IconSource::Directory {
                dir,
                prefix,
                monotone,
            } => {
                let set = import_directory(dir, prefix, *monotone, printer)?;
                printer.status(
                    "Importing",
                    &format!(
                        "{} ({} from {})",
                        prefix,
                        plural(set.len(), "icon", "icons"),
                        dir.display()
                    ),
                );
                sets.push(set);
            }
        }
    }
    Ok(sets)
}

fn describe_set(document: &IconSetDocument, set: &IconSet) -> String {
    let count = plural(set.len(), "icon", "icons");
    match document.info.as_ref().and_then(|info| info.name.as_deref()) {
        Some(title) => format!("{} ({}, {})", document.prefix, title, count),
        None => format!("{} ({})", document.prefix, count),
    }
}
