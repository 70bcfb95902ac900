//! Pipeline orchestration: load sources, emit CSS, write the target file.
//!
//! One pass per invocation, strictly forward: loader, normalizer, emitter,
//! writer. Nothing touches the target path until every fatal stage has
//! succeeded, so a failed run never leaves partial output behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::css::{render_bundle, CssOptions, SelectorTemplate};
use crate::error::{IconError, Result};
use crate::output::{plural, Printer};
use crate::sources::{load_sources, IconSource};

/// A configured bundling run.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub sources: Vec<IconSource>,
    pub target: PathBuf,
    pub options: CssOptions,
}

impl Bundle {
    pub fn new(sources: Vec<IconSource>, target: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            target: target.into(),
            options: CssOptions::default(),
        }
    }

    /// Override the selector template for every emitted rule.
    pub fn with_selector(mut self, template: impl Into<String>) -> Self {
        self.options.selector = SelectorTemplate::new(template);
        self
    }

    /// Run the whole pipeline and return the resolved output path.
    pub fn run(&self, printer: &Printer) -> Result<PathBuf> {
        let sets = load_sources(&self.sources, printer)?;
        let css = render_bundle(&sets, &self.options);

        let total: usize = sets.iter().map(|set| set.len()).sum();
        printer.status(
            "Bundling",
            &format!(
                "{} across {}",
                plural(total, "icon", "icons"),
                plural(sets.len(), "set", "sets")
            ),
        );

        if let Some(parent) = self.target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| IconError::Io {
                    path: parent.to_path_buf(),
                    message: format!("failed to create output directory: {e}"),
                })?;
            }
        }
        fs::write(&self.target, css.as_bytes()).map_err(|e| IconError::Io {
            path: self.target.clone(),
            message: format!("failed to write CSS bundle: {e}"),
        })?;

        resolve(&self.target)
    }
}

/// Absolutize a path against the working directory without requiring the
/// file to be canonicalizable.
fn resolve(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
