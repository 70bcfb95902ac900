//! Advisory checks over the compiled-in source list.
//!
//! Validation never stops a run on its own — it surfaces configuration
//! smells before the pipeline hits them: prefixes shared between sources,
//! allowlist entries that cannot match, names that would produce broken
//! selectors.

use std::collections::HashMap;
use std::fmt;

use crate::set::{is_valid_name, IconSetDocument};
use crate::sources::IconSource;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code (e.g. "iconcss::validate::duplicate-prefix").
    pub code: &'static str,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    fn warning(code: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
            help: None,
        }
    }

    fn error(code: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
            help: None,
        }
    }

    fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Findings collected over one source list.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Check a source list before running the pipeline.
pub fn validate_sources(sources: &[IconSource]) -> ValidationResult {
    let mut result = ValidationResult::default();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, source) in sources.iter().enumerate() {
        let prefix = source.prefix();
        if !is_valid_name(prefix) {
            result.push(Diagnostic::error(
                "iconcss::validate::prefix",
                format!("source #{index}: `{prefix}` is not a valid icon prefix"),
            ));
        }
        if let Some(first) = seen.insert(prefix, index) {
            result.push(
                Diagnostic::warning(
                    "iconcss::validate::duplicate-prefix",
                    format!("prefix `{prefix}` is used by sources #{first} and #{index}"),
                )
                .with_help("rules from both sources are emitted and stack in the cascade"),
            );
        }

        if let IconSource::Json {
            document,
            icons: Some(names),
        } = source
        {
            check_allowlist(&mut result, index, document, names);
        }
    }

    result
}

fn check_allowlist(
    result: &mut ValidationResult,
    index: usize,
    document: &IconSetDocument,
    names: &[String],
) {
    let mut missing = Vec::new();
    for entry in names {
        if document.contains(entry) {
            continue;
        }
        if let Some((prefix, name)) = entry.split_once(':') {
            if prefix != document.prefix {
                result.push(Diagnostic::warning(
                    "iconcss::validate::foreign-prefix",
                    format!(
                        "source #{index}: allowlist entry `{entry}` targets prefix `{prefix}`, not `{}`",
                        document.prefix
                    ),
                ));
                continue;
            }
            if document.contains(name) {
                continue;
            }
        } else if !is_valid_name(entry) {
            result.push(Diagnostic::warning(
                "iconcss::validate::name",
                format!("source #{index}: allowlist entry `{entry}` is not a valid icon name"),
            ));
            continue;
        }
        missing.push(entry.as_str());
    }

    if !missing.is_empty() {
        result.push(
            Diagnostic::warning(
                "iconcss::validate::unknown-icons",
                format!(
                    "source #{index}: allowlist entries not present in `{}`: {}",
                    document.prefix,
                    missing.join(", ")
                ),
            )
            .with_help("the run fails if no allowlist entry matches"),
        );
    }
}
