use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconcss operations.
///
/// Every variant here is fatal: it aborts the run before the output file is
/// written. Per-icon normalization failures are not errors — they drop the
/// affected icon and are reported through the status printer instead.
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    #[diagnostic(code(iconcss::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconcss::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Icon set error: {message}")]
    #[diagnostic(code(iconcss::set))]
    Set {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("SVG error: {message}")]
    #[diagnostic(code(iconcss::svg))]
    Svg {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("cannot find required icons in set `{}`: {}", .prefix, .names.join(", "))]
    #[diagnostic(
        code(iconcss::missing_icons),
        help("check the allowlist against the icon names the set actually contains")
    )]
    MissingIcons { prefix: String, names: Vec<String> },
}

pub type Result<T> = std::result::Result<T, IconError>;
