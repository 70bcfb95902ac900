//! iconcss - icon-set to CSS bundling pipeline
//!
//! A library for collecting icons from packaged icon-set documents and
//! directories of SVG files, normalizing them, and emitting one generated
//! CSS file with a selector per icon.

pub mod bundle;
pub mod css;
pub mod error;
pub mod output;
pub mod set;
pub mod sources;
pub mod svg;
pub mod validation;

pub use bundle::Bundle;
pub use css::{render_bundle, render_set, CssOptions, SelectorTemplate};
pub use error::{IconError, Result};
pub use output::{display_path, plural, Printer};
pub use set::{
    is_valid_name, normalize_name, organize_icons_list, Icon, IconName, IconSet, IconSetDocument,
};
pub use sources::{import_directory, load_sources, normalize_icon, IconSource};
pub use svg::{cleanup, optimize, parse_colors, recolor_monotone, Color, Element, Node, ViewBox};
pub use validation::{validate_sources, Diagnostic, Severity, ValidationResult};
