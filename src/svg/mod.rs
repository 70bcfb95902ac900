//! Vector document handling for the normalization pipeline.
//!
//! SVG sources are parsed into a small element tree, scrubbed of editor
//! junk, optionally recoloured for monotone use, and losslessly compacted
//! before being committed back into an icon set.

mod cleanup;
mod color;
mod optimize;
mod tree;

pub(crate) use cleanup::format_number;
pub use cleanup::{cleanup, ViewBox};
pub use color::{parse_colors, recolor_monotone, Color};
pub use optimize::optimize;
pub use tree::{parse, Element, Node};
