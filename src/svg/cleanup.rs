//! Structural cleanup of imported SVG icons.
//!
//! Removes editor metadata, rejects active content, and normalizes the
//! icon's dimensions into a single viewbox.

use std::fmt;

use crate::error::{IconError, Result};

use super::tree::{Element, Node};

/// Namespace prefixes that vector editors attach to exported files.
const EDITOR_PREFIXES: &[&str] = &["sodipodi", "inkscape"];

/// Elements that carry no geometry and are dropped outright.
const JUNK_ELEMENTS: &[&str] = &["metadata", "title", "desc", "namedview"];

/// Attributes that are meaningless once the icon is re-emitted.
const JUNK_ATTRS: &[&str] = &["version", "baseProfile", "enable-background", "xml:space"];

/// The coordinate box an icon is drawn in: `left top width height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::new(0.0, 0.0, 16.0, 16.0)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format_number(self.left),
            format_number(self.top),
            format_number(self.width),
            format_number(self.height)
        )
    }
}

/// Format a coordinate without a trailing `.0` for whole values.
pub(crate) fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Clean up a parsed icon in place and extract its viewbox.
///
/// Fails (recoverably, from the pipeline's point of view) when the icon
/// contains active content or has no usable dimensions.
pub fn cleanup(root: &mut Element) -> Result<ViewBox> {
    ensure_inert(root)?;
    strip_editor_junk(root);
    let viewbox = extract_viewbox(root)?;
    hoist_root_attrs(root);
    Ok(viewbox)
}

/// Reject scripts and event handler attributes anywhere in the document.
fn ensure_inert(element: &Element) -> Result<()> {
    if element.local_name() == "script" {
        return Err(IconError::Svg {
            message: "icon contains a <script> element".to_string(),
            help: Some("icon sources must be passive vector data".to_string()),
        });
    }
    for (key, _) in &element.attrs {
        if is_event_attr(key) {
            return Err(IconError::Svg {
                message: format!("icon contains an event handler attribute `{key}`"),
                help: Some("icon sources must be passive vector data".to_string()),
            });
        }
    }
    for child in &element.children {
        if let Node::Element(child) = child {
            ensure_inert(child)?;
        }
    }
    Ok(())
}

fn is_event_attr(key: &str) -> bool {
    key.len() > 2
        && key.starts_with("on")
        && key[2..].chars().all(|c| c.is_ascii_alphabetic())
}

/// Drop editor metadata elements and attributes, recursively.
fn strip_editor_junk(element: &mut Element) {
    element.attrs.retain(|(key, _)| !is_junk_attr(key));
    element.children.retain(|child| match child {
        Node::Element(child) => !is_junk_element(child),
        Node::Text(_) => true,
    });
    for child in &mut element.children {
        if let Node::Element(child) = child {
            strip_editor_junk(child);
        }
    }
}

fn is_junk_element(element: &Element) -> bool {
    if JUNK_ELEMENTS.contains(&element.local_name()) {
        return true;
    }
    matches!(element.name_prefix(), Some(prefix) if EDITOR_PREFIXES.contains(&prefix))
}

fn is_junk_attr(key: &str) -> bool {
    if JUNK_ATTRS.contains(&key) || key.starts_with("data-") {
        return true;
    }
    match key.split_once(':') {
        Some(("xmlns", suffix)) => EDITOR_PREFIXES.contains(&suffix),
        Some((prefix, _)) => EDITOR_PREFIXES.contains(&prefix),
        None => false,
    }
}

/// Normalize `viewBox`/`width`/`height` on the root into one viewbox.
fn extract_viewbox(root: &mut Element) -> Result<ViewBox> {
    let viewbox_attr = root.remove_attr("viewBox");
    let width_attr = root.remove_attr("width");
    let height_attr = root.remove_attr("height");

    if let Some(value) = viewbox_attr {
        return parse_viewbox(&value).ok_or_else(|| IconError::Svg {
            message: format!("invalid viewBox `{value}`"),
            help: None,
        });
    }

    match (width_attr, height_attr) {
        (Some(width), Some(height)) => {
            let width = parse_length(&width).ok_or_else(|| invalid_length(&width))?;
            let height = parse_length(&height).ok_or_else(|| invalid_length(&height))?;
            Ok(ViewBox::new(0.0, 0.0, width, height))
        }
        _ => Err(IconError::Svg {
            message: "icon has no usable dimensions".to_string(),
            help: Some("add a viewBox or width/height attributes to the root".to_string()),
        }),
    }
}

fn invalid_length(value: &str) -> IconError {
    IconError::Svg {
        message: format!("invalid length `{value}`"),
        help: None,
    }
}

fn parse_viewbox(value: &str) -> Option<ViewBox> {
    let mut numbers = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<f64>());

    let left = numbers.next()?.ok()?;
    let top = numbers.next()?.ok()?;
    let width = numbers.next()?.ok()?;
    let height = numbers.next()?.ok()?;
    if numbers.next().is_some() || width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(ViewBox::new(left, top, width, height))
}

fn parse_length(value: &str) -> Option<f64> {
    let trimmed = value.trim().trim_end_matches("px").trim();
    let parsed = trimmed.parse::<f64>().ok()?;
    (parsed > 0.0).then_some(parsed)
}

/// Presentation attributes left on the root apply to the whole icon; keep
/// them by pushing the content into a `<g>` wrapper that carries them.
fn hoist_root_attrs(root: &mut Element) {
    let mut hoisted = Vec::new();
    root.attrs.retain(|(key, value)| {
        if key == "xmlns" || key.starts_with("xmlns:") || key == "id" {
            true
        } else {
            hoisted.push((key.clone(), value.clone()));
            false
        }
    });

    if hoisted.is_empty() || root.children.is_empty() {
        return;
    }

    let mut group = Element::new("g");
    group.attrs = hoisted;
    group.children = std::mem::take(&mut root.children);
    root.children.push(Node::Element(group));
}
