//! Lossless size optimization of cleaned-up icons.
//!
//! Only transformations that cannot change rendering are applied, so the
//! pass is deterministic and idempotent.

use super::tree::{Element, Node};

/// Attributes whose values are number lists that tolerate compaction.
const GEOMETRY_ATTRS: &[&str] = &["d", "points"];

/// Container elements that are dropped when they have no content.
const CONTAINER_ELEMENTS: &[&str] = &["g", "defs"];

/// Optimize an icon tree in place.
pub fn optimize(root: &mut Element) {
    drop_empty_attrs(root);
    remove_empty_containers(root);
    compact_geometry(root);
}

fn drop_empty_attrs(element: &mut Element) {
    element.attrs.retain(|(_, value)| !value.trim().is_empty());
    for child in &mut element.children {
        if let Node::Element(child) = child {
            drop_empty_attrs(child);
        }
    }
}

/// Remove `<g>`/`<defs>` elements that contain nothing, bottom-up so that
/// nested empties collapse in a single pass.
fn remove_empty_containers(element: &mut Element) {
    for child in &mut element.children {
        if let Node::Element(child) = child {
            remove_empty_containers(child);
        }
    }
    element.children.retain(|child| match child {
        Node::Element(child) => {
            !(CONTAINER_ELEMENTS.contains(&child.local_name()) && child.children.is_empty())
        }
        Node::Text(_) => true,
    });
}

fn compact_geometry(element: &mut Element) {
    for (key, value) in &mut element.attrs {
        if GEOMETRY_ATTRS.contains(&key.as_str()) {
            *value = compact_number_list(value);
        }
    }
    for child in &mut element.children {
        if let Node::Element(child) = child {
            compact_geometry(child);
        }
    }
}

/// Collapse whitespace runs to single separators and drop spaces that a
/// comma already covers. Number values themselves are never touched.
fn compact_number_list(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;
    for c in value.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if c == ',' {
            pending_space = false;
        } else if pending_space {
            if !matches!(out.chars().last(), Some(',') | None) {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }
    out
}
