//! Colour parsing and the recolouring walk over an icon's attributes.

use super::tree::{Element, Node};

/// Attributes that carry a colour value, both directly and inside `style`.
const COLOR_ATTRIBUTES: &[&str] = &[
    "fill",
    "stroke",
    "color",
    "stop-color",
    "flood-color",
    "lighting-color",
];

/// A parsed colour value.
///
/// Values the parser does not recognize (gradients via `url(#...)`, CSS
/// variables) are reported as unparsed to the recolour callback and left
/// untouched by the monotone pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    None,
    Transparent,
    Current,
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 255 }
    }

    /// Parse a colour value: keywords, hex, and rgb()/rgba() functions.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let lower = value.to_ascii_lowercase();
        match lower.as_str() {
            "none" => Some(Self::None),
            "transparent" => Some(Self::Transparent),
            "currentcolor" => Some(Self::Current),
            _ => {
                if let Some(hex) = lower.strip_prefix('#') {
                    parse_hex(hex)
                } else if lower.starts_with("rgb") {
                    parse_rgb(&lower)
                } else {
                    named(&lower)
                }
            }
        }
    }

    /// An "empty" colour draws nothing: `none`, `transparent`, or zero alpha.
    pub fn is_empty(self) -> bool {
        match self {
            Self::None | Self::Transparent => true,
            Self::Rgba { a, .. } => a == 0,
            Self::Current => false,
        }
    }
}

/// Parse 3/4/6/8-digit hex colour bodies (no leading `#`).
fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => {
            let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
            Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        4 => {
            let (r, g, b, a) = (digit(0)?, digit(1)?, digit(2)?, digit(3)?);
            Some(Color::Rgba {
                r: r << 4 | r,
                g: g << 4 | g,
                b: b << 4 | b,
                a: a << 4 | a,
            })
        }
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::Rgba {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: byte(6)?,
        }),
        _ => None,
    }
}

/// Parse `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer or percent channels.
fn parse_rgb(value: &str) -> Option<Color> {
    let body = value
        .strip_prefix("rgba")
        .or_else(|| value.strip_prefix("rgb"))?
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |part: &str| -> Option<u8> {
        if let Some(percent) = part.strip_suffix('%') {
            let value = percent.trim().parse::<f64>().ok()?;
            (0.0..=100.0)
                .contains(&value)
                .then(|| (value * 255.0 / 100.0).round() as u8)
        } else {
            part.parse::<u8>().ok()
        }
    };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = match parts.get(3) {
        Some(part) => {
            let value = part.parse::<f64>().ok()?;
            (0.0..=1.0).contains(&value).then(|| (value * 255.0).round() as u8)?
        }
        None => 255,
    };
    Some(Color::Rgba { r, g, b, a })
}

/// The 16 basic CSS colour keywords.
fn named(value: &str) -> Option<Color> {
    let (r, g, b) = match value {
        "black" => (0x00, 0x00, 0x00),
        "silver" => (0xc0, 0xc0, 0xc0),
        "gray" => (0x80, 0x80, 0x80),
        "white" => (0xff, 0xff, 0xff),
        "maroon" => (0x80, 0x00, 0x00),
        "red" => (0xff, 0x00, 0x00),
        "purple" => (0x80, 0x00, 0x80),
        "fuchsia" => (0xff, 0x00, 0xff),
        "green" => (0x00, 0x80, 0x00),
        "lime" => (0x00, 0xff, 0x00),
        "olive" => (0x80, 0x80, 0x00),
        "yellow" => (0xff, 0xff, 0x00),
        "navy" => (0x00, 0x00, 0x80),
        "blue" => (0x00, 0x00, 0xff),
        "teal" => (0x00, 0x80, 0x80),
        "aqua" => (0x00, 0xff, 0xff),
        _ => return None,
    };
    Some(Color::rgb(r, g, b))
}

/// Walk every colour-bearing attribute in the document, applying `recolor`.
///
/// The callback receives the raw value and its parsed form (when the value
/// is a recognizable colour) and may return a replacement. Returning `None`
/// keeps the value as written. `style` attributes are walked per-declaration.
pub fn parse_colors<F>(root: &mut Element, recolor: &mut F)
where
    F: FnMut(&str, Option<Color>) -> Option<String>,
{
    for (key, value) in &mut root.attrs {
        if COLOR_ATTRIBUTES.contains(&key.as_str()) {
            if let Some(replacement) = recolor(value, Color::parse(value)) {
                *value = replacement;
            }
        } else if key == "style" {
            *value = recolor_style(value, recolor);
        }
    }
    for child in &mut root.children {
        if let Node::Element(child) = child {
            parse_colors(child, recolor);
        }
    }
}

/// Apply the recolour callback to colour properties inside a `style` value.
fn recolor_style<F>(style: &str, recolor: &mut F) -> String
where
    F: FnMut(&str, Option<Color>) -> Option<String>,
{
    let declarations: Vec<String> = style
        .split(';')
        .filter(|declaration| !declaration.trim().is_empty())
        .map(|declaration| {
            let Some((property, value)) = declaration.split_once(':') else {
                return declaration.trim().to_string();
            };
            let property = property.trim();
            let value = value.trim();
            if COLOR_ATTRIBUTES.contains(&property) {
                if let Some(replacement) = recolor(value, Color::parse(value)) {
                    return format!("{property}:{replacement}");
                }
            }
            format!("{property}:{value}")
        })
        .collect();
    declarations.join(";")
}

/// Replace every concrete, non-empty colour with the `currentColor` token.
///
/// Empty colours (`none`, `transparent`, zero alpha) and values the parser
/// does not recognize are left untouched, so the icon keeps its cutouts and
/// gradient references while inheriting the surrounding text colour.
pub fn recolor_monotone(root: &mut Element) {
    parse_colors(root, &mut |_, parsed| match parsed {
        Some(color) if !color.is_empty() && color != Color::Current => {
            Some("currentColor".to_string())
        }
        _ => None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::parse;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Color::parse("none"), Some(Color::None));
        assert_eq!(Color::parse("transparent"), Some(Color::Transparent));
        assert_eq!(Color::parse("currentColor"), Some(Color::Current));
        assert_eq!(Color::parse("red"), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::parse("#F00"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(
            Color::parse("#ff000080"),
            Some(Color::Rgba {
                r: 255,
                g: 0,
                b: 0,
                a: 128
            })
        );
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#ggg"), None);
    }

    #[test]
    fn test_parse_rgb_functions() {
        assert_eq!(Color::parse("rgb(255, 0, 0)"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(
            Color::parse("rgba(0, 0, 0, 0)"),
            Some(Color::Rgba {
                r: 0,
                g: 0,
                b: 0,
                a: 0
            })
        );
        assert_eq!(Color::parse("rgb(100%, 0%, 0%)"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::parse("rgb(1, 2)"), None);
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(Color::parse("url(#gradient)"), None);
        assert_eq!(Color::parse("var(--accent)"), None);
        assert_eq!(Color::parse(""), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(Color::None.is_empty());
        assert!(Color::Transparent.is_empty());
        assert!(Color::Rgba {
            r: 1,
            g: 2,
            b: 3,
            a: 0
        }
        .is_empty());
        assert!(!Color::Current.is_empty());
        assert!(!Color::rgb(255, 0, 0).is_empty());
    }

    #[test]
    fn test_monotone_replaces_concrete_colors() {
        let mut root = parse(
            r##"<svg viewBox="0 0 24 24"><path fill="#ff0000" d="M0 0h24"/><circle stroke="red" cx="12" cy="12" r="6"/></svg>"##,
        )
        .unwrap();
        recolor_monotone(&mut root);
        let body = root.serialize_children();

        assert!(body.contains(r#"fill="currentColor""#));
        assert!(body.contains(r#"stroke="currentColor""#));
        assert!(!body.contains("ff0000"));
    }

    #[test]
    fn test_monotone_preserves_empty_colors() {
        let mut root = parse(
            r#"<svg viewBox="0 0 24 24"><path fill="none" stroke="transparent" d="M0 0h24"/></svg>"#,
        )
        .unwrap();
        recolor_monotone(&mut root);
        let body = root.serialize_children();

        assert!(body.contains(r#"fill="none""#));
        assert!(body.contains(r#"stroke="transparent""#));
    }

    #[test]
    fn test_monotone_keeps_gradient_references() {
        let mut root = parse(
            r#"<svg viewBox="0 0 24 24"><path fill="url(#grad)" d="M0 0h24"/></svg>"#,
        )
        .unwrap();
        recolor_monotone(&mut root);

        assert!(root.serialize_children().contains("url(#grad)"));
    }

    #[test]
    fn test_monotone_walks_style_attributes() {
        let mut root = parse(
            r#"<svg viewBox="0 0 24 24"><path style="fill: #00ff00; stroke-width: 2" d="M0 0h24"/></svg>"#,
        )
        .unwrap();
        recolor_monotone(&mut root);
        let body = root.serialize_children();

        assert!(body.contains("fill:currentColor"));
        assert!(body.contains("stroke-width:2"));
    }

    #[test]
    fn test_parse_colors_reports_raw_values() {
        let mut root =
            parse(r##"<svg viewBox="0 0 8 8"><path fill="#abc" stop-color="peachpuff"/></svg>"##)
                .unwrap();
        let mut seen = Vec::new();
        parse_colors(&mut root, &mut |raw, parsed| {
            seen.push((raw.to_string(), parsed));
            None
        });

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "#abc");
        assert!(seen[0].1.is_some());
        assert_eq!(seen[1].0, "peachpuff");
        assert_eq!(seen[1].1, None);
    }
}
