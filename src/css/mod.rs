//! CSS emission for icon sets.
//!
//! Icons that already use `currentColor` are emitted through `mask-image`
//! so they pick up the surrounding text colour; everything else keeps its
//! own palette via `background-image`. Each mode gets one shared rule per
//! set, followed by one `--svg` custom-property rule per icon with the icon
//! embedded as a data URI.

use std::fmt::Write;

use crate::set::{Icon, IconSet};
use crate::svg::format_number;

/// Declarations shared by every monotone icon in a set.
const MASK_DECLARATIONS: &[&str] = &[
    "display: inline-block",
    "width: 1em",
    "height: 1em",
    "background-color: currentColor",
    "-webkit-mask-image: var(--svg)",
    "mask-image: var(--svg)",
    "-webkit-mask-repeat: no-repeat",
    "mask-repeat: no-repeat",
    "-webkit-mask-size: 100% 100%",
    "mask-size: 100% 100%",
];

/// Declarations shared by every fixed-palette icon in a set.
const BACKGROUND_DECLARATIONS: &[&str] = &[
    "display: inline-block",
    "width: 1em",
    "height: 1em",
    "background-image: var(--svg)",
    "background-repeat: no-repeat",
    "background-size: 100% 100%",
];

/// A selector pattern with `{prefix}` and `{name}` placeholders.
#[derive(Debug, Clone)]
pub struct SelectorTemplate {
    template: String,
}

impl SelectorTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitute the placeholders for one icon.
    pub fn format(&self, prefix: &str, name: &str) -> String {
        self.template
            .replace("{prefix}", prefix)
            .replace("{name}", name)
    }
}

impl Default for SelectorTemplate {
    fn default() -> Self {
        Self::new(".{prefix}-{name}")
    }
}

/// Options controlling CSS emission.
#[derive(Debug, Clone, Default)]
pub struct CssOptions {
    pub selector: SelectorTemplate,
}

/// Render every set in order and join the blocks with a newline.
///
/// No deduplication happens across sets; a name present in two sets yields
/// two rules that simply stack in the cascade.
pub fn render_bundle(sets: &[IconSet], options: &CssOptions) -> String {
    sets.iter()
        .map(|set| render_set(set, options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the CSS block for one icon set.
pub fn render_set(set: &IconSet, options: &CssOptions) -> String {
    let mut mask: Vec<(String, &Icon)> = Vec::new();
    let mut background: Vec<(String, &Icon)> = Vec::new();

    for (name, icon) in set.iter() {
        let selector = options.selector.format(set.prefix(), name);
        if icon.body.contains("currentColor") {
            mask.push((selector, icon));
        } else {
            background.push((selector, icon));
        }
    }

    let mut out = String::new();
    render_mode(&mut out, &mask, MASK_DECLARATIONS);
    render_mode(&mut out, &background, BACKGROUND_DECLARATIONS);
    out
}

fn render_mode(out: &mut String, icons: &[(String, &Icon)], shared: &[&str]) {
    if icons.is_empty() {
        return;
    }

    let selectors: Vec<&str> = icons.iter().map(|(selector, _)| selector.as_str()).collect();
    write_rule(out, &selectors, shared);

    for (selector, icon) in icons {
        let declaration = format!("--svg: url(\"{}\")", svg_data_uri(icon));
        write_rule(out, &[selector.as_str()], &[declaration.as_str()]);
    }
}

fn write_rule(out: &mut String, selectors: &[&str], declarations: &[&str]) {
    out.push_str(&selectors.join(",\n"));
    out.push_str(" {\n");
    for declaration in declarations {
        let _ = writeln!(out, "  {declaration};");
    }
    out.push_str("}\n");
}

/// Wrap an icon body in a standalone `<svg>` and encode it for embedding
/// in a CSS `url()`.
fn svg_data_uri(icon: &Icon) -> String {
    let width = format_number(icon.viewbox.width);
    let height = format_number(icon.viewbox.height);

    let mut svg = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\"");
    if icon.body.contains("xlink:") {
        svg.push_str(" xmlns:xlink=\"http://www.w3.org/1999/xlink\"");
    }
    let _ = write!(
        svg,
        " viewBox=\"{}\" width=\"{width}\" height=\"{height}\">",
        icon.viewbox
    );
    svg.push_str(&icon.body);
    svg.push_str("</svg>");

    format!("data:image/svg+xml,{}", encode_svg(&svg))
}

/// Minimal percent-encoding for SVG-in-CSS: swap double quotes for single
/// quotes and escape the characters that break `url()` parsing.
fn encode_svg(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len() + 64);
    for c in svg.chars() {
        match c {
            '"' => out.push('\''),
            '%' => out.push_str("%25"),
            '#' => out.push_str("%23"),
            '{' => out.push_str("%7B"),
            '}' => out.push_str("%7D"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::IconSet;
    use crate::svg::ViewBox;

    fn icon(body: &str) -> Icon {
        Icon {
            body: body.to_string(),
            viewbox: ViewBox::new(0.0, 0.0, 24.0, 24.0),
        }
    }

    #[test]
    fn test_selector_template_substitution() {
        let template = SelectorTemplate::new(".{prefix}-{name}");
        assert_eq!(template.format("tabler", "home"), ".tabler-home");
    }

    #[test]
    fn test_selector_template_custom_pattern() {
        let template = SelectorTemplate::new("i.icon--{prefix}.icon--{name}");
        assert_eq!(
            template.format("custom", "arrow-left"),
            "i.icon--custom.icon--arrow-left"
        );
    }

    #[test]
    fn test_render_set_splits_modes() {
        let mut set = IconSet::new("demo");
        set.insert("mono", icon(r#"<path stroke="currentColor" d="M0 0h24"/>"#));
        set.insert("flag", icon(r##"<path fill="#ff0000" d="M0 0h24"/>"##));

        let css = render_set(&set, &CssOptions::default());

        assert!(css.contains("mask-image: var(--svg)"));
        assert!(css.contains("background-image: var(--svg)"));
        assert!(css.contains(".demo-mono {"));
        assert!(css.contains(".demo-flag {"));
        // The fixed-palette icon keeps its colour, percent-encoded.
        assert!(css.contains("%23ff0000"));
    }

    #[test]
    fn test_render_bundle_joins_in_order_without_dedup() {
        let mut first = IconSet::new("alpha");
        first.insert("dot", icon(r#"<circle r="4" fill="currentColor"/>"#));
        let mut second = IconSet::new("beta");
        second.insert("dot", icon(r#"<circle r="4" fill="currentColor"/>"#));

        let css = render_bundle(&[first, second], &CssOptions::default());

        let alpha = css.find(".alpha-dot").unwrap();
        let beta = css.find(".beta-dot").unwrap();
        assert!(alpha < beta);
        assert_eq!(css.matches("--svg: url(").count(), 2);
    }

    #[test]
    fn test_render_empty_set_is_empty() {
        let set = IconSet::new("empty");
        assert_eq!(render_set(&set, &CssOptions::default()), "");
    }

    #[test]
    fn test_data_uri_encoding() {
        let uri = svg_data_uri(&icon(r#"<path d="M5 12h14"/>"#));
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(uri.contains("viewBox='0 0 24 24'"));
        assert!(!uri.contains('"'));
        assert!(!uri.contains('<'));
    }

    #[test]
    fn test_data_uri_declares_xlink_when_used() {
        let uri = svg_data_uri(&icon(r##"<use xlink:href="#a"/>"##));
        assert!(uri.contains("xmlns:xlink='http://www.w3.org/1999/xlink'"));
    }

    #[test]
    fn test_render_set_snapshot() {
        let mut set = IconSet::new("tabler");
        set.insert("home", icon(r#"<path stroke="currentColor" d="M5 12h14"/>"#));

        insta::assert_snapshot!(render_set(&set, &CssOptions::default()), @r###"
        .tabler-home {
          display: inline-block;
          width: 1em;
          height: 1em;
          background-color: currentColor;
          -webkit-mask-image: var(--svg);
          mask-image: var(--svg);
          -webkit-mask-repeat: no-repeat;
          mask-repeat: no-repeat;
          -webkit-mask-size: 100% 100%;
          mask-size: 100% 100%;
        }
        .tabler-home {
          --svg: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' width='24' height='24'%3E%3Cpath stroke='currentColor' d='M5 12h14'/%3E%3C/svg%3E");
        }
        "###);
    }
}
