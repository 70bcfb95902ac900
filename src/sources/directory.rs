//! Directory sources: assemble a directory of SVG files into an icon set.
//!
//! Each file runs through the per-icon normalization pipeline on its own;
//! a failure drops that one icon with a logged warning and never aborts
//! the run.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{IconError, Result};
use crate::output::Printer;
use crate::set::{normalize_name, Icon, IconSet};
use crate::svg;

/// Read every SVG file under `dir` into a fresh icon set tagged `prefix`.
///
/// The walk is recursive and sorted so repeated runs see files in the same
/// order. Non-SVG files are skipped silently; a missing directory is fatal.
pub fn import_directory(
    dir: &Path,
    prefix: &str,
    monotone: bool,
    printer: &Printer,
) -> Result<IconSet> {
    if !dir.is_dir() {
        return Err(IconError::Io {
            path: dir.to_path_buf(),
            message: "icon directory not found".to_string(),
        });
    }

    let mut set = IconSet::new(prefix);
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| IconError::Io {
            path: dir.to_path_buf(),
            message: format!("failed to scan directory: {e}"),
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        {
            continue;
        }

        let Some(name) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(normalize_name)
        else {
            printer.warning(
                "Skipping",
                &format!("{}: cannot derive an icon name", path.display()),
            );
            continue;
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                printer.warning("Skipping", &format!("{name} from {}: {e}", dir.display()));
                continue;
            }
        };

        match normalize_icon(&content, monotone) {
            Ok(icon) => {
                if set.insert(name.clone(), icon).is_some() {
                    printer.warning(
                        "Replacing",
                        &format!("duplicate icon name `{name}` in {}", dir.display()),
                    );
                }
            }
            Err(err) => {
                printer.warning("Skipping", &format!("{name} from {}: {err}", dir.display()));
            }
        }
    }
    Ok(set)
}

/// Run one SVG source through cleanup, optional recolouring, and
/// optimization, producing a committed icon.
pub fn normalize_icon(content: &str, monotone: bool) -> Result<Icon> {
    let mut root = svg::parse(content)?;
    let viewbox = svg::cleanup(&mut root)?;
    if monotone {
        svg::recolor_monotone(&mut root);
    }
    svg::optimize(&mut root);
    Ok(Icon {
        body: root.serialize_children(),
        viewbox,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_import_directory_collects_svg_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("home.svg"),
            r#"<svg viewBox="0 0 24 24"><path d="M5 12h14"/></svg>"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("User Circle.svg"),
            r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="9"/></svg>"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not an icon").unwrap();

        let set = import_directory(dir.path(), "custom", false, &Printer::plain()).unwrap();

        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["home", "user-circle"]);
        assert_eq!(set.prefix(), "custom");
    }

    #[test]
    fn test_import_directory_recurses() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("arrows")).unwrap();
        fs::write(
            dir.path().join("arrows/left.svg"),
            r#"<svg viewBox="0 0 16 16"><path d="M10 2L4 8l6 6"/></svg>"#,
        )
        .unwrap();

        let set = import_directory(dir.path(), "custom", false, &Printer::plain()).unwrap();
        assert!(set.contains("left"));
    }

    #[test]
    fn test_import_directory_missing_is_fatal() {
        let err = import_directory(
            Path::new("/nonexistent/icons"),
            "custom",
            false,
            &Printer::plain(),
        )
        .unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }

    #[test]
    fn test_broken_icon_is_dropped_not_fatal() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("good.svg"),
            r#"<svg viewBox="0 0 16 16"><path d="M0 0h16"/></svg>"#,
        )
        .unwrap();
        fs::write(dir.path().join("bad.svg"), "<svg><unclosed").unwrap();
        fs::write(
            dir.path().join("scripted.svg"),
            r#"<svg viewBox="0 0 16 16"><script>x()</script></svg>"#,
        )
        .unwrap();

        let set = import_directory(dir.path(), "custom", false, &Printer::plain()).unwrap();

        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["good"]);
    }

    #[test]
    fn test_normalize_icon_monotone() {
        let icon = normalize_icon(
            r##"<svg viewBox="0 0 24 24"><path fill="#ff0000" d="M0 0h24"/><path fill="none" d="M0 24h24"/></svg>"##,
            true,
        )
        .unwrap();

        assert!(icon.body.contains(r#"fill="currentColor""#));
        assert!(icon.body.contains(r#"fill="none""#));
        assert!(!icon.body.contains("ff0000"));
    }

    #[test]
    fn test_normalize_icon_plain_keeps_palette() {
        let icon = normalize_icon(
            r##"<svg viewBox="0 0 24 24"><path fill="#ff0000" d="M0 0h24"/></svg>"##,
            false,
        )
        .unwrap();

        assert!(icon.body.contains("#ff0000"));
        assert_eq!(icon.viewbox.width, 24.0);
    }

    #[test]
    fn test_normalize_icon_is_deterministic() {
        let source = r#"<svg viewBox="0 0 24 24" version="1.1">
  <g><defs/></g>
  <path fill="red" d="M 0 0 h 24"/>
</svg>"#;
        let first = normalize_icon(source, true).unwrap();
        let second = normalize_icon(source, true).unwrap();
        assert_eq!(first, second);
    }
}
