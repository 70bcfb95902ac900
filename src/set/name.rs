//! Icon name syntax and full `prefix:name` identifiers.

use std::collections::BTreeMap;
use std::fmt;

/// Whether `name` is a valid icon name: lowercase alphanumeric chunks
/// separated by single dashes.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|chunk| {
            !chunk.is_empty()
                && chunk
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Derive an icon name from a file stem.
///
/// Lowercases, maps separators to dashes, and strips anything else. Returns
/// `None` when nothing valid is left.
pub fn normalize_name(stem: &str) -> Option<String> {
    let mut out = String::with_capacity(stem.len());
    for c in stem.chars() {
        match c {
            'A'..='Z' => out.push(c.to_ascii_lowercase()),
            'a'..='z' | '0'..='9' => out.push(c),
            '-' | '_' | ' ' | '.' => {
                if !out.is_empty() && !out.ends_with('-') {
                    out.push('-');
                }
            }
            _ => {}
        }
    }
    let trimmed = out.trim_end_matches('-');
    is_valid_name(trimmed).then(|| trimmed.to_string())
}

/// A full icon identifier split into its set prefix and icon name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconName {
    pub prefix: String,
    pub name: String,
}

impl IconName {
    /// Parse `prefix:name`, falling back to `prefix-name` (split at the
    /// first dash) for colon-free identifiers.
    pub fn parse(value: &str) -> Option<Self> {
        let (prefix, name) = value
            .split_once(':')
            .or_else(|| value.split_once('-'))?;
        (is_valid_name(prefix) && is_valid_name(name)).then(|| Self {
            prefix: prefix.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

/// Group a flat list of full identifiers by prefix.
///
/// Malformed entries are dropped; duplicates keep their first position.
pub fn organize_icons_list(icons: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut sorted: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for value in icons {
        let Some(icon) = IconName::parse(value) else {
            continue;
        };
        let list = sorted.entry(icon.prefix).or_default();
        if !list.contains(&icon.name) {
            list.push(icon.name);
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("home"));
        assert!(is_valid_name("chevron-down-2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Home"));
        assert!(!is_valid_name("-home"));
        assert!(!is_valid_name("home-"));
        assert!(!is_valid_name("a--b"));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Arrow_Left"), Some("arrow-left".to_string()));
        assert_eq!(normalize_name("icon 24.final"), Some("icon-24-final".to_string()));
        assert_eq!(normalize_name("home"), Some("home".to_string()));
        assert_eq!(normalize_name("___"), None);
        assert_eq!(normalize_name(""), None);
    }

    #[test]
    fn test_icon_name_parse_colon() {
        let icon = IconName::parse("tabler:home").unwrap();
        assert_eq!(icon.prefix, "tabler");
        assert_eq!(icon.name, "home");
    }

    #[test]
    fn test_icon_name_parse_dash() {
        let icon = IconName::parse("mdi-account-circle").unwrap();
        assert_eq!(icon.prefix, "mdi");
        assert_eq!(icon.name, "account-circle");
    }

    #[test]
    fn test_icon_name_parse_invalid() {
        assert!(IconName::parse("home").is_none());
        assert!(IconName::parse("Tabler:home").is_none());
        assert!(IconName::parse(":home").is_none());
        assert!(IconName::parse("tabler:").is_none());
    }

    #[test]
    fn test_icon_name_display() {
        let icon = IconName::parse("tabler:home").unwrap();
        assert_eq!(icon.to_string(), "tabler:home");
    }

    #[test]
    fn test_organize_icons_list() {
        let icons = vec![
            "tabler:home".to_string(),
            "mdi-account".to_string(),
            "tabler:user".to_string(),
            "tabler:home".to_string(),
            "not a name".to_string(),
        ];
        let sorted = organize_icons_list(&icons);

        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted["tabler"], vec!["home", "user"]);
        assert_eq!(sorted["mdi"], vec!["account"]);
    }
}
