//! Display-name to filename transform for universe saves.
//!
//! A universe's on-disk identity is its sanitized filename. The transform
//! is deterministic and lossy: distinct display names can collide to the
//! same file (`"My World"` and `"My_World"` both become `My_World.json`),
//! and the later save overwrites the earlier one wholesale. This is the
//! documented contract, not a bug to fix.

/// Sanitize a display name into a filename stem.
///
/// Removes every character that is not alphanumeric, underscore,
/// whitespace, or hyphen, trims the result, and collapses each internal
/// whitespace run to a single underscore. Returns `None` when nothing
/// survives (a name of only punctuation has no filename).
///
/// The surviving character set contains no path separators or dots, so
/// a sanitized stem can never escape the save directory.
pub fn sanitize(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .collect();

    let stem = cleaned.split_whitespace().collect::<Vec<_>>().join("_");

    if stem.is_empty() { None } else { Some(stem) }
}

/// Compute the on-disk filename for a display name.
///
/// Returns `None` when the name sanitizes to an empty stem.
pub fn filename_for(name: &str) -> Option<String> {
    sanitize(name).map(|stem| format!("{stem}.json"))
}

/// Derive a display name from a stored filename.
///
/// Drops the `.json` suffix and replaces every underscore with a space.
/// Non-invertible: a name that contained literal underscores comes back
/// with spaces instead.
pub fn display_name(filename: &str) -> String {
    filename
        .strip_suffix(".json")
        .unwrap_or(filename)
        .replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(sanitize("My World"), Some(String::from("My_World")));
        assert_eq!(filename_for("My World"), Some(String::from("My_World.json")));
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(sanitize("Alpha! (Beta)"), Some(String::from("Alpha_Beta")));
        assert_eq!(sanitize("saves/../etc"), Some(String::from("savesetc")));
    }

    #[test]
    fn punctuation_only_name_has_no_filename() {
        assert_eq!(sanitize("!!! ??? ..."), None);
        assert_eq!(filename_for("...."), None);
        assert_eq!(filename_for(""), None);
    }

    #[test]
    fn underscores_and_hyphens_survive() {
        assert_eq!(sanitize("gen_7-final"), Some(String::from("gen_7-final")));
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(sanitize("  My   World  "), Some(String::from("My_World")));
        assert_eq!(sanitize("a\t b\n c"), Some(String::from("a_b_c")));
    }

    #[test]
    fn unicode_letters_survive() {
        assert_eq!(sanitize("Mundo Üniverse 42"), Some(String::from("Mundo_Üniverse_42")));
    }

    #[test]
    fn colliding_names_share_a_filename() {
        assert_eq!(filename_for("My World"), filename_for("My_World"));
    }

    #[test]
    fn display_name_replaces_underscores() {
        assert_eq!(display_name("My_World.json"), "My World");
        assert_eq!(display_name("plain.json"), "plain");
    }
}
