//! Junk name classification.
//!
//! A base name is junk when some entry of [`JUNK_PATTERNS`] either
//! glob-matches the whole name or is a literal byte prefix of it. Both rules
//! are kept on purpose: the prefix rule is what catches per-user trash
//! folders such as `.Trash-1000`, and it also catches any name that merely
//! starts with a junk name (`.DS_Store_backup`).

use crate::core::error::CleanupError;
use glob::{MatchOptions, Pattern};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// Names left behind by macOS, Windows and desktop trash implementations.
pub const JUNK_PATTERNS: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    "__MACOSX",
    ".Spotlight-V100",
    ".fseventsd",
    "System Volume Information",
    ".Trash-",
    "*.tmp",
    "*.~",
];

// fnmatch(3) with no flags: `*` crosses `/` and matches a leading dot.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A single compiled junk pattern.
#[derive(Debug, Clone)]
struct JunkPattern {
    literal: &'static str,
    glob: Pattern,
}

impl JunkPattern {
    fn compile(literal: &'static str) -> Result<Self, CleanupError> {
        let glob = Pattern::new(literal)
            .map_err(|source| CleanupError::InvalidPattern { pattern: literal, source })?;
        Ok(JunkPattern { literal, glob })
    }

    fn glob_matches(&self, name: &OsStr) -> bool {
        self.glob.matches_with(&name.to_string_lossy(), GLOB_OPTIONS)
    }

    fn prefix_matches(&self, name: &OsStr) -> bool {
        name.as_bytes().starts_with(self.literal.as_bytes())
    }
}

/// Classifies base names against [`JUNK_PATTERNS`].
#[derive(Debug, Clone)]
pub struct JunkMatcher {
    patterns: Vec<JunkPattern>,
}

impl JunkMatcher {
    /// Compiles the built-in pattern list.
    pub fn new() -> Result<Self, CleanupError> {
        Self::from_patterns(JUNK_PATTERNS)
    }

    fn from_patterns(literals: &[&'static str]) -> Result<Self, CleanupError> {
        let patterns = literals
            .iter()
            .map(|&literal| JunkPattern::compile(literal))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(JunkMatcher { patterns })
    }

    /// `true` if `name` (a final path component) is junk.
    pub fn is_junk(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref();
        self.patterns
            .iter()
            .any(|p| p.glob_matches(name) || p.prefix_matches(name))
    }

    /// `true` if some pattern glob-matches the whole of `name`.
    pub fn glob_matches(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref();
        self.patterns.iter().any(|p| p.glob_matches(name))
    }

    /// `true` if some pattern's literal text is a prefix of `name`.
    pub fn prefix_matches(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref();
        self.patterns.iter().any(|p| p.prefix_matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    fn matcher() -> JunkMatcher {
        JunkMatcher::new().expect("built-in patterns compile")
    }

    #[test]
    fn exact_junk_names_match() {
        let m = matcher();
        for name in [
            ".DS_Store",
            "Thumbs.db",
            "__MACOSX",
            ".Spotlight-V100",
            ".fseventsd",
            "System Volume Information",
        ] {
            assert!(m.is_junk(name), "{name} should be junk");
        }
    }

    #[test]
    fn wildcard_suffixes_match_through_the_glob_rule() {
        let m = matcher();
        assert!(m.glob_matches("backup.tmp"));
        assert!(!m.prefix_matches("backup.tmp"));
        assert!(m.is_junk("backup.tmp"));
        assert!(m.is_junk("report.doc.~"));
        assert!(m.is_junk(".tmp"));
    }

    #[test]
    fn trash_folders_match_through_the_prefix_rule() {
        let m = matcher();
        assert!(m.prefix_matches(".Trash-9999"));
        assert!(!m.glob_matches(".Trash-9999"));
        assert!(m.is_junk(".Trash-9999"));
        assert!(m.is_junk(".Trash-"));
    }

    #[test]
    fn names_starting_with_a_junk_name_also_match() {
        let m = matcher();
        assert!(m.is_junk(".DS_Store_backup"));
        assert!(m.is_junk("Thumbs.dbx"));
    }

    #[test]
    fn ordinary_names_do_not_match() {
        let m = matcher();
        for name in ["notme.txt", "keep.txt", "sub", "tmp", "x.tmp.bak", ".Trash", "Trash-1000"] {
            assert!(!m.is_junk(name), "{name} should not be junk");
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        let m = matcher();
        assert!(!m.is_junk(".ds_store"));
        assert!(!m.is_junk("thumbs.db"));
        assert!(!m.is_junk("FILE.TMP"));
    }

    #[test]
    fn non_utf8_names_still_use_the_prefix_rule() {
        let m = matcher();
        let mut bytes = b".DS_Store".to_vec();
        bytes.push(0xff);
        assert!(m.is_junk(OsString::from_vec(bytes)));
        assert!(!m.is_junk(OsString::from_vec(vec![0xff, b'a'])));
    }

    #[test]
    fn malformed_pattern_is_reported() {
        let err = JunkMatcher::from_patterns(&["[unclosed"]).unwrap_err();
        assert!(matches!(err, CleanupError::InvalidPattern { pattern: "[unclosed", .. }));
    }
}
