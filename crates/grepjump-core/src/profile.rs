//! Editor profile data model.
//!
//! An [`EditorProfile`] maps a set of file-type tokens to the command line
//! used to launch an external editor. Profiles live in an ordered list; the
//! resolver walks it front to back and the first match wins.

/// Reserved pattern token matching any file type.
///
/// Only consulted after every specific-type token has failed to match; a
/// profile whose pattern equals this token is the catch-all rule.
pub const ALL_FILE_TYPES: &str = "*";

/// Token joining multiple extension tokens inside one pattern field,
/// e.g. `.cpp|.h`.
pub const TYPE_SEPARATOR: &str = "|";

/// One configured editor rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorProfile {
    /// One or more extension tokens (e.g. `.rs`, `toml`) joined by
    /// [`TYPE_SEPARATOR`], or [`ALL_FILE_TYPES`]. Tokens are dot-optional
    /// and compared case-insensitively. Never empty for a stored profile.
    pub file_types: String,

    /// Path or name of the editor executable. Empty means "open with the
    /// OS default application" for files this rule matches.
    pub editor_path: String,

    /// Command-line template with `%1` (file path), `%2` (line number) and
    /// `%3` (column number) placeholders.
    pub arguments: String,

    /// Wrap the expanded `%1` in double quotes.
    pub quote_path: bool,

    /// Width, in columns, this editor expands a tab character to.
    /// 0 disables column adjustment.
    pub tab_size: u32,
}

impl EditorProfile {
    /// Profile for `file_types` launched via `editor_path` with `arguments`.
    ///
    /// Path quoting is on and tab size is 0; adjust the fields directly for
    /// anything else.
    pub fn new(
        file_types: impl Into<String>,
        editor_path: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            file_types: file_types.into(),
            editor_path: editor_path.into(),
            arguments: arguments.into(),
            quote_path: true,
            tab_size: 0,
        }
    }

    /// Catch-all rule that opens any file with the OS default application.
    pub fn os_default() -> Self {
        Self::new(ALL_FILE_TYPES, "", "%1")
    }

    /// Whether this is the catch-all rule.
    pub fn matches_all_types(&self) -> bool {
        self.file_types == ALL_FILE_TYPES
    }
}

impl Default for EditorProfile {
    fn default() -> Self {
        Self::os_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let profile = EditorProfile::new(".rs", "/usr/bin/vim", "+%2 %1");
        assert_eq!(profile.file_types, ".rs");
        assert!(profile.quote_path);
        assert_eq!(profile.tab_size, 0);
        assert!(!profile.matches_all_types());
    }

    #[test]
    fn test_os_default_is_catch_all() {
        let profile = EditorProfile::os_default();
        assert!(profile.matches_all_types());
        assert!(profile.editor_path.is_empty());
    }
}
