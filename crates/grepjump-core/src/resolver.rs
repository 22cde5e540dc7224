//! Selects the editor profile applicable to a file path.
//!
//! Profiles are scanned in list order and the first matching type token
//! wins. A token matches when the path's extension (in `.ext` form)
//! case-insensitively *contains* the token, with a leading dot synthesized
//! for dot-less tokens where needed -- so `cs`, `.cs` and `s` all match a
//! `.cs` file. The catch-all [`ALL_FILE_TYPES`] pattern is only honored in
//! a second pass, after every specific token has failed.

use std::path::Path;

use crate::profile::{EditorProfile, ALL_FILE_TYPES, TYPE_SEPARATOR};

/// Extension of `path` in lowercase `.ext` form; empty when the path has
/// no extension.
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Pick the profile to open `path` with, or `None` when neither a specific
/// token nor a catch-all pattern applies.
pub fn resolve_editor<'a>(
    profiles: &'a [EditorProfile],
    path: &Path,
) -> Option<&'a EditorProfile> {
    let ext = extension_of(path);

    for profile in profiles {
        for token in profile.file_types.split(TYPE_SEPARATOR) {
            let mut token = token.to_lowercase();
            if token != ALL_FILE_TYPES && !ext.starts_with('.') && !token.starts_with('.') {
                token.insert(0, '.');
            }
            // Containment, not equality: the original product matched this
            // loosely and saved configurations rely on it.
            if ext.contains(&token) {
                return Some(profile);
            }
        }
    }

    // Second pass: the catch-all pattern never matches a real extension
    // above, so it only applies once everything specific has failed.
    profiles.iter().find(|p| p.matches_all_types())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(file_types: &str) -> EditorProfile {
        EditorProfile::new(file_types, "editor", "%1")
    }

    #[test]
    fn test_dot_optional_tokens_resolve_alike() {
        let with_dot = vec![profile(".cs")];
        let without_dot = vec![profile("cs")];
        let path = Path::new("Program.cs");

        assert!(resolve_editor(&with_dot, path).is_some());
        assert!(resolve_editor(&without_dot, path).is_some());
    }

    #[test]
    fn test_multi_type_pattern() {
        let profiles = vec![profile(".cpp|.h")];

        assert!(resolve_editor(&profiles, Path::new("foo.h")).is_some());
        assert!(resolve_editor(&profiles, Path::new("foo.cpp")).is_some());
        assert!(resolve_editor(&profiles, Path::new("foo.py")).is_none());
    }

    #[test]
    fn test_first_matching_profile_wins() {
        let profiles = vec![profile(".rs"), profile(".rs|.toml")];
        let resolved = resolve_editor(&profiles, Path::new("lib.rs")).unwrap();
        assert_eq!(resolved.file_types, ".rs");
    }

    #[test]
    fn test_catch_all_only_after_specific_tokens_fail() {
        let profiles = vec![profile(ALL_FILE_TYPES), profile(".py")];

        // A later specific match beats an earlier catch-all.
        let resolved = resolve_editor(&profiles, Path::new("run.py")).unwrap();
        assert_eq!(resolved.file_types, ".py");

        // No specific match: the catch-all applies.
        let resolved = resolve_editor(&profiles, Path::new("notes.txt")).unwrap();
        assert!(resolved.matches_all_types());
    }

    #[test]
    fn test_no_profile_without_catch_all() {
        let profiles = vec![profile(".py")];
        assert!(resolve_editor(&profiles, Path::new("notes.txt")).is_none());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let profiles = vec![profile(".CS")];
        assert!(resolve_editor(&profiles, Path::new("Program.cs")).is_some());
        assert!(resolve_editor(&profiles, Path::new("PROGRAM.Cs")).is_some());
    }

    #[test]
    fn test_containment_matches_partial_token() {
        // Deliberate: `ar` matches `.tar` through the containment test.
        let profiles = vec![profile("ar")];
        assert!(resolve_editor(&profiles, Path::new("backup.tar")).is_some());
    }

    #[test]
    fn test_extensionless_path_skips_specific_profiles() {
        let profiles = vec![profile(".txt"), profile(ALL_FILE_TYPES)];
        let resolved = resolve_editor(&profiles, Path::new("Makefile")).unwrap();
        assert!(resolved.matches_all_types());
    }
}
