//! First-run defaults and the legacy-import hook.

use grepjump_core::EditorProfile;

/// Source of an initial profile list, consulted exactly once: when the
/// configuration backend holds no editor list yet. The result is saved
/// back immediately by the registry.
pub trait LegacySource {
    fn import(&self) -> Vec<EditorProfile>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Known Editors
// ─────────────────────────────────────────────────────────────────────────────

/// A known editor with a ready-made launch template.
#[derive(Debug, Clone)]
pub struct KnownEditor {
    pub command: &'static str,
    pub arguments: &'static str,
    pub display_name: &'static str,
}

/// Catalog of common editors with `%1`/`%2`/`%3` templates, shown to the
/// user as starting points for their own profiles.
pub const KNOWN_EDITORS: &[KnownEditor] = &[
    KnownEditor {
        command: "code",
        arguments: "--goto %1:%2:%3",
        display_name: "Visual Studio Code",
    },
    KnownEditor {
        command: "subl",
        arguments: "%1:%2:%3",
        display_name: "Sublime Text",
    },
    KnownEditor {
        command: "notepad++",
        arguments: "-n%2 -c%3 %1",
        display_name: "Notepad++",
    },
    KnownEditor {
        command: "nvim",
        arguments: "+%2 %1",
        display_name: "Neovim",
    },
    KnownEditor {
        command: "vim",
        arguments: "+%2 %1",
        display_name: "Vim",
    },
    KnownEditor {
        command: "emacs",
        arguments: "+%2:%3 %1",
        display_name: "Emacs",
    },
    KnownEditor {
        command: "zed",
        arguments: "%1:%2:%3",
        display_name: "Zed",
    },
    KnownEditor {
        command: "kate",
        arguments: "-l %2 -c %3 %1",
        display_name: "Kate",
    },
    KnownEditor {
        command: "gedit",
        arguments: "+%2 %1",
        display_name: "gedit",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Built-in Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Seeds a first run with a single catch-all rule that hands every file to
/// the OS default application. Users add editor-specific profiles from
/// there; nothing is assumed about which editors exist on the machine.
pub struct BuiltinDefaults;

impl LegacySource for BuiltinDefaults {
    fn import(&self) -> Vec<EditorProfile> {
        vec![EditorProfile::os_default()]
    }
}
