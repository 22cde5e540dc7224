//! Editor launch flow: resolve a profile, build the command line, hand the
//! file to the OS.
//!
//! [`edit_file`] is the top-level entry point for one jump-to-match
//! request. It never returns an error and never panics: every failure ends
//! in a logged, notified [`LaunchOutcome`], so a bad profile or a missing
//! executable can't take the host application down.

use grepjump_core::prelude::*;
use grepjump_core::{adjust_column, build_arguments, resolve_editor, EditRequest, EditorProfile};

use crate::notify::{Notice, Notifier};
use crate::os::SystemActions;

/// Terminal state of one edit-file request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A configured editor was started.
    Editor { editor_path: String },

    /// The OS default application was used: no profile matched, or the
    /// matching profile names no editor.
    DefaultApp,

    /// The matched profile's template has no `%1`; nothing was launched
    /// and a notice was surfaced.
    MissingPlaceholder,

    /// The OS launch call failed; a notice was surfaced.
    Failed,
}

/// Open `request` with the editor configured for its file type.
///
/// `profiles` is the registry's current list (`None` when nothing is
/// loaded, which sends every file to the OS default application).
pub fn edit_file(
    request: &EditRequest,
    profiles: Option<&[EditorProfile]>,
    os: &dyn SystemActions,
    notifier: &dyn Notifier,
) -> LaunchOutcome {
    let profile = profiles.and_then(|profiles| resolve_editor(profiles, &request.path));

    let Some(profile) = profile else {
        debug!("No editor profile for {:?}; using the OS default", request.path);
        return open_with_default(request, os, notifier);
    };

    if profile.editor_path.is_empty() {
        return open_with_default(request, os, notifier);
    }

    let column = adjust_column(request.column, &request.line_text, profile.tab_size);

    let arguments = match build_arguments(
        &profile.arguments,
        &request.path,
        request.line,
        column,
        profile.quote_path,
    ) {
        Ok(arguments) => arguments,
        Err(_) => {
            warn!(
                "Editor '{}' (types '{}') has no %1 placeholder in its arguments template",
                profile.editor_path, profile.file_types
            );
            notifier.notify(Notice::MissingPathPlaceholder {
                editor_path: profile.editor_path.clone(),
            });
            return LaunchOutcome::MissingPlaceholder;
        }
    };

    debug!("Launching '{}' with '{}'", profile.editor_path, arguments);
    match os.start_process(&profile.editor_path, &arguments) {
        Ok(()) => LaunchOutcome::Editor {
            editor_path: profile.editor_path.clone(),
        },
        Err(e) => {
            error!(
                "Failed to launch editor '{}' for {:?} (line {}, column {}): {}",
                profile.editor_path, request.path, request.line, column, e
            );
            notifier.notify(Notice::LaunchFailed {
                path: request.path.clone(),
                error: e.to_string(),
            });
            LaunchOutcome::Failed
        }
    }
}

fn open_with_default(
    request: &EditRequest,
    os: &dyn SystemActions,
    notifier: &dyn Notifier,
) -> LaunchOutcome {
    match os.open_with_default(&request.path) {
        Ok(()) => LaunchOutcome::DefaultApp,
        Err(e) => {
            error!(
                "Failed to open {:?} with the default application: {}",
                request.path, e
            );
            notifier.notify(Notice::LaunchFailed {
                path: request.path.clone(),
                error: e.to_string(),
            });
            LaunchOutcome::Failed
        }
    }
}
