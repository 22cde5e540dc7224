//! User-facing notices, abstracted from any concrete dialog layer.
//!
//! The launcher reports problems as structured [`Notice`] values through
//! the [`Notifier`] capability. The CLI binds it to stderr; a GUI front
//! end would bind it to real dialogs; tests bind it to a recorder.

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

/// A structured notice the launcher asks the front end to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Launching the configured editor (or the OS default application)
    /// failed at the OS level.
    LaunchFailed { path: PathBuf, error: String },

    /// A matched profile's arguments template has no `%1` placeholder, so
    /// nothing was launched.
    MissingPathPlaceholder { editor_path: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LaunchFailed { path, error } => {
                write!(f, "Failed to open {}: {}", path.display(), error)
            }
            Notice::MissingPathPlaceholder { editor_path } => {
                write!(
                    f,
                    "The editor '{}' has no %1 file placeholder in its arguments; \
                     edit the profile before it can open files",
                    editor_path
                )
            }
        }
    }
}

/// Capability to surface a notice to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Writes notices to stderr; used by the CLI front end.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice);
    }
}

/// Records notices for assertions in tests.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
