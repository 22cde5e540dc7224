//! grepjump-app - Editor registry, configuration storage, and launch flow
//!
//! This crate wires the core resolution logic to the outside world: the
//! TOML-backed configuration store, the profile registry with its
//! first-run import, the notifier capability for user-facing notices, and
//! the OS seam that actually starts processes.

pub mod defaults;
pub mod launcher;
pub mod notify;
pub mod os;
pub mod registry;
pub mod store;

// Re-export primary types
pub use defaults::{BuiltinDefaults, KnownEditor, LegacySource, KNOWN_EDITORS};
pub use launcher::{edit_file, LaunchOutcome};
pub use notify::{ConsoleNotifier, Notice, Notifier, RecordingNotifier};
pub use os::{split_arguments, SystemActions, SystemLauncher};
pub use registry::EditorRegistry;
pub use store::{ConfigStore, MemoryConfigStore, TomlConfigStore, TEXT_EDITORS_KEY};
