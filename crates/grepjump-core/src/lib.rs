//! # grepjump-core - Core Domain Types
//!
//! Foundation crate for grepjump. Provides the editor-profile data model,
//! the profile record codec, the extension resolver, column adjustment,
//! command-line construction, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`profile`, `request`)
//! - [`EditorProfile`] - One configured editor rule (file types, executable,
//!   arguments template, quote flag, tab size)
//! - [`EditRequest`] - A transient request to open a file at a cursor position
//!
//! ### Profile Codec (`codec`)
//! - [`encode_profile()`] / [`decode_profile()`] - One profile record to/from
//!   its stored string form
//! - [`encode_profiles()`] / [`decode_profiles()`] - The whole ordered list
//!   to/from the single configuration string
//!
//! ### Resolution (`resolver`, `column`, `command`)
//! - [`resolve_editor()`] - Pick the profile applicable to a file path
//! - [`adjust_column()`] - Tab-expansion correction for column positions
//! - [`build_arguments()`] - Expand a `%1`/`%2`/`%3` arguments template
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use grepjump_core::prelude::*;
//! ```

pub mod codec;
pub mod column;
pub mod command;
pub mod error;
pub mod logging;
pub mod profile;
pub mod request;
pub mod resolver;

/// Prelude for common imports used throughout the grepjump crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used items at crate root for convenience
pub use codec::{
    decode_profile, decode_profiles, encode_profile, encode_profiles, FIELD_SEPARATOR,
    PROFILE_SEPARATOR,
};
pub use column::adjust_column;
pub use command::{build_arguments, COLUMN_TOKEN, LINE_TOKEN, PATH_TOKEN};
pub use error::{Error, Result};
pub use profile::{EditorProfile, ALL_FILE_TYPES, TYPE_SEPARATOR};
pub use request::EditRequest;
pub use resolver::resolve_editor;
