//! Serialization of editor profiles to and from the stored configuration
//! string.
//!
//! One profile is a record of five fields joined by [`FIELD_SEPARATOR`];
//! records are joined by [`PROFILE_SEPARATOR`] into the single string the
//! configuration backend holds. Neither separator may occur inside field
//! content -- both tokens sit outside the characters legal in paths and
//! argument templates, and the decoder treats any occurrence as a record
//! boundary.

use crate::error::{Error, Result};
use crate::profile::EditorProfile;
use tracing::warn;

/// Token between serialized profiles in the configuration string.
pub const PROFILE_SEPARATOR: &str = "|;;|";

/// Token between the fields of one serialized profile.
pub const FIELD_SEPARATOR: &str = "|;|";

/// Field order: file types, editor path, arguments, quote flag, tab size.
const FIELD_COUNT: usize = 5;

/// Encode one profile into its record form.
pub fn encode_profile(profile: &EditorProfile) -> String {
    [
        profile.file_types.as_str(),
        profile.editor_path.as_str(),
        profile.arguments.as_str(),
        if profile.quote_path { "true" } else { "false" },
        &profile.tab_size.to_string(),
    ]
    .join(FIELD_SEPARATOR)
}

/// Decode one record into a profile.
///
/// Rejects records with the wrong field count, an empty file-type pattern,
/// or unparsable flag/size fields.
pub fn decode_profile(record: &str) -> Result<EditorProfile> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(Error::record(format!(
            "expected {} fields, got {}",
            FIELD_COUNT,
            fields.len()
        )));
    }
    if fields[0].is_empty() {
        return Err(Error::record("empty file type pattern"));
    }

    let quote_path = fields[3]
        .parse::<bool>()
        .map_err(|_| Error::record(format!("invalid quote flag '{}'", fields[3])))?;
    let tab_size = fields[4]
        .parse::<u32>()
        .map_err(|_| Error::record(format!("invalid tab size '{}'", fields[4])))?;

    Ok(EditorProfile {
        file_types: fields[0].to_string(),
        editor_path: fields[1].to_string(),
        arguments: fields[2].to_string(),
        quote_path,
        tab_size,
    })
}

/// Encode an ordered profile list into the configuration string.
pub fn encode_profiles(profiles: &[EditorProfile]) -> String {
    profiles
        .iter()
        .map(encode_profile)
        .collect::<Vec<_>>()
        .join(PROFILE_SEPARATOR)
}

/// Decode a configuration string into profiles, preserving order.
///
/// Unreadable records are skipped with a warning so one corrupt entry does
/// not take the rest of the configuration down with it.
pub fn decode_profiles(raw: &str) -> Vec<EditorProfile> {
    raw.split(PROFILE_SEPARATOR)
        .filter_map(|record| match decode_profile(record) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Skipping unreadable editor record: {}", e);
                None
            }
        })
        .collect()
}
