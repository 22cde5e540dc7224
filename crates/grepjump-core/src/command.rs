//! Expands an editor's argument template for a concrete match location.

use std::path::Path;

use crate::error::{Error, Result};

/// Placeholder replaced with the file path.
pub const PATH_TOKEN: &str = "%1";

/// Placeholder replaced with the 1-based line number.
pub const LINE_TOKEN: &str = "%2";

/// Placeholder replaced with the 1-based (tab-adjusted) column number.
pub const COLUMN_TOKEN: &str = "%3";

/// Expand `template`, substituting `%1` with `path` (quoted when
/// `quote_path` is set), `%2` with `line` and `%3` with `column`. Every
/// occurrence of each token is replaced; no other placeholders exist.
///
/// Fails with [`Error::MissingPathPlaceholder`] when the template has no
/// `%1`: a command line with no file argument cannot open anything, and
/// launching must not proceed.
pub fn build_arguments(
    template: &str,
    path: &Path,
    line: u32,
    column: u32,
    quote_path: bool,
) -> Result<String> {
    if !template.contains(PATH_TOKEN) {
        return Err(Error::MissingPathPlaceholder);
    }

    let path_str = path.display().to_string();
    let path_str = if quote_path {
        format!("\"{}\"", path_str)
    } else {
        path_str
    };

    Ok(template
        .replace(PATH_TOKEN, &path_str)
        .replace(LINE_TOKEN, &line.to_string())
        .replace(COLUMN_TOKEN, &column.to_string()))
}
