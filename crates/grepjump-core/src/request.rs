//! Edit-request value type handed over by the search front end.

use std::path::PathBuf;

/// A request to open `path` at a cursor position.
///
/// Constructed per user action and discarded after the launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    /// File to open.
    pub path: PathBuf,
    /// Line number (1-based, defaults to 1).
    pub line: u32,
    /// Column number (1-based, defaults to 1).
    pub column: u32,
    /// Text of the target line, used for tab-width column correction.
    /// May be empty when the front end has no line content at hand.
    pub line_text: String,
}

impl EditRequest {
    /// Request to open `path` at the top of the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            line: 1,
            column: 1,
            line_text: String::new(),
        }
    }

    /// Request to open `path` at `line`:`column`.
    ///
    /// A line or column of 0 defaults to 1.
    pub fn at(path: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            path: path.into(),
            line: if line == 0 { 1 } else { line },
            column: if column == 0 { 1 } else { column },
            line_text: String::new(),
        }
    }

    /// Attach the text of the target line.
    pub fn with_line_text(mut self, line_text: impl Into<String>) -> Self {
        self.line_text = line_text.into();
        self
    }
}
