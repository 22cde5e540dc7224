//! Tab-expansion correction for editor column positions.

/// Recompute `column` for an editor that counts a tab as `tab_size`
/// columns.
///
/// The search engine reports columns in raw character units, one per tab.
/// Editors configured with a nonzero tab size expect expanded units, so
/// every tab at or before the target column widens the position by
/// `tab_size - 1`. Returns `column` unchanged when `tab_size` is 0, the
/// column is 0, or the line text is empty.
pub fn adjust_column(column: u32, line_text: &str, tab_size: u32) -> u32 {
    if tab_size == 0 || column == 0 || line_text.is_empty() {
        return column;
    }

    // Count tabs at character indices 0..=column-1; a tab sitting exactly
    // at the target column still counts.
    let tabs = line_text
        .chars()
        .take(column as usize)
        .filter(|&c| c == '\t')
        .count() as u32;

    column + tabs * tab_size - tabs
}
