//! Indentation of a single line of Python.

/// Character that starts a comment line.
pub const COMMENT_CHAR: char = '#';

/// Column of the first non-whitespace char in `text`.
///
/// Returns `None` for lines that carry no indentation information: empty
/// lines, whitespace-only lines, and lines whose first non-whitespace char
/// starts a comment. Tabs count as one column each.
#[must_use]
pub fn text_indentation(text: &str) -> Option<usize> {
    let (col, first) = text.chars().enumerate().find(|(_, ch)| !ch.is_whitespace())?;
    if first == COMMENT_CHAR {
        None
    } else {
        Some(col)
    }
}
