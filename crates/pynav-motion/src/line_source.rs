//! Line-addressable read access to a document.
//!
//! The boundary cursor never needs more than two things from a document:
//! how many lines it has, and the text of one line at a time. [`LineSource`]
//! is that seam. [`Buffer`](crate::buffer::Buffer) implements it over a rope,
//! and plain slices of strings implement it for in-memory documents.
//!
//! `line_text` returns the line **without** its terminator. Rope lines may not
//! be contiguous in memory, so the text comes back as a `Cow`: borrowed when
//! possible, owned when the rope has to stitch chunks together.

use std::borrow::Cow;

use crate::position::Position;

/// A read-only document addressed by 0-indexed line number.
pub trait LineSource {
    /// Total number of lines.
    fn line_count(&self) -> usize;

    /// Text of line `index`, without its line ending.
    ///
    /// Callers guarantee `index < line_count()`. Implementations may panic
    /// otherwise.
    fn line_text(&self, index: usize) -> Cow<'_, str>;
}

impl<S: AsRef<str>> LineSource for [S] {
    #[inline]
    fn line_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn line_text(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed(self[index].as_ref())
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    #[inline]
    fn line_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn line_text(&self, index: usize) -> Cow<'_, str> {
        self.as_slice().line_text(index)
    }
}

/// Position of the first non-whitespace character on `line`.
///
/// This is `^` in Vim. On a blank line the column clamps to the last
/// character, or 0 for an empty line, the way normal-mode cursors do.
#[must_use]
pub fn first_non_blank_column<S: LineSource + ?Sized>(source: &S, line: usize) -> Position {
    let text = source.line_text(line);
    let indent = text.chars().take_while(|ch| ch.is_whitespace()).count();
    let len = text.chars().count();
    let col = if indent == len {
        len.saturating_sub(1)
    } else {
        indent
    };
    Position::new(line, col)
}
