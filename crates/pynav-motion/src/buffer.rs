//! Text buffer — read-only rope storage for a source file.
//!
//! A `Buffer` wraps a [`ropey::Rope`] with the handful of accessors the motion
//! layer needs: line count, per-line text without terminators, and the file
//! path used to decide whether the document is Python at all.
//!
//! # Design choices
//!
//! - **ropey** gives O(log n) line indexing and handles LF, CRLF and lone CR
//!   line breaks. The boundary cursor reads one line per step, so cheap
//!   random access is what matters here.
//!
//! - **Columns are char offsets**, not byte offsets, matching
//!   [`Position`](crate::position::Position).
//!
//! - **No editing.** Searches treat the document as immutable for their whole
//!   lifetime; nothing in this crate mutates text.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ropey::{Rope, RopeSlice};

use crate::line_source::LineSource;

// ---------------------------------------------------------------------------
// Language detection
// ---------------------------------------------------------------------------

/// Detect the language name from a file extension.
///
/// Returns `Some("python")` for `.py`, `.pyi` and `.pyw` files. Everything
/// else is `None`, which the motion layer treats as "not ours".
#[must_use]
pub fn detect_language(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "py" | "pyi" | "pyw" => Some("python"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// A read-only text buffer backed by a rope.
///
/// All positions are 0-indexed `(line, col)` pairs with columns counted in
/// chars. An empty buffer still has one (empty) line, and a buffer ending in
/// a newline has a trailing empty line, the way editors display files.
pub struct Buffer {
    rope: Rope,
    path: Option<PathBuf>,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer with no file path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            path: None,
        }
    }

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            rope: Rope::from_str(&text),
            path: Some(path.to_path_buf()),
        })
    }

    // -- Text access --------------------------------------------------------

    /// Total number of lines. Never zero.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// True when the buffer contains no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get a line by 0-indexed line number, including its trailing line
    /// ending (if any). Returns `None` if `line >= line_count()`.
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        if line < self.rope.len_lines() {
            Some(self.rope.line(line))
        } else {
            None
        }
    }

    /// Number of chars in a line **excluding** any trailing line ending
    /// (`\n`, `\r\n`, `\r`). Returns `None` if the line doesn't exist.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(|rope_line| {
            let total = rope_line.len_chars();
            if total == 0 {
                return 0;
            }
            let last = rope_line.char(total - 1);
            if last == '\n' {
                // Could be \r\n — check char before.
                if total >= 2 && rope_line.char(total - 2) == '\r' {
                    total - 2
                } else {
                    total - 1
                }
            } else if last == '\r' {
                total - 1
            } else {
                // Last line with no trailing newline.
                total
            }
        })
    }

    // -- Metadata -----------------------------------------------------------

    /// The file path this buffer was loaded from, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Set the file path for this buffer.
    #[inline]
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    /// Language of the buffer, detected from its path.
    #[must_use]
    pub fn language(&self) -> Option<&'static str> {
        self.path().and_then(detect_language)
    }
}

impl LineSource for Buffer {
    #[inline]
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_text(&self, index: usize) -> Cow<'_, str> {
        let content_len = self.line_content_len(index).unwrap_or(0);
        let content = self.rope.line(index).slice(..content_len);
        match content.as_str() {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(content.to_string()),
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("chars", &self.rope.len_chars())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_buffer_is_empty() {
        let buf = Buffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1); // empty buffer has one empty line
        assert!(buf.path().is_none());
    }

    #[test]
    fn from_text_basic() {
        let buf = Buffer::from_text("def f():\n    pass\n");
        assert!(!buf.is_empty());
        assert_eq!(buf.line_count(), 3); // trailing empty line
    }

    #[test]
    fn default_is_new() {
        assert!(Buffer::default().is_empty());
    }

    #[test]
    fn from_file_missing_is_error() {
        let err = Buffer::from_file(Path::new("/definitely/not/here.py")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn from_file_records_path() {
        let path = std::env::temp_dir().join(format!("pynav-buffer-{}.py", std::process::id()));
        fs::write(&path, "class A:\n    pass\n").unwrap();

        let buf = Buffer::from_file(&path).unwrap();
        assert_eq!(buf.path(), Some(path.as_path()));
        assert_eq!(buf.language(), Some("python"));
        assert_eq!(buf.line_text(0), "class A:");

        fs::remove_file(&path).unwrap();
    }

    // -- Line access --------------------------------------------------------

    #[test]
    fn line_out_of_bounds() {
        let buf = Buffer::from_text("hello\n");
        assert!(buf.line(5).is_none());
        assert!(buf.line_content_len(5).is_none());
    }

    #[test]
    fn line_content_len_excludes_lf() {
        let buf = Buffer::from_text("hello\nworld\n");
        assert_eq!(buf.line_content_len(0), Some(5));
        assert_eq!(buf.line_content_len(2), Some(0)); // trailing empty line
    }

    #[test]
    fn line_content_len_excludes_crlf() {
        let buf = Buffer::from_text("hello\r\nworld\r\n");
        assert_eq!(buf.line_content_len(0), Some(5));
        assert_eq!(buf.line_content_len(1), Some(5));
    }

    #[test]
    fn line_content_len_excludes_cr() {
        let buf = Buffer::from_text("hello\rworld");
        assert_eq!(buf.line_content_len(0), Some(5));
        assert_eq!(buf.line_content_len(1), Some(5));
    }

    // -- LineSource ---------------------------------------------------------

    #[test]
    fn line_text_strips_terminators() {
        let buf = Buffer::from_text("def a():\r\n    pass\nclass B:\rx");
        assert_eq!(LineSource::line_count(&buf), 4);
        assert_eq!(buf.line_text(0), "def a():");
        assert_eq!(buf.line_text(1), "    pass");
        assert_eq!(buf.line_text(2), "class B:");
        assert_eq!(buf.line_text(3), "x");
    }

    #[test]
    fn line_text_unicode() {
        let buf = Buffer::from_text("café = 1\n    def naïve():\n");
        assert_eq!(buf.line_text(0), "café = 1");
        assert_eq!(buf.line_text(1), "    def naïve():");
    }

    #[test]
    fn line_text_of_long_line_spanning_chunks() {
        // Long enough that ropey splits it across leaf chunks.
        let long = "x".repeat(5000);
        let text = format!("{long}\ndef f():\n");
        let buf = Buffer::from_text(&text);
        assert_eq!(buf.line_text(0), long.as_str());
        assert_eq!(buf.line_text(1), "def f():");
    }

    // -- Language -----------------------------------------------------------

    #[test]
    fn detect_python_extensions() {
        assert_eq!(detect_language(Path::new("a.py")), Some("python"));
        assert_eq!(detect_language(Path::new("pkg/stubs.pyi")), Some("python"));
        assert_eq!(detect_language(Path::new("gui.pyw")), Some("python"));
    }

    #[test]
    fn detect_other_extensions() {
        assert_eq!(detect_language(Path::new("main.rs")), None);
        assert_eq!(detect_language(Path::new("Makefile")), None);
    }

    #[test]
    fn language_without_path_is_none() {
        assert_eq!(Buffer::from_text("def f(): pass").language(), None);
    }

    #[test]
    fn language_follows_set_path() {
        let mut buf = Buffer::from_text("def f(): pass");
        buf.set_path(PathBuf::from("script.py"));
        assert_eq!(buf.language(), Some("python"));
    }

    #[test]
    fn debug_format() {
        let buf = Buffer::from_text("a\nb");
        let dbg = format!("{buf:?}");
        assert!(dbg.contains("lines: 2"));
    }
}
