//! Boundary cursor — direction-aware search for construct headers.
//!
//! A [`BoundaryCursor`] scans a [`LineSource`] one line at a time, starting
//! from an original position, looking for the nearest line that starts a
//! [`Construct`] strictly after (forward) or strictly before (backward) that
//! position.
//!
//! # State
//!
//! Two positions matter:
//!
//! - `original` — where the search started. Never changes.
//! - `(line, col)` — the scan pointer. `line` moves only through
//!   [`step_forward`](BoundaryCursor::step_forward) and
//!   [`step_backward`](BoundaryCursor::step_backward), which refuse to leave
//!   `0..=last_line`. `col` changes only when a header match succeeds, and
//!   then holds the keyword's column.
//!
//! # Strict comparison
//!
//! A header on the starting line is tested like any other line, but the
//! result is accepted only if its keyword column lies strictly past the
//! original position in the search direction. Starting *on* a header's
//! keyword therefore finds the next one, not the same one again. Starting
//! before the keyword on an indented header line (forward) or after it
//! (backward) lands on that same line.
//!
//! Cursors are built fresh for every search and dropped afterwards.

use regex::Regex;
use tracing::{debug, trace};

use crate::construct::{self, Construct};
use crate::error::CursorError;
use crate::indent::text_indentation;
use crate::line_source::LineSource;
use crate::position::Position;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Search direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Move the cursor one line in this direction.
    fn step<S: LineSource + ?Sized>(self, cursor: &mut BoundaryCursor<'_, S>) -> bool {
        match self {
            Self::Forward => cursor.step_forward(),
            Self::Backward => cursor.step_backward(),
        }
    }

    /// True when the cursor is strictly past the original position in this
    /// direction.
    fn passed<S: LineSource + ?Sized>(self, cursor: &BoundaryCursor<'_, S>) -> bool {
        match self {
            Self::Forward => cursor.is_ahead(),
            Self::Backward => cursor.is_behind(),
        }
    }
}

// ---------------------------------------------------------------------------
// BoundaryCursor
// ---------------------------------------------------------------------------

/// A single-use scanning cursor over a line source.
#[derive(Debug)]
pub struct BoundaryCursor<'a, S: LineSource + ?Sized> {
    source: &'a S,
    original: Position,
    line: usize,
    col: usize,
    last_line: usize,
}

impl<'a, S: LineSource + ?Sized> BoundaryCursor<'a, S> {
    /// Create a cursor at `original`.
    ///
    /// The column is not checked against the line's length; only the line
    /// has to exist.
    ///
    /// # Errors
    ///
    /// [`CursorError::EmptyDocument`] if the source has no lines,
    /// [`CursorError::LineOutOfRange`] if `original.line` is past the last line.
    pub fn new(source: &'a S, original: Position) -> Result<Self, CursorError> {
        let line_count = source.line_count();
        if line_count == 0 {
            return Err(CursorError::EmptyDocument);
        }
        if original.line >= line_count {
            return Err(CursorError::LineOutOfRange {
                line: original.line,
                line_count,
            });
        }
        Ok(Self {
            source,
            original,
            line: original.line,
            col: original.col,
            last_line: line_count - 1,
        })
    }

    // -- Accessors ----------------------------------------------------------

    /// Where the search started.
    #[inline]
    #[must_use]
    pub const fn original(&self) -> Position {
        self.original
    }

    /// The scan pointer as a position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Index of the last line of the source.
    #[inline]
    #[must_use]
    pub const fn last_line(&self) -> usize {
        self.last_line
    }

    /// Text of the line under the scan pointer.
    #[must_use]
    pub fn line_text(&self) -> std::borrow::Cow<'a, str> {
        self.source.line_text(self.line)
    }

    // -- Stepping -----------------------------------------------------------

    /// Move to the next line. Returns `false`, leaving the cursor where it
    /// is, when already on the last line.
    pub const fn step_forward(&mut self) -> bool {
        if self.line < self.last_line {
            self.line += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous line. Returns `false`, leaving the cursor where
    /// it is, when already on line 0.
    pub const fn step_backward(&mut self) -> bool {
        if self.line > 0 {
            self.line -= 1;
            true
        } else {
            false
        }
    }

    // -- Comparison ---------------------------------------------------------

    /// Scan pointer strictly after the original position.
    #[must_use]
    pub const fn is_ahead(&self) -> bool {
        self.line > self.original.line
            || (self.line == self.original.line && self.col > self.original.col)
    }

    /// Scan pointer strictly before the original position.
    #[must_use]
    pub const fn is_behind(&self) -> bool {
        self.line < self.original.line
            || (self.line == self.original.line && self.col < self.original.col)
    }

    // -- Classification -----------------------------------------------------

    /// Test the current line against `header`. On a match, `col` moves to
    /// the keyword column.
    pub fn is_construct_line(&mut self, header: &Regex) -> bool {
        match construct::match_column(header, &self.line_text()) {
            Some(col) => {
                self.col = col;
                true
            }
            None => false,
        }
    }

    /// Function header test with the default pattern.
    pub fn is_function_line(&mut self) -> bool {
        self.is_construct_line(Construct::Function.header())
    }

    /// Class header test.
    pub fn is_class_line(&mut self) -> bool {
        self.is_construct_line(Construct::Class.header())
    }

    /// Indentation of the code the scan pointer sits in.
    ///
    /// Walks upward from the current line (inclusive) and returns the first
    /// line's [`text_indentation`], so blank and comment-only lines inherit
    /// the indentation of the code above them. Returns 0 when no code line
    /// exists at or above the cursor. The cursor does not move.
    #[must_use]
    pub fn indentation(&self) -> usize {
        (0..=self.line)
            .rev()
            .find_map(|line| text_indentation(&self.source.line_text(line)))
            .unwrap_or(0)
    }

    // -- Search -------------------------------------------------------------

    /// Find the nearest line matching `header` strictly past the original
    /// position in `direction`.
    ///
    /// Runs at most `line_count` iterations. Returns the keyword position,
    /// or `None` when the document edge is reached first.
    pub fn find(&mut self, header: &Regex, direction: Direction) -> Option<Position> {
        loop {
            if self.is_construct_line(header) && direction.passed(self) {
                let found = self.position();
                debug!(from = %self.original, to = %found, ?direction, "construct found");
                return Some(found);
            }
            if !direction.step(self) {
                debug!(from = %self.original, ?direction, "no construct before document edge");
                return None;
            }
            trace!(line = self.line, "scan");
        }
    }

    /// Next function or method start after the original position.
    pub fn find_next_function_start(&mut self) -> Option<Position> {
        self.find(Construct::Function.header(), Direction::Forward)
    }

    /// Previous function or method start before the original position.
    pub fn find_prev_function_start(&mut self) -> Option<Position> {
        self.find(Construct::Function.header(), Direction::Backward)
    }

    /// Next class start after the original position.
    pub fn find_next_class_start(&mut self) -> Option<Position> {
        self.find(Construct::Class.header(), Direction::Forward)
    }

    /// Previous class start before the original position.
    pub fn find_prev_class_start(&mut self) -> Option<Position> {
        self.find(Construct::Class.header(), Direction::Backward)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
