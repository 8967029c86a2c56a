//! Python construct motions — `]m`, `[m`, `]]`, `[[`.
//!
//! | Motion              | Keys | Target                         |
//! |---------------------|------|--------------------------------|
//! | `NextFunctionStart` | `]m` | next `def` / `async def`       |
//! | `PrevFunctionStart` | `[m` | previous `def` / `async def`   |
//! | `NextClassStart`    | `]]` | next `class`                   |
//! | `PrevClassStart`    | `[[` | previous `class`               |
//!
//! Each application builds a fresh [`BoundaryCursor`] at the current position
//! and runs one search. A search that reaches the document edge leaves the
//! cursor where it was. With a count, the search repeats from each landing
//! position and stops early at the last construct found.
//!
//! All four motions are jumps: a host editor should record the position
//! before the motion in its jump list.

use tracing::debug;

use crate::boundary::{BoundaryCursor, Direction};
use crate::buffer::Buffer;
use crate::construct::Construct;
use crate::error::MotionError;
use crate::line_source::{LineSource, first_non_blank_column};
use crate::options::{Landing, MotionOptions};
use crate::position::Position;

/// The only language these motions understand.
pub const PYTHON: &str = "python";

/// A construct-start motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PythonMotion {
    /// `]m` — start of the next function or method.
    NextFunctionStart,
    /// `[m` — start of the previous function or method.
    PrevFunctionStart,
    /// `]]` — start of the next class.
    NextClassStart,
    /// `[[` — start of the previous class.
    PrevClassStart,
}

impl PythonMotion {
    /// Every motion, in key-table order.
    pub const ALL: [Self; 4] = [
        Self::NextFunctionStart,
        Self::PrevFunctionStart,
        Self::NextClassStart,
        Self::PrevClassStart,
    ];

    /// Look up a motion by its key sequence.
    #[must_use]
    pub fn from_keys(keys: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|motion| motion.keys() == keys)
    }

    /// The key sequence that triggers this motion.
    #[must_use]
    pub const fn keys(self) -> &'static str {
        match self {
            Self::NextFunctionStart => "]m",
            Self::PrevFunctionStart => "[m",
            Self::NextClassStart => "]]",
            Self::PrevClassStart => "[[",
        }
    }

    /// Section motion: class starts, forward or backward.
    #[must_use]
    pub const fn section(forward: bool) -> Self {
        if forward {
            Self::NextClassStart
        } else {
            Self::PrevClassStart
        }
    }

    /// The construct this motion looks for.
    #[must_use]
    pub const fn construct(self) -> Construct {
        match self {
            Self::NextFunctionStart | Self::PrevFunctionStart => Construct::Function,
            Self::NextClassStart | Self::PrevClassStart => Construct::Class,
        }
    }

    /// The direction this motion searches in.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::NextFunctionStart | Self::NextClassStart => Direction::Forward,
            Self::PrevFunctionStart | Self::PrevClassStart => Direction::Backward,
        }
    }

    /// Construct motions always count as jumps.
    #[must_use]
    pub const fn is_jump(self) -> bool {
        true
    }

    /// Run one search from `pos`. `None` means no construct in that direction.
    ///
    /// The column follows `options.landing`.
    ///
    /// # Errors
    ///
    /// [`MotionError::Cursor`] if `pos` is not on a line of `source`.
    pub fn find<S: LineSource + ?Sized>(
        self,
        source: &S,
        pos: Position,
        options: &MotionOptions,
    ) -> Result<Option<Position>, MotionError> {
        let mut cursor = BoundaryCursor::new(source, pos)?;
        let header = self.construct().header_with(options.async_def);
        let found = cursor.find(header, self.direction());
        Ok(found.map(|hit| match options.landing {
            Landing::Keyword => hit,
            Landing::FirstNonBlank => first_non_blank_column(source, hit.line),
        }))
    }

    /// Apply the motion `count` times (at least once) starting at `pos`.
    ///
    /// Returns `pos` unchanged when no construct exists in the motion's
    /// direction.
    ///
    /// # Errors
    ///
    /// [`MotionError::Cursor`] if `pos` is not on a line of `source`.
    pub fn apply<S: LineSource + ?Sized>(
        self,
        source: &S,
        pos: Position,
        count: usize,
        options: &MotionOptions,
    ) -> Result<Position, MotionError> {
        let mut current = pos;
        for _ in 0..count.max(1) {
            match self.find(source, current, options)? {
                Some(next) => current = next,
                None => break,
            }
        }
        debug!(motion = self.keys(), from = %pos, to = %current, "motion applied");
        Ok(current)
    }

    /// Apply the motion to a buffer, skipping non-Python documents.
    ///
    /// The language comes from `options.filetype` when set, otherwise from the
    /// buffer's file extension. Anything other than Python returns `pos`
    /// without searching.
    ///
    /// # Errors
    ///
    /// [`MotionError::Cursor`] if `pos` is not on a line of `buffer`.
    pub fn apply_to_buffer(
        self,
        buffer: &Buffer,
        pos: Position,
        count: usize,
        options: &MotionOptions,
    ) -> Result<Position, MotionError> {
        let language = options.filetype.as_deref().or_else(|| buffer.language());
        if language != Some(PYTHON) {
            debug!(?language, motion = self.keys(), "not a python document");
            return Ok(pos);
        }
        self.apply(buffer, pos, count, options)
    }
}

impl std::str::FromStr for PythonMotion {
    type Err = MotionError;

    fn from_str(keys: &str) -> Result<Self, Self::Err> {
        Self::from_keys(keys).ok_or_else(|| MotionError::UnknownKeys(keys.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CursorError;
    use pretty_assertions::assert_eq;

    const SOURCE: [&str; 10] = [
        "import os",
        "",
        "class Server:",
        "    def start(self):",
        "        pass",
        "",
        "    async def stop(self):",
        "        pass",
        "",
        "x = 1; def odd(): pass",
    ];

    fn opts() -> MotionOptions {
        MotionOptions::default()
    }

    // -- Key table ----------------------------------------------------------

    #[test]
    fn keys_round_trip() {
        for motion in PythonMotion::ALL {
            assert_eq!(PythonMotion::from_keys(motion.keys()), Some(motion));
        }
        assert_eq!(PythonMotion::from_keys("]x"), None);
    }

    #[test]
    fn from_str_reports_unknown_keys() {
        assert_eq!("[m".parse::<PythonMotion>(), Ok(PythonMotion::PrevFunctionStart));
        assert_eq!(
            "gg".parse::<PythonMotion>(),
            Err(MotionError::UnknownKeys("gg".into()))
        );
    }

    #[test]
    fn section_motions_are_class_motions() {
        assert_eq!(PythonMotion::section(true), PythonMotion::NextClassStart);
        assert_eq!(PythonMotion::section(false), PythonMotion::PrevClassStart);
        assert_eq!(PythonMotion::section(true).construct(), Construct::Class);
    }

    #[test]
    fn construct_and_direction() {
        assert_eq!(PythonMotion::NextFunctionStart.construct(), Construct::Function);
        assert_eq!(PythonMotion::PrevFunctionStart.direction(), Direction::Backward);
        assert_eq!(PythonMotion::NextClassStart.direction(), Direction::Forward);
        assert!(PythonMotion::ALL.iter().all(|m| m.is_jump()));
    }

    // -- find ---------------------------------------------------------------

    #[test]
    fn find_next_method() {
        let found = PythonMotion::NextFunctionStart
            .find(&SOURCE[..], Position::new(2, 0), &opts())
            .unwrap();
        assert_eq!(found, Some(Position::new(3, 4)));
    }

    #[test]
    fn find_includes_async_def_by_default() {
        let found = PythonMotion::NextFunctionStart
            .find(&SOURCE[..], Position::new(3, 4), &opts())
            .unwrap();
        assert_eq!(found, Some(Position::new(6, 4)));
    }

    #[test]
    fn find_without_async_def() {
        let mut options = opts();
        options.async_def = false;
        let found = PythonMotion::NextFunctionStart
            .find(&SOURCE[..], Position::new(3, 4), &options)
            .unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn find_rejects_bad_start() {
        let err = PythonMotion::NextClassStart
            .find(&SOURCE[..], Position::new(40, 0), &opts())
            .unwrap_err();
        assert_eq!(
            err,
            MotionError::Cursor(CursorError::LineOutOfRange {
                line: 40,
                line_count: 10
            })
        );
    }

    // -- apply --------------------------------------------------------------

    #[test]
    fn apply_stays_put_without_match() {
        let start = Position::new(1, 0);
        let pos = PythonMotion::PrevClassStart
            .apply(&SOURCE[..], start, 1, &opts())
            .unwrap();
        assert_eq!(pos, start);
    }

    #[test]
    fn apply_with_count() {
        let pos = PythonMotion::NextFunctionStart
            .apply(&SOURCE[..], Position::ZERO, 2, &opts())
            .unwrap();
        assert_eq!(pos, Position::new(6, 4));
    }

    #[test]
    fn apply_count_stops_at_last_match() {
        let pos = PythonMotion::NextClassStart
            .apply(&SOURCE[..], Position::ZERO, 5, &opts())
            .unwrap();
        assert_eq!(pos, Position::new(2, 0));
    }

    #[test]
    fn apply_zero_count_moves_once() {
        let pos = PythonMotion::PrevFunctionStart
            .apply(&SOURCE[..], Position::new(7, 8), 0, &opts())
            .unwrap();
        assert_eq!(pos, Position::new(6, 4));
    }

    #[test]
    fn landings_coincide_for_builtin_headers() {
        let lines = ["x = 1", "    def f(): pass", "\tclass C: pass"];
        let mut options = opts();
        for landing in [Landing::Keyword, Landing::FirstNonBlank] {
            options.landing = landing;
            let pos = PythonMotion::NextFunctionStart
                .apply(&lines[..], Position::ZERO, 1, &options)
                .unwrap();
            assert_eq!(pos, Position::new(1, 4));
            let pos = PythonMotion::NextClassStart
                .apply(&lines[..], Position::ZERO, 1, &options)
                .unwrap();
            assert_eq!(pos, Position::new(2, 1));
        }
    }

    #[test]
    fn first_non_blank_landing_repeats_past_same_header() {
        let lines = ["", "\u{3000}\tdef a(): pass", "", "\u{3000}\tdef b(): pass"];
        let mut options = opts();
        options.landing = Landing::FirstNonBlank;
        let pos = PythonMotion::NextFunctionStart
            .apply(&lines[..], Position::ZERO, 2, &options)
            .unwrap();
        assert_eq!(pos, Position::new(3, 2));
    }

    // -- apply_to_buffer ----------------------------------------------------

    #[test]
    fn buffer_without_python_path_is_skipped() {
        let buf = Buffer::from_text("def f():\n    pass\ndef g():\n");
        let pos = PythonMotion::NextFunctionStart
            .apply_to_buffer(&buf, Position::ZERO, 1, &opts())
            .unwrap();
        assert_eq!(pos, Position::ZERO);
    }

    #[test]
    fn filetype_override_enables_motion() {
        let buf = Buffer::from_text("def f():\n    pass\ndef g():\n");
        let mut options = opts();
        options.filetype = Some(PYTHON.into());
        let pos = PythonMotion::NextFunctionStart
            .apply_to_buffer(&buf, Position::ZERO, 1, &options)
            .unwrap();
        assert_eq!(pos, Position::new(2, 0));
    }

    #[test]
    fn filetype_override_can_disable_motion() {
        let mut buf = Buffer::from_text("def f():\n    pass\ndef g():\n");
        buf.set_path("mod.py".into());
        let mut options = opts();
        options.filetype = Some("rust".into());
        let pos = PythonMotion::NextFunctionStart
            .apply_to_buffer(&buf, Position::ZERO, 1, &options)
            .unwrap();
        assert_eq!(pos, Position::ZERO);
    }
}
