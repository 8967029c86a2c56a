//! Error types.
//!
//! Running off either end of the document is not an error anywhere in this
//! crate: searches report that as `None`. The errors here cover inputs that
//! would break the cursor's `0 <= line <= last_line` invariant and bad
//! `:set` directives.

use thiserror::Error;

/// Rejected [`BoundaryCursor`](crate::boundary::BoundaryCursor) construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The line source has no lines, so there is no valid starting line.
    #[error("document has no lines")]
    EmptyDocument,

    /// The starting line is past the last line of the document.
    #[error("line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
}

/// A motion could not run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error(transparent)]
    Cursor(#[from] CursorError),

    /// Key sequence that names no motion.
    #[error("unknown motion: {0:?}")]
    UnknownKeys(String),
}

/// A `:set` directive could not be applied to [`MotionOptions`](crate::options::MotionOptions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    /// `no`/`!` forms used on an option that takes a value.
    #[error("not a boolean option: {0}")]
    NotBoolean(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_error_messages() {
        assert_eq!(CursorError::EmptyDocument.to_string(), "document has no lines");
        assert_eq!(
            CursorError::LineOutOfRange {
                line: 12,
                line_count: 3
            }
            .to_string(),
            "line 12 is out of range (document has 3 lines)"
        );
    }

    #[test]
    fn motion_error_is_transparent_over_cursor_error() {
        let err = MotionError::from(CursorError::EmptyDocument);
        assert_eq!(err.to_string(), "document has no lines");
        assert_eq!(err, MotionError::Cursor(CursorError::EmptyDocument));
    }

    #[test]
    fn option_error_messages() {
        let err = OptionError::InvalidValue {
            name: "landing".into(),
            value: "sideways".into(),
        };
        assert_eq!(err.to_string(), "invalid value for landing: sideways");
        assert_eq!(
            OptionError::UnknownOption("wrapscan".into()).to_string(),
            "unknown option: wrapscan"
        );
    }
}
