//! # pynav-motion — Python definition motions
//!
//! Finds the nearest function or class header before or after a cursor in a
//! Python source document. This crate contains:
//!
//! - **[`position`]** — `Position` (line, col), 0-indexed, char columns
//! - **[`line_source`]** — the `LineSource` trait: line count + line text
//! - **[`buffer`]** — read-only rope `Buffer` with language detection
//! - **[`indent`]** — indentation of one line, ignoring blanks and comments
//! - **[`construct`]** — function / class header patterns
//! - **[`boundary`]** — `BoundaryCursor`, the direction-aware search
//! - **[`motion`]** — `]m` `[m` `]]` `[[` with counts and landing policy
//! - **[`options`]** — `:set` parsing for motion options
//! - **[`error`]** — error types
//!
//! Nothing here parses Python. Every line is matched on its own text.

pub mod boundary;
pub mod buffer;
pub mod construct;
pub mod error;
pub mod indent;
pub mod line_source;
pub mod motion;
pub mod options;
pub mod position;

pub use boundary::{BoundaryCursor, Direction};
pub use buffer::Buffer;
pub use construct::Construct;
pub use error::{CursorError, MotionError, OptionError};
pub use line_source::LineSource;
pub use motion::PythonMotion;
pub use options::{Landing, MotionOptions};
pub use position::Position;
