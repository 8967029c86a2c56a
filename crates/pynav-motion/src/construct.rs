//! Construct headers — which lines start a function or a class.
//!
//! Each line is matched on its own against a header regex. There is no
//! knowledge of block structure, decorators, or signatures that span lines:
//! a line either starts with the keyword (after indentation) or it doesn't.
//!
//! Every header regex has a `kw` capture group around the keyword. The
//! reported column is where that group starts, converted from a byte offset
//! to a char column.
//!
//! | Construct  | Matches                              | Keyword column  |
//! |------------|--------------------------------------|-----------------|
//! | `Function` | `def name`, `async def name`         | `def` / `async` |
//! | `Class`    | `class Name`                         | `class`         |

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static FUNCTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<kw>(?:async\s+)?def)\s+\w").expect("function header regex")
});

static SYNC_FUNCTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?P<kw>def)\s+\w").expect("sync function header regex"));

static CLASS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?P<kw>class)\s+\w").expect("class header regex"));

// ---------------------------------------------------------------------------
// Construct
// ---------------------------------------------------------------------------

/// A structural construct whose first line can be jumped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `def` or `async def` — functions and methods.
    Function,
    /// `class`.
    Class,
}

impl Construct {
    /// The default header pattern. Functions include `async def`.
    #[must_use]
    pub fn header(self) -> &'static Regex {
        self.header_with(true)
    }

    /// The header pattern, optionally leaving out `async def` functions.
    #[must_use]
    pub fn header_with(self, async_def: bool) -> &'static Regex {
        match self {
            Self::Function if async_def => &*FUNCTION_HEADER,
            Self::Function => &*SYNC_FUNCTION_HEADER,
            Self::Class => &*CLASS_HEADER,
        }
    }

    /// Char column of this construct's keyword in `text`, if `text` is a header.
    ///
    /// Always matches against the default [`header`](Self::header), so
    /// `async def` counts as a function here whatever `asyncdef` is set to.
    /// Pair [`header_with`](Self::header_with) with the free [`match_column`]
    /// to honor that option.
    #[must_use]
    pub fn match_column(self, text: &str) -> Option<usize> {
        match_column(self.header(), text)
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => f.write_str("function"),
            Self::Class => f.write_str("class"),
        }
    }
}

/// Char column where `header` first matches `text`.
///
/// Uses the `kw` group when the pattern has one, the whole match otherwise.
#[must_use]
pub fn match_column(header: &Regex, text: &str) -> Option<usize> {
    let caps = header.captures(text)?;
    let start = caps.name("kw").or_else(|| caps.get(0))?.start();
    Some(text[..start].chars().count())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
