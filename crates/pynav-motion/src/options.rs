//! Motion options — the `:set` system.
//!
//! Parses Vim-style `:set` directives and applies them to [`MotionOptions`].
//! The command-line driver feeds `--set` arguments through here, so the same
//! syntax works in both places.
//!
//! # Supported syntax
//!
//! | Syntax           | Effect                        |
//! |------------------|-------------------------------|
//! | `:set option`    | Enable boolean / show value   |
//! | `:set nooption`  | Disable boolean               |
//! | `:set option!`   | Toggle boolean                |
//! | `:set option?`   | Query current value           |
//! | `:set option=V`  | Assign a value                |
//! | `:set`           | Show changed options          |
//! | `:set all`       | Show all options              |
//!
//! # Option names
//!
//! | Full name  | Abbrev | Type   | Default   |
//! |------------|--------|--------|-----------|
//! | `landing`  | `ld`   | string | `keyword` |
//! | `filetype` | `ft`   | string | (empty)   |
//! | `asyncdef` | `ad`   | bool   | true      |
//!
//! `landing` picks the column a motion lands on: `keyword` puts the cursor on
//! the `def`/`async`/`class` keyword, `nonblank` on the first non-blank char
//! of the line (`^`). The built-in headers allow only whitespace before the
//! keyword, so today both land on the same column. An empty `filetype`
//! means "detect from the file extension".

use std::fmt;

use crate::error::OptionError;

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

/// A parsed `:set` directive.
///
/// Produced by [`parse_set`] from the arguments to `:set`.
/// [`MotionOptions::apply`] interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `:set option` — enable a boolean option.
    On(String),

    /// `:set nooption` — disable a boolean option.
    Off(String),

    /// `:set option!` — toggle a boolean option.
    Toggle(String),

    /// `:set option?` — query the current value.
    Query(String),

    /// `:set option=value` — assign a value.
    Assign(String, String),

    /// `:set` with no arguments — show changed options.
    ShowChanged,

    /// `:set all` — show all options.
    ShowAll,
}

/// Full name of an option given its full name or abbreviation.
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
    match name {
        "landing" | "ld" => Some("landing"),
        "filetype" | "ft" => Some("filetype"),
        "asyncdef" | "ad" => Some("asyncdef"),
        _ => None,
    }
}

/// Returns `true` if `name` is a known boolean option (full name or abbreviation).
#[must_use]
pub fn is_bool_option(name: &str) -> bool {
    matches!(name, "asyncdef" | "ad")
}

/// Returns `true` if `name` is a known string option (full name or abbreviation).
#[must_use]
pub fn is_string_option(name: &str) -> bool {
    matches!(name, "landing" | "ld" | "filetype" | "ft")
}

/// Parse the full `:set` arguments string into directives.
///
/// Multiple space-separated arguments are supported
/// (e.g., `:set landing=nonblank noasyncdef`). An empty argument string
/// produces [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single `:set` argument into a directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }

    // Assignment: option=value
    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    // Query: option?
    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }

    // Toggle: option!
    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_string());
    }

    // Negation: nooption — only if the remainder is a known boolean option.
    if let Some(name) = arg.strip_prefix("no") {
        if !name.is_empty() && is_bool_option(name) {
            return SetDirective::Off(name.to_string());
        }
    }

    // Bare string option name = query its value (Vim behavior).
    if is_string_option(arg) {
        return SetDirective::Query(arg.to_string());
    }

    // Default: enable boolean option.
    SetDirective::On(arg.to_string())
}

/// Format a boolean option for display (`:set` output).
///
/// Returns `"name"` when true, `"noname"` when false.
#[must_use]
pub fn format_bool(name: &str, value: bool) -> String {
    if value {
        name.to_string()
    } else {
        format!("no{name}")
    }
}

// ---------------------------------------------------------------------------
// Landing
// ---------------------------------------------------------------------------

/// Which column a construct motion puts the cursor on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landing {
    /// The `def` / `async` / `class` keyword.
    #[default]
    Keyword,
    /// The first non-blank char of the matched line (`^`).
    FirstNonBlank,
}

impl Landing {
    /// Parse an option value. Accepts `keyword`/`kw` and `nonblank`/`nb`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "keyword" | "kw" => Some(Self::Keyword),
            "nonblank" | "nb" => Some(Self::FirstNonBlank),
            _ => None,
        }
    }
}

impl fmt::Display for Landing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => f.write_str("keyword"),
            Self::FirstNonBlank => f.write_str("nonblank"),
        }
    }
}

// ---------------------------------------------------------------------------
// MotionOptions
// ---------------------------------------------------------------------------

/// Option values consulted by [`PythonMotion`](crate::motion::PythonMotion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionOptions {
    /// Landing column policy.
    pub landing: Landing,
    /// Language override. `None` means detect from the buffer's path.
    pub filetype: Option<String>,
    /// Treat `async def` lines as function headers.
    pub async_def: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            landing: Landing::Keyword,
            filetype: None,
            async_def: true,
        }
    }
}

impl MotionOptions {
    /// Apply one directive. Returns text to show the user for queries and
    /// listings, `None` for silent changes.
    ///
    /// # Errors
    ///
    /// [`OptionError`] for unknown names, bad values, or boolean forms on
    /// string options.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>, OptionError> {
        match directive {
            SetDirective::On(name) => {
                self.set_bool(name, |_| true)?;
                Ok(None)
            }
            SetDirective::Off(name) => {
                self.set_bool(name, |_| false)?;
                Ok(None)
            }
            SetDirective::Toggle(name) => {
                self.set_bool(name, |old| !old)?;
                Ok(None)
            }
            SetDirective::Query(name) => self.show(name).map(Some),
            SetDirective::Assign(name, value) => {
                self.assign(name, value)?;
                Ok(None)
            }
            SetDirective::ShowChanged => Ok(Some(self.listing(true))),
            SetDirective::ShowAll => Ok(Some(self.listing(false))),
        }
    }

    /// Parse and apply a whole `:set` argument string, collecting any output.
    ///
    /// # Errors
    ///
    /// Stops at the first directive that fails.
    pub fn apply_set(&mut self, args: &str) -> Result<Vec<String>, OptionError> {
        let mut output = Vec::new();
        for directive in parse_set(args) {
            if let Some(text) = self.apply(&directive)? {
                output.push(text);
            }
        }
        Ok(output)
    }

    /// Display form of one option (`landing=keyword`, `noasyncdef`, ...).
    ///
    /// # Errors
    ///
    /// [`OptionError::UnknownOption`] if `name` is not an option.
    pub fn show(&self, name: &str) -> Result<String, OptionError> {
        match canonical_name(name) {
            Some("landing") => Ok(format!("landing={}", self.landing)),
            Some("filetype") => Ok(format!(
                "filetype={}",
                self.filetype.as_deref().unwrap_or_default()
            )),
            Some("asyncdef") => Ok(format_bool("asyncdef", self.async_def)),
            _ => Err(OptionError::UnknownOption(name.to_string())),
        }
    }

    fn set_bool(&mut self, name: &str, f: impl FnOnce(bool) -> bool) -> Result<(), OptionError> {
        match canonical_name(name) {
            Some("asyncdef") => {
                self.async_def = f(self.async_def);
                Ok(())
            }
            Some(_) => Err(OptionError::NotBoolean(name.to_string())),
            None => Err(OptionError::UnknownOption(name.to_string())),
        }
    }

    fn assign(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match canonical_name(name) {
            Some("landing") => {
                self.landing = Landing::parse(value).ok_or_else(invalid)?;
            }
            Some("filetype") => {
                self.filetype = (!value.is_empty()).then(|| value.to_string());
            }
            Some(_) => return Err(invalid()),
            None => return Err(OptionError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn listing(&self, changed_only: bool) -> String {
        let defaults = Self::default();
        let mut shown = Vec::new();
        if !changed_only || self.landing != defaults.landing {
            shown.push(format!("landing={}", self.landing));
        }
        if !changed_only || self.filetype != defaults.filetype {
            shown.push(format!(
                "filetype={}",
                self.filetype.as_deref().unwrap_or_default()
            ));
        }
        if !changed_only || self.async_def != defaults.async_def {
            shown.push(format_bool("asyncdef", self.async_def));
        }
        shown.join("  ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
