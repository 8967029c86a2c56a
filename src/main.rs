// SPDX-License-Identifier: MIT
//
// pynav — jump between Python definitions from the command line.
//
// This is the thin binary around the pynav-motion crate:
//
//   args → Cli → Buffer::from_file → PythonMotion::apply_to_buffer → stdout
//
// Positions are 1-indexed on the command line and in the output, the way an
// editor status line shows them, and converted to 0-indexed at the edges.
//
//   $ pynav ']m' app.py 12 5
//   40:5
//
// When no definition exists in the motion's direction the input position is
// printed unchanged, so scripts can always use the output as the new cursor.

use std::env;
use std::error::Error;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pynav_motion::{Buffer, CursorError, MotionError, MotionOptions, Position, PythonMotion};

const AFTER_HELP: &str = "\
motions:  ]m  next function      [m  previous function
          ]]  next class         [[  previous class

options (--set, Vim :set syntax):
          landing=keyword|nonblank   column to land on
          filetype=NAME              override extension detection
          [no]asyncdef               treat `async def` as a function

Logging: PYNAV_LOG or RUST_LOG.";

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Jump between Python function and class definitions.
#[derive(Debug, PartialEq, Eq, Parser)]
#[command(version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Motion keys: `]m`, `[m`, `]]` or `[[`.
    motion: PythonMotion,

    /// Python file to search.
    file: PathBuf,

    /// Cursor line, 1-indexed.
    line: NonZeroUsize,

    /// Cursor column, 1-indexed.
    col: NonZeroUsize,

    /// Repeat the motion this many times.
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Option directives in Vim `:set` syntax, applied in order.
    #[arg(short, long)]
    set: Vec<String>,
}

impl Cli {
    /// The cursor as a 0-indexed position.
    const fn position(&self) -> Position {
        Position::new(self.line.get() - 1, self.col.get() - 1)
    }
}

// ─── Logging ────────────────────────────────────────────────────────────────

/// `PYNAV_LOG` wins over `RUST_LOG`; default is `warn`.
fn log_filter() -> EnvFilter {
    env::var("PYNAV_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_logging() {
    // A second init (tests) is harmless; ignore it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

// ─── Run ────────────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<Position, Box<dyn Error>> {
    let mut options = MotionOptions::default();
    for set in &cli.set {
        for line in options.apply_set(set)? {
            eprintln!("{line}");
        }
    }

    let buffer =
        Buffer::from_file(&cli.file).map_err(|e| format!("{}: {e}", cli.file.display()))?;
    debug!(path = %cli.file.display(), lines = buffer.line_count(), "loaded");

    let landed = cli
        .motion
        .apply_to_buffer(&buffer, cli.position(), cli.count, &options)
        .map_err(|e| match e {
            // Report the line the user typed, not the 0-indexed one.
            MotionError::Cursor(CursorError::LineOutOfRange { line_count, .. }) => {
                format!("line {} is out of range (document has {line_count} lines)", cli.line)
            }
            other => other.to_string(),
        })?;
    Ok(landed)
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    init_logging();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(pos) => println!("{pos}"),
        Err(e) => {
            eprintln!("pynav: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
