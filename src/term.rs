//! Terminal capability probes.
//!
//! Width detection honors the `COLUMNS` environment variable first,
//! then asks the terminal itself, and reports zero when neither source
//! is available so callers can apply their own fallback.

use std::env;
use std::io::{self, IsTerminal};

use tracing::debug;

/// Column width substituted when the terminal width cannot be detected.
pub const FALLBACK_WIDTH: usize = 80;

/// Detect the current terminal width in columns.
///
/// Returns `0` when the width cannot be determined; callers are
/// expected to substitute a fallback such as [`FALLBACK_WIDTH`].
#[must_use]
pub fn detect_width() -> usize {
    if let Ok(columns) = env::var("COLUMNS") {
        if let Ok(value) = columns.trim().parse::<usize>() {
            if value > 0 {
                return value;
            }
        }
    }

    if let Ok((cols, _rows)) = crossterm::terminal::size() {
        if cols > 0 {
            return usize::from(cols);
        }
    }

    debug!("terminal width unavailable");
    0
}

/// Best-effort color support detection for stdout.
///
/// Honors the `NO_COLOR` convention and requires stdout to be a TTY.
#[must_use]
pub fn supports_color() -> bool {
    env::var("NO_COLOR").is_err() && io::stdout().is_terminal()
}
