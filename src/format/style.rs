//! Fixed ANSI style table.
//!
//! Recognized names: `reset`, `red`, `green`, `yellow`, `title`,
//! `error`, `success`. The `error` and `success` styles carry a
//! background color so banners render as solid blocks.

/// Escape sequence that clears all active styling.
pub(crate) const RESET: &str = "\x1b[0m";

/// Resolve a style name to its ANSI escape sequence.
///
/// Unknown names resolve to `None`, which callers render as unstyled
/// text rather than an error.
#[must_use]
pub fn ansi_code(name: &str) -> Option<&'static str> {
    match name {
        "reset" => Some(RESET),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" | "title" => Some("\x1b[33m"),
        "error" => Some("\x1b[37;41m"),
        "success" => Some("\x1b[30;42m"),
        _ => None,
    }
}
