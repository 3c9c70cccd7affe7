//! Console output formatting for `preflight`.
//!
//! The [`Printer`] is the single component responsible for layout and
//! styling decisions: verbosity-gated writes, section titles, wrapped
//! requirement error messages, and full-width status banners.
//!
//! Styling is a fixed table of named ANSI escape sequences; unknown
//! names degrade to unstyled output. Wrapping is greedy and breaks
//! only at whitespace.

mod printer;
mod style;
mod wrap;

pub use printer::Printer;
pub use style::ansi_code;
pub use wrap::{wrap, wrap_lines};
