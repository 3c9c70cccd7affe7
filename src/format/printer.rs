//! The console printer.
//!
//! All layout and styling decisions live here: verbosity gating,
//! width-bounded word wrap, section titles, and full-width status
//! banners. The output sink is injected so tests can capture bytes;
//! [`Printer::new`] binds stdout.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::format::style;
use crate::format::wrap::{wrap, wrap_lines};
use crate::requirement::Requirement;
use crate::term;

/// Renders verbosity-gated, optionally colored console output.
///
/// Width and color support are fixed at construction; verbosity is the
/// only mutable configuration. The printer is synchronous and writes
/// in call order; it is not designed for concurrent use.
pub struct Printer<W = io::Stdout> {
    out: W,
    verbosity: i32,
    supports_color: bool,
    width: usize,
}

impl Printer<io::Stdout> {
    /// Create a printer writing to stdout.
    ///
    /// When `width` is absent the terminal is probed once via
    /// [`term::detect_width`]; a zero width (explicit or detected)
    /// falls back to [`term::FALLBACK_WIDTH`].
    #[must_use]
    pub fn new(verbosity: i32, supports_color: bool, width: Option<usize>) -> Self {
        Self::with_writer(io::stdout(), verbosity, supports_color, width)
    }

    /// Create a stdout printer with color support detected from the
    /// environment and the width probed from the terminal.
    #[must_use]
    pub fn from_env(verbosity: i32) -> Self {
        Self::new(verbosity, term::supports_color(), None)
    }
}

impl<W: Write> Printer<W> {
    /// Create a printer writing to an arbitrary sink.
    #[must_use]
    pub fn with_writer(out: W, verbosity: i32, supports_color: bool, width: Option<usize>) -> Self {
        let width = width.unwrap_or_else(term::detect_width);
        let width = if width == 0 { term::FALLBACK_WIDTH } else { width };

        Self {
            out,
            verbosity,
            supports_color,
            width,
        }
    }

    /// Current verbosity threshold.
    #[must_use]
    pub fn verbosity(&self) -> i32 {
        self.verbosity
    }

    /// Replace the verbosity threshold. Any integer is accepted.
    pub fn set_verbosity(&mut self, verbosity: i32) {
        self.verbosity = verbosity;
    }

    /// Effective terminal width in columns. Always positive.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether style escape codes are emitted at all.
    #[must_use]
    pub fn supports_color(&self) -> bool {
        self.supports_color
    }

    /// Write `message` if `verbosity` does not exceed the held level.
    ///
    /// The message is wrapped to the configured width (whitespace-only
    /// breaks) and written without a trailing newline. Escape codes
    /// surround the message only when color support is on and `style`
    /// resolves in the style table.
    ///
    /// # Errors
    ///
    /// Returns an error if the write to the output sink fails.
    pub fn printv(&mut self, message: &str, verbosity: i32, style: Option<&str>) -> Result<()> {
        if verbosity > self.verbosity {
            return Ok(());
        }

        let wrapped = wrap(message, self.width);
        let code = style
            .and_then(style::ansi_code)
            .filter(|_| self.supports_color);

        match code {
            Some(code) => write!(self.out, "{code}{wrapped}{}", style::RESET)?,
            None => self.out.write_all(wrapped.as_bytes())?,
        }
        Ok(())
    }

    /// Write a styled line followed by an unstyled newline.
    ///
    /// Both parts are independently verbosity-gated, so a suppressed
    /// call writes nothing at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the write to the output sink fails.
    pub fn printvln(&mut self, message: &str, verbosity: i32, style: Option<&str>) -> Result<()> {
        self.printv(message, verbosity, style)?;
        self.printv("\n", verbosity, None)
    }

    /// Render a section title: blank line, the title, an `=` underline
    /// no wider than the terminal, and a trailing blank line.
    ///
    /// `style` defaults to `"title"` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the write to the output sink fails.
    pub fn title(&mut self, title: &str, verbosity: i32, style: Option<&str>) -> Result<()> {
        let style = style.or(Some("title"));

        self.printvln("", verbosity, style)?;
        self.printvln(title, verbosity, style)?;
        let underline = "=".repeat(title.width().min(self.width));
        self.printvln(&underline, verbosity, style)?;
        self.printvln("", verbosity, style)
    }

    /// Format the error text for an unfulfilled requirement.
    ///
    /// Returns `None` when the requirement is fulfilled. Otherwise the
    /// test message is wrapped to `width - 3` columns, continuation
    /// lines are indented three spaces, and a trailing newline is
    /// appended. Pure: nothing is written; callers decide when to
    /// print the result.
    #[must_use]
    pub fn requirement_error_message(&self, requirement: &Requirement) -> Option<String> {
        if requirement.is_fulfilled() {
            return None;
        }

        let lines = wrap_lines(requirement.test_message(), self.width.saturating_sub(3));
        Some(format!("{}\n", lines.join("\n   ")))
    }

    /// Render a full-width status banner.
    ///
    /// The message is prefixed with `" [<title>] "`, wrapped to the
    /// space remaining after the prefix, and every line is padded to
    /// exactly the terminal width so the styled background forms a
    /// solid rectangle. Continuation lines align under the bracketed
    /// label.
    ///
    /// # Errors
    ///
    /// Returns an error if the write to the output sink fails.
    pub fn block(
        &mut self,
        title: &str,
        message: &str,
        verbosity: i32,
        style: Option<&str>,
    ) -> Result<()> {
        let prefix = format!(" [{title}] ");
        let prefix_width = prefix.width();
        let line_length = self.width.saturating_sub(prefix_width + 1);
        let message = format!("{prefix}{}", message.trim());

        let mut lines = wrap_lines(&message, line_length);
        for (idx, line) in lines.iter_mut().enumerate() {
            if idx > 0 && line_length > 0 {
                *line = format!("{}{}", " ".repeat(prefix_width), line.trim_start());
            }
            let padding = self.width.saturating_sub(line.width());
            line.push_str(&" ".repeat(padding));
        }

        let band = " ".repeat(self.width);
        self.printvln("", verbosity, None)?;
        self.printvln(&band, verbosity, style)?;
        for line in &lines {
            self.printvln(line, verbosity, style)?;
        }
        self.printv(&band, verbosity, style)?;
        self.printvln("", verbosity, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(verbosity: i32, colors: bool, width: usize) -> Printer<Vec<u8>> {
        Printer::with_writer(Vec::new(), verbosity, colors, Some(width))
    }

    fn output(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.out).expect("printer output is UTF-8")
    }

    #[test]
    fn test_verbosity_gating() {
        let mut printer = capture(0, false, 80);
        printer.printv("hidden", 1, None).unwrap();
        printer.printv("shown", 0, None).unwrap();
        printer.printv("also shown", -1, None).unwrap();
        assert_eq!(output(printer), "shownalso shown");
    }

    #[test]
    fn test_negative_verbosity_suppresses_normal_output() {
        let mut printer = capture(-1, false, 80);
        printer.printv("hidden", 0, None).unwrap();
        assert_eq!(output(printer), "");
    }

    #[test]
    fn test_set_verbosity_accepts_any_integer() {
        let mut printer = capture(0, false, 80);
        printer.set_verbosity(-5);
        assert_eq!(printer.verbosity(), -5);
        printer.set_verbosity(1000);
        assert_eq!(printer.verbosity(), 1000);
    }

    #[test]
    fn test_printv_wraps_to_width() {
        let mut printer = capture(0, false, 10);
        printer.printv("The quick brown fox", 0, None).unwrap();
        assert_eq!(output(printer), "The quick\nbrown fox");
    }

    #[test]
    fn test_styled_output_wraps_in_escape_codes() {
        let mut printer = capture(0, true, 80);
        printer.printv("boom", 0, Some("red")).unwrap();
        assert_eq!(output(printer), "\x1b[31mboom\x1b[0m");
    }

    #[test]
    fn test_unknown_style_is_unstyled() {
        let mut printer = capture(0, true, 80);
        printer.printv("boom", 0, Some("sparkle")).unwrap();
        assert_eq!(output(printer), "boom");
    }

    #[test]
    fn test_no_color_emits_no_escape_bytes() {
        let mut printer = capture(0, false, 80);
        printer.printvln("ok", 0, Some("green")).unwrap();
        printer.title("Section", 0, None).unwrap();
        printer.block("ERROR", "broken", 0, Some("error")).unwrap();
        assert!(!output(printer).contains('\x1b'));
    }

    #[test]
    fn test_printvln_newline_is_unstyled() {
        let mut printer = capture(0, true, 80);
        printer.printvln("ok", 0, Some("green")).unwrap();
        assert_eq!(output(printer), "\x1b[32mok\x1b[0m\n");
    }

    #[test]
    fn test_printvln_suppressed_writes_nothing() {
        let mut printer = capture(0, false, 80);
        printer.printvln("hidden", 3, Some("green")).unwrap();
        assert_eq!(output(printer), "");
    }

    #[test]
    fn test_title_plain() {
        let mut printer = capture(0, false, 80);
        printer.title("Checks", 0, None).unwrap();
        assert_eq!(output(printer), "\nChecks\n======\n\n");
    }

    #[test]
    fn test_title_default_style_is_title() {
        let mut printer = capture(0, true, 80);
        printer.title("ABC", 0, None).unwrap();
        assert_eq!(
            output(printer),
            "\x1b[33m\x1b[0m\n\x1b[33mABC\x1b[0m\n\x1b[33m===\x1b[0m\n\x1b[33m\x1b[0m\n"
        );
    }

    #[test]
    fn test_title_underline_clamped_to_width() {
        let mut printer = capture(0, false, 5);
        printer.title("Requirements", 0, None).unwrap();
        assert_eq!(output(printer), "\nRequirements\n=====\n\n");
    }

    #[test]
    fn test_width_fallback_when_zero() {
        let printer = capture(0, false, 0);
        assert_eq!(printer.width(), 80);
    }

    #[test]
    fn test_explicit_width_respected() {
        let printer = capture(0, false, 133);
        assert_eq!(printer.width(), 133);
    }

    #[test]
    fn test_requirement_error_message_fulfilled_is_none() {
        let printer = capture(0, false, 80);
        let requirement = Requirement::new(|| true, "unused", "unused");
        assert_eq!(printer.requirement_error_message(&requirement), None);
    }

    #[test]
    fn test_requirement_error_message_short() {
        let printer = capture(0, false, 80);
        let requirement = Requirement::new(|| false, "The foo extension is missing.", "Install foo.");
        assert_eq!(
            printer.requirement_error_message(&requirement),
            Some("The foo extension is missing.\n".to_string())
        );
    }

    #[test]
    fn test_requirement_error_message_wraps_with_indent() {
        let printer = capture(0, false, 20);
        let requirement =
            Requirement::new(|| false, "The 'foo' extension must be available.", "");
        assert_eq!(
            printer.requirement_error_message(&requirement),
            Some("The 'foo'\n   extension must be\n   available.\n".to_string())
        );
    }

    #[test]
    fn test_block_lines_padded_to_width() {
        let mut printer = capture(0, false, 20);
        printer.block("ERROR", "boom", 0, Some("error")).unwrap();
        let band = " ".repeat(20);
        assert_eq!(
            output(printer),
            format!("\n{band}\n [ERROR]            \n         boom       \n{band}\n")
        );
    }

    #[test]
    fn test_block_single_line_height() {
        let mut printer = capture(0, false, 40);
        printer.block("OK", "ready", 0, Some("success")).unwrap();
        let text = output(printer);
        // Leading blank + band + one content line + band.
        assert_eq!(text.matches('\n').count(), 4);
        for line in text.lines().skip(1) {
            assert_eq!(line.chars().count(), 40);
        }
    }

    #[test]
    fn test_block_multi_line_height() {
        let mut printer = capture(0, false, 20);
        printer
            .block("ERROR", "aaaa bbbb cccc dddd", 0, Some("error"))
            .unwrap();
        let text = output(printer);
        // Three wrapped content lines + blank + two bands.
        assert_eq!(text.matches('\n').count(), 6);
        for line in text.lines().skip(1) {
            assert_eq!(line.chars().count(), 20);
        }
    }

    #[test]
    fn test_block_styled_bands() {
        let mut printer = capture(0, true, 10);
        printer.block("OK", "hi", 0, Some("success")).unwrap();
        assert_eq!(
            output(printer),
            "\n\x1b[30;42m          \x1b[0m\n\x1b[30;42m [OK]     \x1b[0m\n\x1b[30;42m      hi  \x1b[0m\n\x1b[30;42m          \x1b[0m\n"
        );
    }

    #[test]
    fn test_block_suppressed_by_verbosity() {
        let mut printer = capture(0, false, 20);
        printer.block("OK", "ready", 1, Some("success")).unwrap();
        assert_eq!(output(printer), "");
    }
}
