//! Greedy word wrapping that breaks only at whitespace.
//!
//! Widths are display columns per `unicode-width`, not bytes, so CJK
//! and other wide characters wrap where they actually render.

use unicode_width::UnicodeWidthStr;

/// Wrap `text` to `width` columns, joining the wrapped lines with `\n`.
///
/// Breaks happen only at whitespace boundaries; a single word wider
/// than `width` overflows on its own line rather than being split.
/// Embedded newlines are preserved.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    wrap_lines(text, width).join("\n")
}

/// Wrap `text` to `width` columns, returning the individual lines.
#[must_use]
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Wrap a single newline-free line.
///
/// Greedy: words are placed on the current line while they fit; a
/// break consumes the whitespace run it replaces. Inter-word
/// whitespace is preserved wherever no break occurs. With `width` 0
/// this degenerates to one word per line.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.width() <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut gap = String::new();
    let mut gap_width = 0;

    for token in tokens(line) {
        let token_width = token.width();
        if token.starts_with(char::is_whitespace) {
            gap.push_str(token);
            gap_width += token_width;
        } else if current.is_empty() || current_width + gap_width + token_width <= width {
            current.push_str(&gap);
            current.push_str(token);
            current_width += gap_width + token_width;
            gap.clear();
            gap_width = 0;
        } else {
            lines.push(std::mem::replace(&mut current, token.to_string()));
            current_width = token_width;
            gap.clear();
            gap_width = 0;
        }
    }

    // A trailing whitespace run belongs to the last line.
    if !gap.is_empty() {
        current.push_str(&gap);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a line into alternating runs of whitespace and non-whitespace.
fn tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_is_ws: Option<bool> = None;

    for (idx, ch) in line.char_indices() {
        let is_ws = ch.is_whitespace();
        if let Some(prev) = prev_is_ws {
            if prev != is_ws {
                tokens.push(&line[start..idx]);
                start = idx;
            }
        }
        prev_is_ws = Some(is_ws);
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }
    tokens
}
