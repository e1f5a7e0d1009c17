//! Plain-text helpers used when rendering commit messages.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").expect("valid word pattern"));

/// Replace every breakline marker with a newline
pub fn apply_breaklines(text: &str, breakline: &str) -> String {
    if breakline.is_empty() {
        return text.to_string();
    }
    text.replace(breakline, "\n")
}

/// Keep at most `width` characters
pub fn crop(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Word-wrap each line of `text` at `width` characters.
///
/// Lines within the width are kept verbatim. Longer lines are broken at
/// whitespace; every piece keeps the line's indentation and the spacing
/// between its words. Words longer than `width` stay whole on their own line.
/// Leading and trailing whitespace of the result is trimmed.
pub fn wrap(text: &str, width: usize) -> String {
    text.lines()
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn wrap_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let content = line.trim_start();
    let indent = &line[..line.len() - content.len()];
    let indent_len = indent.chars().count();

    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_len = indent_len;
    let mut gap_start = 0;

    for word in WORD.find_iter(content) {
        let gap = &content[gap_start..word.start()];
        let word_len = word.as_str().chars().count();
        let gap_len = gap.chars().count();
        gap_start = word.end();

        if current_len == indent_len {
            current.push_str(word.as_str());
            current_len += word_len;
        } else if current_len + gap_len + word_len <= width {
            current.push_str(gap);
            current.push_str(word.as_str());
            current_len += gap_len + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, indent.to_string()));
            current.push_str(word.as_str());
            current_len = indent_len + word_len;
        }
    }

    lines.push(current);
    lines.join("\n")
}
