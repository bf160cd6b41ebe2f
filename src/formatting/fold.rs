use crate::constants::{BODY_INDENT, FOLD_WIDTH};

/// Fold `text` to the column `width`, breaking on spaces.
///
/// Scans the input once, remembering the most recent space as the
/// candidate break point. At every multiple of `width` the current
/// segment is emitted up to that candidate and the breaking space is
/// consumed. A segment without a space is left unbroken, so a word
/// longer than `width` runs long rather than being split. The tail is
/// always emitted as the final line, which may be empty.
pub fn fold(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut last = 0; // start of the current segment
    let mut cut = None; // most recent space in the current segment

    for (i, c) in chars.iter().enumerate() {
        if *c == ' ' {
            cut = Some(i);
        }
        if (i + 1) % width == 0 {
            if let Some(pos) = cut.take() {
                lines.push(chars[last..pos].iter().collect());
                last = pos + 1;
            }
        }
    }
    lines.push(chars[last..].iter().collect());
    lines
}

/// Collapse newlines and runs of whitespace to single spaces and trim.
/// Callers do this before folding; `fold` itself treats every character
/// as content.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render an issue or comment body for terminal display: normalized,
/// folded at 72 columns, every line indented four spaces.
pub fn format_body(text: &str) -> String {
    let indent = " ".repeat(BODY_INDENT);
    fold(&normalize_whitespace(text), FOLD_WIDTH)
        .iter()
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}
