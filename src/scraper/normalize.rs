// normalize.rs
use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(" +").expect("space pattern"));
static LINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\r?\n *)+").expect("line pattern"));

const BULLET: char = '\u{2022}';
const REGISTERED: char = '\u{00AE}';

/// Clean scraped text for a single CSV cell.
///
/// Symbol substitution happens before space collapsing so the result is
/// stable: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            BULLET => text.push(' '),
            REGISTERED => text.push_str(" (R) "),
            c if is_droppable(c) => {}
            c => text.push(c),
        }
    }

    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = LINE_RUNS.replace_all(&text, ",");
    text.trim().to_string()
}

// Output is UTF-8, so the only things we can't carry over are decode
// leftovers and control characters other than line breaks and tabs.
fn is_droppable(c: char) -> bool {
    c == char::REPLACEMENT_CHARACTER || (c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
}

/// `text[front:-back]`, counted in characters. Empty when the text is too short.
pub fn strip_ends(text: &str, front: usize, back: usize) -> String {
    let len = text.chars().count();
    if front + back >= len {
        return String::new();
    }
    text.chars().skip(front).take(len - front - back).collect()
}

/// `text[start:end]`, counted in characters.
pub fn char_window(text: &str, start: usize, end: usize) -> String {
    text.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Squash a floor-plan row into `cell:cell:cell`: spaces removed, line
/// breaks joined with `:` and the final character dropped.
pub fn compact_row(text: &str) -> String {
    let text = SPACE_RUNS.replace_all(text, "");
    let text = LINE_RUNS.replace_all(&text, ":");
    let len = text.chars().count();
    text.chars().take(len.saturating_sub(1)).collect()
}
