use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// What a gap in a sentence looks like: `__`, `...` or `…` (and longer runs).
static FILL_BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{2,}|\.{3,}|…").unwrap());
static UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{2,}").unwrap());

pub const MCQ_BLANK: &str = "__________";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Blank,
}

/// Cut a fill-in-the-blank sentence into text runs and blanks.
pub fn split_blanks(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for blank in FILL_BLANK.find_iter(text) {
        if blank.start() > last {
            segments.push(Segment::Text(&text[last..blank.start()]));
        }
        segments.push(Segment::Blank);
        last = blank.end();
    }
    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }
    segments
}

/// Multiple choice questions show every underscore run with the same width.
pub fn normalize_mcq_blanks(text: &str) -> Cow<'_, str> {
    UNDERSCORES.replace_all(text, MCQ_BLANK)
}
