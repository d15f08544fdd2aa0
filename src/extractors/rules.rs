// src/extractors/rules.rs
//! Text normalization and the line predicates the extraction stages are built from.
//!
//! Each heuristic lives in its own small function so the accepted shapes are
//! documented (and tested) one at a time:
//!
//! - emphasis: a `**` marker, stripped everywhere from output strings
//! - header line: a line starting at column 0 with `**` or a numeric ordinal (`3.`)
//! - bullet line: a line whose first non-blank character is `*` or `-`,
//!   or whose indentation ends in a tab immediately followed by `+`

use once_cell::sync::Lazy;
use regex::Regex;

/// The emphasis marker generated text uses for bold/strong styling.
pub const EMPHASIS_MARKER: &str = "**";

static HEADER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*\*|\d+\.)").expect("Failed to compile HEADER_LINE_RE")
});

/// Removes every emphasis marker from `text`. Does not trim.
pub fn strip_emphasis(text: &str) -> String {
    text.replace(EMPHASIS_MARKER, "")
}

/// Text Normalizer: strips emphasis and trims surrounding whitespace.
///
/// Absent input stays absent, so "section not found" remains distinguishable
/// from "section found but empty".
pub fn normalize(fragment: Option<&str>) -> Option<String> {
    fragment.map(|text| strip_emphasis(text).trim().to_string())
}

/// True when the line looks like the start of a new top-level section.
pub fn is_header_line(line: &str) -> bool {
    HEADER_LINE_RE.is_match(line)
}

/// True when the line carries one of the recognized bullet markers.
pub fn is_bullet_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    if trimmed.starts_with('*') || trimmed.starts_with('-') {
        return true;
    }
    let indent = &line[..line.len() - trimmed.len()];
    trimmed.starts_with('+') && indent.ends_with('\t')
}

/// Drops leading indentation and the whole run of bullet-marker characters.
pub fn strip_bullet_marker(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(|c: char| matches!(c, '*' | '-' | '+' | '\t'))
        .trim_start()
}

/// Visual indentation of a line, counting a tab as four columns.
pub fn indentation(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}
