// src/extractors/remark.rs
//! Trailing Remark Extractor.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::normalize;

/// Keyword that introduces the closing remark of a generated suggestion.
pub const REMARK_KEYWORD: &str = "Remember";

static REMARK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i){}", regex::escape(REMARK_KEYWORD)))
        .expect("Failed to compile REMARK_RE")
});

/// Captures from the first case-insensitive "Remember" through the end of the
/// text, emphasis stripped. Anything the generator appends after the remark is
/// kept verbatim.
pub fn extract_remark(text: &str) -> Option<String> {
    let found = REMARK_RE.find(text)?;
    tracing::debug!("Found remark keyword at byte {}", found.start());
    normalize(Some(&text[found.start()..]))
}
