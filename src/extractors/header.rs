// src/extractors/header.rs
//! Header Locator: finds a named section's body inside loosely formatted prose.

use std::ops::Range;

use regex::Regex;

use super::rules::is_header_line;
use crate::utils::error::ExtractError;

/// Byte ranges of one located section inside the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub header: Range<usize>,
    pub body: Range<usize>,
}

impl SectionSpan {
    /// Slices the section body out of the text the span was located in.
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body.clone()]
    }

    /// Ends the body earlier, never before its start.
    pub fn clip_body(&mut self, end: usize) {
        if end < self.body.end {
            self.body.end = end.max(self.body.start);
        }
    }
}

/// Matches one canonical title written as a header.
///
/// Accepted shapes, all case-insensitive and anchored at column 0:
/// `Title`, `Title:`, `**Title**`, `**Title:**`, `3. Title`, `**3. Title**`,
/// `3. **Title**:` and inline lead-ins such as `**Title:** body text`.
#[derive(Debug, Clone)]
pub struct HeaderLocator {
    title: String,
    pattern: Regex,
}

impl HeaderLocator {
    pub fn new(title: &str) -> Result<Self, ExtractError> {
        let words: Vec<String> = title.split_whitespace().map(regex::escape).collect();
        let pattern = format!(
            r"(?im)^(?:\*\*)?[ \t]*(?:\d+\.[ \t]*)?(?:\*\*)?[ \t]*{}(?P<term>(?:[ \t]*(?:\*\*|:))*)",
            words.join(r"[ \t]+")
        );
        Ok(Self {
            title: title.to_string(),
            pattern: Regex::new(&pattern)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Finds the first qualifying header and the body that follows it.
    ///
    /// The body runs up to the next header-looking line (emphasis or ordinal
    /// at column 0) or the end of the text. Later occurrences of the same
    /// title are left inside whatever body they fall in.
    pub fn locate(&self, text: &str) -> Option<SectionSpan> {
        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let terminated = caps.name("term").is_some_and(|t| !t.as_str().is_empty());
            if !terminated && !rest_of_line_is_blank(text, whole.end()) {
                // Prose that merely starts with the title, e.g. "Styling tips are..."
                tracing::trace!("Skipping '{}' lead-in at byte {}", self.title, whole.start());
                continue;
            }

            let body_start = whole.end();
            let body_end = next_header_line(text, body_start);

            return Some(SectionSpan {
                header: whole.start()..whole.end(),
                body: body_start..body_end,
            });
        }
        None
    }
}

/// Byte offset of the first header-looking line after `from`, or the end of the text.
fn next_header_line(text: &str, from: usize) -> usize {
    let mut pos = from;
    while let Some(offset) = text[pos..].find('\n') {
        pos += offset + 1;
        if is_header_line(&text[pos..]) {
            return pos;
        }
    }
    text.len()
}

fn rest_of_line_is_blank(text: &str, from: usize) -> bool {
    text[from..]
        .split('\n')
        .next()
        .map_or(true, |rest| rest.trim().is_empty())
}

/// One-off lookup for an arbitrary title.
#[allow(dead_code)]
pub fn locate_section(text: &str, title: &str) -> Result<Option<SectionSpan>, ExtractError> {
    Ok(HeaderLocator::new(title)?.locate(text))
}
