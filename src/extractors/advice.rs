// src/extractors/advice.rs
//! Subsection Extractor for the named, bullet-introduced parts of the advice section.

use regex::Regex;

use super::rules::{indentation, is_bullet_line, strip_bullet_marker, strip_emphasis};
use super::section::SubsectionKey;
use crate::utils::error::ExtractError;

/// Finds a `* Name: ...` label inside a section body and collects its items.
///
/// The label line's own text after the name (and optional colon) is the first
/// item. Bullets indented deeper than the label are further items; a bullet at
/// the label's depth or shallower ends the subsection. Plain lines are joined
/// onto the item before them.
#[derive(Debug, Clone)]
pub struct SubsectionLocator {
    key: SubsectionKey,
    label: Regex,
}

impl SubsectionLocator {
    pub fn new(key: SubsectionKey) -> Result<Self, ExtractError> {
        let pattern = format!(r"(?i)^{}\b[ \t]*:?", regex::escape(key.title()));
        Ok(Self {
            key,
            label: Regex::new(&pattern)?,
        })
    }

    pub fn extract(&self, body: &str) -> Option<Vec<String>> {
        let lines: Vec<&str> = body.lines().collect();

        let (label_idx, inline) = lines.iter().enumerate().find_map(|(idx, line)| {
            if !is_bullet_line(line) {
                return None;
            }
            let text = strip_emphasis(strip_bullet_marker(line));
            let label = self.label.find(&text)?;
            Some((idx, text[label.end()..].trim().to_string()))
        })?;

        let label_indent = indentation(lines[label_idx]);
        let mut items = Vec::new();
        let mut current = inline;

        for line in &lines[label_idx + 1..] {
            if is_bullet_line(line) {
                if indentation(line) <= label_indent {
                    break;
                }
                push_item(&mut items, &mut current);
                current = strip_emphasis(strip_bullet_marker(line)).trim().to_string();
            } else {
                let continuation = strip_emphasis(line);
                let continuation = continuation.trim();
                if continuation.is_empty() {
                    continue;
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(continuation);
            }
        }
        push_item(&mut items, &mut current);

        tracing::debug!("Subsection '{}' yielded {} item(s)", self.key.title(), items.len());
        Some(items)
    }
}

fn push_item(items: &mut Vec<String>, current: &mut String) {
    let item = std::mem::take(current);
    if !item.is_empty() {
        items.push(item);
    }
}
