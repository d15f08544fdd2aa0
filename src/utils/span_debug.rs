// src/utils/span_debug.rs
use std::fs;
use std::path::Path;

use crate::extractors::header::SectionSpan;
use crate::extractors::section::SectionKey;
use crate::utils::error::AppError;

/// Wraps each highlighted byte range in `[[label]]...[[/label]]` markers.
/// Ranges are applied in start order; a range overlapping an earlier one is skipped.
pub fn annotate(text: &str, highlights: &[(usize, usize, String)]) -> String {
    let mut sorted = highlights.to_vec();
    sorted.sort_by_key(|h| h.0);

    let mut annotated = String::with_capacity(text.len() + sorted.len() * 32);
    let mut last_pos = 0;
    for (start, end, label) in sorted {
        if start < last_pos || end > text.len() || start > end {
            tracing::warn!("Skipping out-of-order highlight {}..{} ({})", start, end, label);
            continue;
        }
        annotated.push_str(&text[last_pos..start]);
        annotated.push_str(&format!("[[{}]]", label));
        annotated.push_str(&text[start..end]);
        annotated.push_str(&format!("[[/{}]]", label));
        last_pos = end;
    }
    annotated.push_str(&text[last_pos..]);
    annotated
}

/// Turns located sections into header/body highlights.
pub fn section_highlights(spans: &[(SectionKey, SectionSpan)]) -> Vec<(usize, usize, String)> {
    spans
        .iter()
        .flat_map(|(key, span)| {
            [
                (span.header.start, span.header.end, format!("{}:header", key.title())),
                (span.body.start, span.body.end, format!("{}:body", key.title())),
            ]
        })
        .collect()
}

/// Writes a copy of the raw text with every located section marked up,
/// for checking how a given suggestion was split.
pub fn save_span_debug(
    text: &str,
    path: &Path,
    spans: &[(SectionKey, SectionSpan)],
) -> Result<(), AppError> {
    let annotated = annotate(text, &section_highlights(spans));
    fs::write(path, annotated)?;
    tracing::info!("Saved annotated sections to {}", path.display());
    Ok(())
}
