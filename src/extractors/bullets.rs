// src/extractors/bullets.rs
//! Bullet List Parser.

use super::rules::{is_bullet_line, strip_bullet_marker, strip_emphasis};

/// Turns a section body into its bulleted items, in source order.
///
/// Only bulleted lines count. Plain prose between bullets is dropped, as are
/// bullets that are empty once the marker and emphasis are gone.
pub fn parse_bullets(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| {
            let keep = is_bullet_line(line);
            if !keep && !line.trim().is_empty() {
                tracing::trace!("Dropping non-bulleted line: '{}'", line.trim());
            }
            keep
        })
        .map(|line| strip_emphasis(strip_bullet_marker(line)).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
