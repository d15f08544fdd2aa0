// src/extractors/section.rs

// --- Imports ---
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::advice::SubsectionLocator;
use super::bullets::parse_bullets;
use super::header::{HeaderLocator, SectionSpan};
use super::remark::extract_remark;
use super::rules::normalize;
use crate::utils::error::ExtractError;

// --- Section Names ---
/// Top-level sections a generated suggestion is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKey {
    StyleProfile,
    ClothingRecommendations,
    StylingTips,
    AdditionalAdvice,
    SeasonalVariations,
}

impl SectionKey {
    /// All keys, in the order the generator usually writes them.
    pub const ALL: [SectionKey; 5] = [
        SectionKey::StyleProfile,
        SectionKey::ClothingRecommendations,
        SectionKey::StylingTips,
        SectionKey::AdditionalAdvice,
        SectionKey::SeasonalVariations,
    ];

    /// Canonical header text, matched case-insensitively.
    pub fn title(self) -> &'static str {
        match self {
            SectionKey::StyleProfile => "Style Profile",
            SectionKey::ClothingRecommendations => "Clothing Recommendations",
            SectionKey::StylingTips => "Styling Tips",
            SectionKey::AdditionalAdvice => "Additional Advice",
            SectionKey::SeasonalVariations => "Seasonal Variations",
        }
    }
}

/// Named subsections nested inside "Additional Advice".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubsectionKey {
    Accessories,
    Shoes,
}

impl SubsectionKey {
    pub fn title(self) -> &'static str {
        match self {
            SubsectionKey::Accessories => "Accessories",
            SubsectionKey::Shoes => "Shoes",
        }
    }
}

// --- Data Structures ---
/// Everything recognized in one generated suggestion.
///
/// Optional fields are `None` when their header (or keyword) never appeared;
/// list fields are empty in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    pub style_profile: Option<String>,
    pub clothing_recommendations: Vec<String>,
    pub styling_tips: Vec<String>,
    pub additional_advice: Option<String>,
    pub accessories: Option<Vec<String>>,
    pub shoes: Option<Vec<String>>,
    pub seasonal_variations: Vec<String>,
    pub remember: Option<String>,
}

impl ExtractedRecord {
    /// True when no section, subsection or remark was recognized.
    pub fn is_empty(&self) -> bool {
        *self == ExtractedRecord::default()
    }
}

// --- Assembler ---
pub struct SectionExtractor {
    headers: Vec<(SectionKey, HeaderLocator)>,
    accessories: SubsectionLocator,
    shoes: SubsectionLocator,
}

impl SectionExtractor {
    /// Compiles every header and subsection pattern once.
    pub fn new() -> Result<Self, ExtractError> {
        let headers = SectionKey::ALL
            .iter()
            .map(|&key| HeaderLocator::new(key.title()).map(|locator| (key, locator)))
            .collect::<Result<Vec<_>, ExtractError>>()?;

        Ok(Self {
            headers,
            accessories: SubsectionLocator::new(SubsectionKey::Accessories)?,
            shoes: SubsectionLocator::new(SubsectionKey::Shoes)?,
        })
    }

    /// Locates every recognized section, ordered by position in the text.
    ///
    /// Each body is additionally cut at the next located header, so a bare
    /// `Styling Tips` line (which does not look like a boundary on its own)
    /// still ends the section above it. Spans never overlap.
    pub fn locate_all(&self, raw: &str) -> Vec<(SectionKey, SectionSpan)> {
        let mut spans: Vec<(SectionKey, SectionSpan)> = self
            .headers
            .iter()
            .filter_map(|(key, locator)| {
                let span = locator.locate(raw);
                if span.is_none() {
                    tracing::debug!("Section '{}' not found", locator.title());
                }
                span.map(|span| (*key, span))
            })
            .collect();

        spans.sort_by_key(|(_, span)| span.header.start);

        let header_starts: Vec<usize> = spans.iter().map(|(_, span)| span.header.start).collect();
        for (_, span) in spans.iter_mut() {
            if let Some(&next) = header_starts.iter().find(|&&start| start >= span.body.start) {
                span.clip_body(next);
            }
        }

        for (key, span) in &spans {
            tracing::debug!(
                "Section '{}': header {:?}, body {:?}",
                key.title(),
                span.header,
                span.body
            );
        }
        spans
    }

    /// Builds the record for one raw suggestion. Never fails; anything not
    /// recognized is simply left empty.
    pub fn extract(&self, raw: &str) -> ExtractedRecord {
        self.extract_with_spans(raw).0
    }

    /// Same as [`SectionExtractor::extract`], also handing back the spans the
    /// record was built from.
    pub fn extract_with_spans(&self, raw: &str) -> (ExtractedRecord, Vec<(SectionKey, SectionSpan)>) {
        let spans = self.locate_all(raw);
        let body = |key: SectionKey| {
            spans
                .iter()
                .find(|(found, _)| *found == key)
                .map(|(_, span)| span.body(raw))
        };

        let advice = body(SectionKey::AdditionalAdvice);
        let record = ExtractedRecord {
            style_profile: normalize(body(SectionKey::StyleProfile)),
            clothing_recommendations: body(SectionKey::ClothingRecommendations)
                .map(parse_bullets)
                .unwrap_or_default(),
            styling_tips: body(SectionKey::StylingTips)
                .map(parse_bullets)
                .unwrap_or_default(),
            additional_advice: normalize(advice),
            accessories: advice.and_then(|text| self.accessories.extract(text)),
            shoes: advice.and_then(|text| self.shoes.extract(text)),
            seasonal_variations: body(SectionKey::SeasonalVariations)
                .map(parse_bullets)
                .unwrap_or_default(),
            remember: extract_remark(raw),
        };

        tracing::info!(
            "Extracted {} of {} sections ({} input bytes)",
            spans.len(),
            SectionKey::ALL.len(),
            raw.len()
        );
        (record, spans)
    }
}

static SHARED_EXTRACTOR: Lazy<SectionExtractor> = Lazy::new(|| {
    SectionExtractor::new().expect("Failed to compile section patterns")
});

/// Extracts with a lazily built extractor shared across calls and threads.
#[allow(dead_code)]
pub fn extract(raw: &str) -> ExtractedRecord {
    SHARED_EXTRACTOR.extract(raw)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SUGGESTION: &str = "**Style Profile:** Relaxed minimalist.\n**Clothing Recommendations**\n* Linen shirt\n* Straight jeans\n**Styling Tips**\n* Roll sleeves\n**Additional Advice**\n* Accessories: Leather belt\n* Shoes: White sneakers\n**Seasonal Variations**\n* Summer: light fabrics\nRemember to dress for comfort.";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn field_text(record: &ExtractedRecord, key: SectionKey) -> String {
        match key {
            SectionKey::StyleProfile => record.style_profile.clone().unwrap_or_default(),
            SectionKey::ClothingRecommendations => record.clothing_recommendations.join("\n"),
            SectionKey::StylingTips => record.styling_tips.join("\n"),
            SectionKey::AdditionalAdvice => record.additional_advice.clone().unwrap_or_default(),
            SectionKey::SeasonalVariations => record.seasonal_variations.join("\n"),
        }
    }

    #[test]
    fn full_suggestion_is_split_into_every_field() {
        let record = extract(FULL_SUGGESTION);
        assert_eq!(record.style_profile.as_deref(), Some("Relaxed minimalist."));
        assert_eq!(record.clothing_recommendations, strings(&["Linen shirt", "Straight jeans"]));
        assert_eq!(record.styling_tips, strings(&["Roll sleeves"]));
        assert_eq!(
            record.additional_advice.as_deref(),
            Some("* Accessories: Leather belt\n* Shoes: White sneakers")
        );
        assert_eq!(record.accessories, Some(strings(&["Leather belt"])));
        assert_eq!(record.shoes, Some(strings(&["White sneakers"])));
        assert_eq!(record.seasonal_variations, strings(&["Summer: light fabrics"]));
        assert_eq!(record.remember.as_deref(), Some("Remember to dress for comfort."));
    }

    #[test]
    fn plain_prose_yields_an_empty_record() {
        let record = extract("You look great in earth tones. Try layering for autumn.");
        assert!(record.is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn degenerate_inputs_never_panic() {
        let inputs = [
            "**",
            "****",
            "1.",
            "\n\n\n",
            "**Style Profile**",
            "Styling Tips:",
            "**Additional Advice**\n*",
            "**Additional Advice**\n* Shoes",
            "* \n- \n\t+ ",
            "remember",
            "**Clothing Recommendations**\r\n* Linen shirt\r\n* Chinos\r\n**Styling Tips**\r\n* Roll sleeves\r\n",
            "1. Style Profile: été décontracté ✨\n2. Seasonal Variations\n- Hiver : laine",
        ];
        for input in inputs {
            let record = extract(input);
            assert_eq!(record, extract(input), "unstable result for {:?}", input);
            let json = serde_json::to_string(&record).unwrap();
            assert!(!json.contains("**"), "emphasis left in output for {:?}", input);
        }
    }

    #[test]
    fn header_with_nothing_after_it_is_found_but_empty() {
        let record = extract("**Style Profile**");
        assert_eq!(record.style_profile.as_deref(), Some(""));

        let record = extract("**Additional Advice**\n* Shoes");
        assert_eq!(record.shoes, Some(vec![]));
        assert_eq!(record.accessories, None);
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let text = "**Clothing Recommendations**\r\n* Linen shirt\r\n* Chinos\r\n**Styling Tips**\r\n* Roll sleeves\r\n";
        let record = extract(text);
        assert_eq!(record.clothing_recommendations, strings(&["Linen shirt", "Chinos"]));
        assert_eq!(record.styling_tips, strings(&["Roll sleeves"]));
    }

    #[test]
    fn record_and_spans_come_from_one_pass() {
        let extractor = SectionExtractor::new().unwrap();
        let (record, spans) = extractor.extract_with_spans(FULL_SUGGESTION);
        assert_eq!(record, extractor.extract(FULL_SUGGESTION));
        assert_eq!(spans, extractor.locate_all(FULL_SUGGESTION));
    }

    #[test]
    fn prose_inside_a_list_section_is_dropped() {
        let text = "**Clothing Recommendations**\n* Linen shirt\nLinen breathes well in heat.\n**Styling Tips**\n* Roll sleeves";
        let record = extract(text);
        assert_eq!(record.clothing_recommendations, strings(&["Linen shirt"]));
    }

    #[test]
    fn accessories_without_shoes() {
        let text = "**Additional Advice**\n* Accessories: Leather belt\nKeep jewelry minimal.";
        let record = extract(text);
        assert_eq!(record.accessories, Some(strings(&["Leather belt Keep jewelry minimal."])));
        assert_eq!(record.shoes, None);
        assert!(record.additional_advice.is_some());
    }

    #[test]
    fn missing_remark_leaves_other_sections_intact() {
        let text = FULL_SUGGESTION.replace("Remember to dress for comfort.", "Have fun!");
        let record = extract(&text);
        assert_eq!(record.remember, None);
        assert_eq!(record.clothing_recommendations, strings(&["Linen shirt", "Straight jeans"]));
        assert_eq!(record.seasonal_variations, strings(&["Summer: light fabrics"]));
    }

    #[test]
    fn missing_advice_section_leaves_subsections_absent() {
        let text = "**Styling Tips**\n* Accessories: not a subsection here";
        let record = extract(text);
        assert_eq!(record.additional_advice, None);
        assert_eq!(record.accessories, None);
        assert_eq!(record.shoes, None);
    }

    #[test]
    fn undecorated_headers_are_found_and_isolated() {
        let text = "Clothing Recommendations\n* Chinos\nStyling Tips\n* Cuff the hem\nSeasonal Variations\n- Winter: wool coat";
        let record = extract(text);
        assert_eq!(record.clothing_recommendations, strings(&["Chinos"]));
        assert_eq!(record.styling_tips, strings(&["Cuff the hem"]));
        assert_eq!(record.seasonal_variations, strings(&["Winter: wool coat"]));
    }

    #[test]
    fn numbered_headers_with_mixed_bullets() {
        let text = "1. **Style Profile**: Smart casual with a **modern** edge.\n2. Clothing Recommendations:\n   - Navy blazer\n   * Grey trousers\n\t+ White oxford\n3. Styling Tips\n- Match belt and shoes";
        let record = extract(text);
        assert_eq!(record.style_profile.as_deref(), Some("Smart casual with a modern edge."));
        assert_eq!(
            record.clothing_recommendations,
            strings(&["Navy blazer", "Grey trousers", "White oxford"])
        );
        assert_eq!(record.styling_tips, strings(&["Match belt and shoes"]));
    }

    #[test]
    fn content_never_crosses_into_another_section() {
        for a in SectionKey::ALL {
            for b in SectionKey::ALL {
                if a == b {
                    continue;
                }
                let text = format!("**{}**\n* alpha marker\n**{}**\n* beta marker", a.title(), b.title());
                let record = extract(&text);
                assert!(
                    !field_text(&record, b).contains("alpha"),
                    "{:?} leaked into {:?}",
                    a,
                    b
                );
                assert!(!field_text(&record, a).contains("beta"), "{:?} leaked into {:?}", b, a);
            }
        }
    }

    #[test]
    fn located_spans_are_disjoint_and_ordered() {
        let extractor = SectionExtractor::new().unwrap();
        let spans = extractor.locate_all(FULL_SUGGESTION);
        assert_eq!(spans.len(), 5);
        for pair in spans.windows(2) {
            assert!(pair[0].1.body.end <= pair[1].1.header.start);
        }
        assert_eq!(spans[0].0, SectionKey::StyleProfile);
        assert_eq!(spans[4].0, SectionKey::SeasonalVariations);
    }

    #[test]
    fn repeated_and_concurrent_calls_agree() {
        let first = extract(FULL_SUGGESTION);
        assert_eq!(first, extract(FULL_SUGGESTION));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| extract(FULL_SUGGESTION))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), first);
            }
        });
    }

    #[test]
    fn output_never_contains_emphasis() {
        let text = "**Style Profile:** **Bold** look\n**Clothing Recommendations**\n* **Denim** jacket\n**Additional Advice**\n* **Shoes:** **Boots**";
        let record = extract(text);
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("**"));
        assert_eq!(record.shoes, Some(strings(&["Boots"])));
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(extract(FULL_SUGGESTION)).unwrap();
        assert_eq!(json["styleProfile"], "Relaxed minimalist.");
        assert_eq!(json["clothingRecommendations"][1], "Straight jeans");
        assert!(json.get("seasonalVariations").is_some());

        let empty = serde_json::to_value(ExtractedRecord::default()).unwrap();
        assert!(empty["shoes"].is_null());
    }
}
