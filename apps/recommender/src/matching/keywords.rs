//! Keyword matching over career free text.
//!
//! All heuristics are case-insensitive substring checks and over-match:
//! "research scientist" and "data scientist" both hit the scientist family.
//! Very short tokens ("ai", "ml") are matched as whole words instead, since
//! as substrings they appear inside unrelated titles ("Retail", "Html").

use crate::models::career::CareerDefinition;

/// Lowercased views of a career's title and title+description.
#[derive(Debug, Clone)]
pub struct CareerText {
    title: String,
    text: String,
}

impl CareerText {
    pub fn new(career: &CareerDefinition) -> Self {
        let title = career.title.to_lowercase();
        let text = format!("{} {}", title, career.description.to_lowercase());
        Self { title, text }
    }

    /// True if the title contains any of the (lowercase) keywords.
    pub fn title_has_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.title.contains(k))
    }

    /// True if the title or description contains any of the keywords.
    pub fn text_has_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.text.contains(k))
    }

    /// True if the title or description contains `needle` (any case).
    pub fn text_contains(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        !needle.is_empty() && self.text.contains(&needle)
    }

    /// True if any title word equals one of `words` exactly.
    pub fn title_has_word(&self, words: &[&str]) -> bool {
        self.title
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| words.contains(&token))
    }
}

/// Lowercases and turns `_`/`-` separators into spaces ("data_analysis" → "data analysis").
pub fn normalize_phrase(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect()
}

/// Signed adjustment `(value - 4) * multiplier` around the scale midpoint.
pub fn centered(value: f64, multiplier: f64) -> f64 {
    (value - 4.0) * multiplier
}

/// Rounds a raw heuristic score and clamps it into `[floor, 100]`.
pub fn finish_score(raw: f64, floor: f64) -> u32 {
    raw.clamp(floor, 100.0).round() as u32
}
