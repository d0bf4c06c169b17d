//! Keyword matching.
//!
//! Substring containment over the lower-cased input text, deliberately
//! permissive: "fever" matches "high fever" and "feverish" alike, and no
//! tokenizing or stemming is applied. The scorer's weights are calibrated
//! against exactly this behavior.

use crate::models::ConditionRecord;

/// Keywords of `record` present in `text_lower`. Presence is binary per
/// keyword; repeated mentions count once.
pub fn matched_keywords(record: &ConditionRecord, text_lower: &str) -> Vec<&'static str> {
    record
        .keywords
        .iter()
        .copied()
        .filter(|kw| text_lower.contains(kw))
        .collect()
}

/// Union of matched keywords across the whole knowledge base, first-seen
/// order, no duplicates. Drives the composer's cause and self-care
/// tailoring.
pub fn matched_symptom_set(
    knowledge: &'static [ConditionRecord],
    text_lower: &str,
) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for record in knowledge {
        for kw in matched_keywords(record, text_lower) {
            if !seen.contains(&kw) {
                seen.push(kw);
            }
        }
    }
    seen
}
