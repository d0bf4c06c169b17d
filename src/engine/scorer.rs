//! Condition scoring.
//!
//! Additive and monotonic in evidence: more matched keywords never lower
//! a score, and the cap keeps any single condition from reading as
//! certainty. Two context heuristics (measured temperature, chronicity)
//! nudge scores without any real NLP.

use crate::models::ConditionRecord;

/// Bonus per matched keyword.
pub const KEYWORD_BONUS: f64 = 0.12;
/// Extra bonus once two or more keywords match.
pub const MULTI_MATCH_BONUS: f64 = 0.08;
/// Further bonus once three or more keywords match.
pub const STRONG_MATCH_BONUS: f64 = 0.05;
/// Bonus when fever is in play and the context mentions a measured
/// temperature.
pub const FEVER_CONTEXT_BONUS: f64 = 0.10;
/// Bonus for chronic-leaning conditions when the context signals duration.
pub const CHRONIC_CONTEXT_BONUS: f64 = 0.10;
/// Hard ceiling on any raw score.
pub const SCORE_CAP: f64 = 0.95;

/// Context markers for a measured temperature.
const TEMPERATURE_MARKERS: &[&str] = &["temperature", "°c", "°f"];
/// Context markers for symptom duration long enough to lean chronic.
const CHRONICITY_MARKERS: &[&str] = &["week", "month"];

/// Raw score for one condition given its matched keyword count and the
/// lower-cased symptom and auxiliary texts.
pub fn score_condition(
    record: &ConditionRecord,
    match_count: usize,
    symptoms_lower: &str,
    aux_lower: &str,
) -> f64 {
    let mut score = record.base_score;

    score += KEYWORD_BONUS * match_count as f64;
    if match_count >= 2 {
        score += MULTI_MATCH_BONUS;
    }
    if match_count >= 3 {
        score += STRONG_MATCH_BONUS;
    }

    let fever_relevant =
        record.keywords.contains(&"fever") || symptoms_lower.contains("fever");
    if fever_relevant && contains_any(aux_lower, TEMPERATURE_MARKERS) {
        score += FEVER_CONTEXT_BONUS;
    }

    if record.chronic && contains_any(aux_lower, CHRONICITY_MARKERS) {
        score += CHRONIC_CONTEXT_BONUS;
    }

    score.min(SCORE_CAP)
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}
