//! Score normalization and ranking.
//!
//! Raw scores become a percentage distribution and the list is sorted by
//! descending raw score with knowledge-base declaration order as the
//! tie-break. Percentages round independently per condition and are NOT
//! redistributed to sum to exactly 100; the display layer assumes this
//! exact shape.

use std::cmp::Ordering;

use crate::models::ScoredCondition;

/// Floor of the reported confidence, however weak the evidence.
pub const CONFIDENCE_FLOOR: f64 = 0.35;
/// Ceiling of the evidence-driven confidence.
pub const CONFIDENCE_CAP: f64 = 0.95;
/// Bonus when the user supplied substantial context.
pub const DETAIL_BONUS: f64 = 0.05;
/// Absolute ceiling once the detail bonus is applied.
pub const DETAIL_BONUS_CAP: f64 = 0.97;
/// Auxiliary text must exceed this many characters to earn the bonus.
pub const DETAIL_LENGTH_THRESHOLD: usize = 30;

/// Fill in percentages and sort descending by raw score. The sort is
/// stable, so equal scores keep their declaration order.
pub fn rank(mut scored: Vec<ScoredCondition>) -> Vec<ScoredCondition> {
    let total: f64 = scored.iter().map(|c| c.raw_score).sum();
    // Every base score is positive, so a zero sum is unreachable with the
    // bundled knowledge base; guard anyway for custom tables.
    let total = if total == 0.0 { 1.0 } else { total };

    for c in &mut scored {
        c.percentage = ((c.raw_score / total) * 100.0).round() as u32;
    }

    scored.sort_by(|a, b| {
        b.raw_score
            .partial_cmp(&a.raw_score)
            .unwrap_or(Ordering::Equal)
    });
    scored
}

/// Overall confidence: the top raw score clamped into
/// [`CONFIDENCE_FLOOR`, `CONFIDENCE_CAP`], plus [`DETAIL_BONUS`] when the
/// combined auxiliary text is long enough. The bonus rewards supplied
/// context independent of which condition ranks first.
pub fn confidence(top_raw_score: f64, aux_chars: usize) -> f64 {
    let mut c = top_raw_score.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CAP);
    if aux_chars > DETAIL_LENGTH_THRESHOLD {
        c = (c + DETAIL_BONUS).min(DETAIL_BONUS_CAP);
    }
    c
}
