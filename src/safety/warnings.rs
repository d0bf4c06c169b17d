//! Emergency warning prioritization.
//!
//! The top-ranked conditions each carry their own emergency warning
//! phrases. Shown raw, the same risk would surface under several wordings
//! depending on which conditions rank high, so collected phrases are
//! replaced by canonical messages from a fixed, priority-ordered rule
//! table: the most life-threatening categories surface first when many
//! apply.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ScoredCondition;

/// Only this many top-ranked conditions contribute warnings.
const TOP_CONDITIONS_CONSIDERED: usize = 5;
/// Upper bound on emitted warnings.
pub const MAX_WARNINGS: usize = 5;
/// When no rule matches, at most this many raw phrases pass through.
const RAW_FALLBACK_LIMIT: usize = 4;

/// A canonicalization rule: any collected warning matching `pattern`
/// emits `message` instead of the raw phrase.
struct WarningRule {
    pattern: Regex,
    message: &'static str,
}

/// Priority order is the table order; do not reorder without intent.
static PRIORITY_RULES: LazyLock<Vec<WarningRule>> = LazyLock::new(|| {
    vec![
        rule(
            r"(?i)difficulty breathing|shortness of breath|severe difficulty breathing",
            "Difficulty breathing or severe shortness of breath",
        ),
        rule(r"(?i)chest pain|chest pressure", "Chest pain or pressure"),
        rule(
            r"(?i)confusion|unable to rouse|altered mental state|new confusion",
            "New confusion, severe drowsiness, or difficulty waking",
        ),
        rule(
            r"(?i)blue lips|blue face|cyanosis",
            "Blue lips or face (signs of poor oxygenation)",
        ),
        rule(
            r"(?i)severe dehydration|no urination|extreme thirst",
            "Signs of severe dehydration (very little/no urination, extreme dizziness)",
        ),
        rule(
            r"(?i)blood in stool|vomit blood|coughing up blood",
            "Vomiting blood or blood in stool",
        ),
        rule(
            r"(?i)high fever|persistent high fever|>39",
            "Very high or persistent fever (>39°C)",
        ),
        rule(
            r"(?i)loss of consciousness|unconscious|unable to rouse",
            "Loss of consciousness or unresponsiveness",
        ),
        rule(r"(?i)severe abdominal pain", "Severe or worsening abdominal pain"),
        rule(
            r"(?i)difficulty swallowing|drooling",
            "Unable to swallow or drooling (possible airway risk)",
        ),
    ]
});

/// Shown when the top conditions carry no warnings at all.
static GENERIC_WARNINGS: &[&str] = &[
    "Difficulty breathing or shortness of breath",
    "Chest pain or pressure",
    "Very high or persistent fever (>39°C)",
    "Severe weakness or fainting",
];

fn rule(pattern: &str, message: &'static str) -> WarningRule {
    WarningRule {
        pattern: Regex::new(pattern).expect("invalid warning rule pattern"),
        message,
    }
}

/// Aggregate, canonicalize and rank warnings from the top conditions.
/// Always returns between 1 and [`MAX_WARNINGS`] distinct strings.
pub fn prioritize(ranked: &[ScoredCondition]) -> Vec<String> {
    let collected = collect_warnings(ranked);

    let mut selected: Vec<String> = Vec::new();
    for rule in PRIORITY_RULES.iter() {
        if selected.len() >= MAX_WARNINGS {
            break;
        }
        if collected.iter().any(|w| rule.pattern.is_match(w)) {
            tracing::debug!(message = rule.message, "warning rule matched");
            selected.push(rule.message.to_string());
        }
    }

    if selected.is_empty() {
        if collected.is_empty() {
            tracing::warn!("no emergency warnings collected; using generic safety list");
            selected.extend(GENERIC_WARNINGS.iter().map(|w| w.to_string()));
        } else {
            selected.extend(collected.into_iter().take(RAW_FALLBACK_LIMIT));
        }
    }

    selected.dedup();
    selected.truncate(MAX_WARNINGS);
    selected
}

/// Every warning phrase across the top conditions, whitespace-normalized,
/// deduplicated, first-seen order preserved.
fn collect_warnings(ranked: &[ScoredCondition]) -> Vec<String> {
    let mut collected: Vec<String> = Vec::new();
    for condition in ranked.iter().take(TOP_CONDITIONS_CONSIDERED) {
        for warning in condition.emergency_warnings {
            let norm = warning.split_whitespace().collect::<Vec<_>>().join(" ");
            if !collected.contains(&norm) {
                collected.push(norm);
            }
        }
    }
    collected
}
