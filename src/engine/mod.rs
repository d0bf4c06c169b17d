//! The analysis engine.
//!
//! One synchronous pass: match keywords, score every condition, normalize
//! into a ranked percentage distribution, then hand the ranking to the
//! warning prioritizer and the profile advisor before composing the final
//! advisory. Pure computation end to end; the only shared data is the
//! read-only knowledge base.

pub mod matcher;
pub mod normalize;
pub mod scorer;

use crate::compose;
use crate::knowledge;
use crate::models::{AnalysisInput, AnalysisResult, ConditionRecord, ScoredCondition};
use crate::safety::{advisor, warnings};

/// The symptom analysis engine. Cheap to construct, `Copy`-free but
/// stateless; a single instance can serve concurrent callers.
pub struct SymptomAnalyzer {
    knowledge: &'static [ConditionRecord],
}

impl SymptomAnalyzer {
    /// Analyzer over the bundled knowledge base.
    pub fn new() -> Self {
        SymptomAnalyzer {
            knowledge: knowledge::conditions(),
        }
    }

    /// Analyzer over a caller-supplied table. The table must outlive the
    /// process, which keeps results free to borrow record data.
    pub fn with_knowledge(knowledge: &'static [ConditionRecord]) -> Self {
        SymptomAnalyzer { knowledge }
    }

    /// Run one analysis. Never fails: text with no keyword matches still
    /// scores every condition from its base score, and a missing or
    /// partial profile just skips the corresponding advisor rules.
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let symptoms_lower = input.symptoms.to_lowercase();
        let aux_lower = format!(
            "{} {}",
            input.additional_info, input.other_relevant_info
        )
        .to_lowercase();
        let full_lower = format!("{symptoms_lower} {aux_lower}");

        let mut scored: Vec<ScoredCondition> = Vec::with_capacity(self.knowledge.len());
        for record in self.knowledge {
            let matched = matcher::matched_keywords(record, &full_lower);
            let raw_score =
                scorer::score_condition(record, matched.len(), &symptoms_lower, &aux_lower);
            scored.push(ScoredCondition {
                condition: record.name,
                raw_score,
                percentage: 0,
                transmission: record.transmission,
                recovery_time: record.recovery_time,
                precautions: record.precautions,
                emergency_warnings: record.emergency_warnings,
            });
        }

        let ranked = normalize::rank(scored);
        let top_raw = ranked.first().map(|c| c.raw_score).unwrap_or(0.0);
        let confidence = normalize::confidence(top_raw, aux_lower.chars().count());

        let warnings = warnings::prioritize(&ranked);
        let assessment = advisor::assess(input.profile.as_ref());
        let matched_symptoms = matcher::matched_symptom_set(self.knowledge, &full_lower);

        let text = compose::compose(input, &matched_symptoms, &ranked, &warnings, &assessment);

        // Summary only; raw symptom text stays out of the logs.
        tracing::debug!(
            top_condition = ranked.first().map(|c| c.condition).unwrap_or("none"),
            confidence,
            matched = matched_symptoms.len(),
            warnings = warnings.len(),
            safety_tag = ?assessment.tag,
            "analysis complete"
        );

        AnalysisResult {
            text,
            confidence,
            conditions: ranked,
        }
    }
}

impl Default for SymptomAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PatientProfile, Sex};
    use crate::safety::warnings::MAX_WARNINGS;

    fn analyze(input: &AnalysisInput) -> AnalysisResult {
        SymptomAnalyzer::new().analyze(input)
    }

    // ── Core properties ─────────────────────────────────────────

    #[test]
    fn identical_inputs_produce_identical_results() {
        let input = AnalysisInput::new("fever, cough and a headache")
            .with_context("temperature 38.5°C since Monday", "asthma in the family")
            .with_profile(PatientProfile {
                age: Some(34),
                sex: Some(Sex::Female),
                weight_kg: Some(62.0),
                height_cm: Some(168.0),
            });
        let a = analyze(&input);
        let b = analyze(&input);
        assert_eq!(a.text, b.text);
        assert_eq!(a.confidence, b.confidence);
        let pa: Vec<_> = a.conditions.iter().map(|c| (c.condition, c.percentage)).collect();
        let pb: Vec<_> = b.conditions.iter().map(|c| (c.condition, c.percentage)).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn every_condition_is_always_scored() {
        let no_match = analyze(&AnalysisInput::new("zzz qqq xxx"));
        assert_eq!(no_match.conditions.len(), knowledge::conditions().len());
        let with_match = analyze(&AnalysisInput::new("fever"));
        assert_eq!(with_match.conditions.len(), knowledge::conditions().len());
    }

    #[test]
    fn raw_scores_stay_within_base_and_cap() {
        let input = AnalysisInput::new(
            "fever cough body ache fatigue chills breathlessness headache nausea vomiting \
             diarrhea sore throat",
        )
        .with_context("temperature 40°c for a week and a month", "");
        let result = analyze(&input);
        for c in &result.conditions {
            let record = knowledge::find(c.condition).unwrap();
            assert!(c.raw_score >= record.base_score, "{}", c.condition);
            assert!(c.raw_score <= scorer::SCORE_CAP, "{}", c.condition);
        }
    }

    #[test]
    fn confidence_always_within_bounds() {
        let inputs = [
            AnalysisInput::new("zzz"),
            AnalysisInput::new("fever, cough, body ache, fatigue, chills"),
            AnalysisInput::new("headache").with_context(
                "a very long description of everything that happened this week",
                "plus even more detail",
            ),
        ];
        for input in &inputs {
            let r = analyze(input);
            assert!(
                (normalize::CONFIDENCE_FLOOR..=normalize::DETAIL_BONUS_CAP)
                    .contains(&r.confidence),
                "confidence {} out of bounds",
                r.confidence
            );
        }
    }

    #[test]
    fn conditions_sorted_by_descending_percentage() {
        let result = analyze(&AnalysisInput::new("fever and cough with fatigue"));
        for pair in result.conditions.windows(2) {
            assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn ties_keep_declaration_order() {
        // With no matches at all, equal base scores tie; Allergies (0.22)
        // is declared before Food Poisoning (0.22) and Strep Throat (0.22).
        let result = analyze(&AnalysisInput::new("zzz"));
        let order: Vec<_> = result
            .conditions
            .iter()
            .filter(|c| {
                ["Allergies", "Food Poisoning", "Strep Throat"].contains(&c.condition)
            })
            .map(|c| c.condition)
            .collect();
        assert_eq!(order, vec!["Allergies", "Food Poisoning", "Strep Throat"]);
    }

    #[test]
    fn warning_list_bounded_and_distinct() {
        for symptoms in ["zzz", "fever", "headache", "chest pain and breathlessness"] {
            let result = analyze(&AnalysisInput::new(symptoms));
            let count = result.text.match_indices("\n- ").count();
            assert!(count > 0, "no bullets at all for {symptoms}");
            // Bound re-checked at the source for clarity.
            let w = crate::safety::warnings::prioritize(&result.conditions);
            assert!((1..=MAX_WARNINGS).contains(&w.len()));
            let mut dedup = w.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), w.len());
        }
    }

    // ── Scenarios ───────────────────────────────────────────────

    #[test]
    fn classic_flu_ranks_flu_at_the_top() {
        let input = AnalysisInput::new("fever, cough, body ache, fatigue, chills");
        let result = analyze(&input);

        assert_eq!(result.conditions[0].condition, "Flu (Influenza)");
        assert_eq!(result.conditions[0].raw_score, scorer::SCORE_CAP);
        let top3: Vec<_> = result.conditions[..3].iter().map(|c| c.condition).collect();
        assert!(top3.contains(&"COVID-19"));
        assert!(result.confidence >= normalize::CONFIDENCE_FLOOR);

        // A breathing-related canonical warning must surface first.
        assert!(result
            .text
            .contains("- Difficulty breathing or severe shortness of breath"));
    }

    #[test]
    fn bare_headache_with_empty_context() {
        let input = AnalysisInput::new("headache").with_context("", "");
        let result = analyze(&input);

        assert_eq!(result.conditions.len(), knowledge::conditions().len());
        // Top raw score is Tension Headache at 0.25 + 0.12 = 0.37, above
        // the 0.35 floor; the context is far too short for the bonus.
        assert_eq!(result.conditions[0].condition, "Tension Headache");
        assert!((result.confidence - 0.37).abs() < 1e-12);
    }

    #[test]
    fn chronic_signal_boosts_allergies() {
        let without = analyze(&AnalysisInput::new("runny nose, sneezing, itchy eyes"));
        let with = analyze(
            &AnalysisInput::new("runny nose, sneezing, itchy eyes")
                .with_context("ongoing for 2 months", ""),
        );

        let raw = |r: &AnalysisResult| {
            r.conditions
                .iter()
                .find(|c| c.condition == "Allergies")
                .unwrap()
                .raw_score
        };
        assert!(
            (raw(&with) - raw(&without) - scorer::CHRONIC_CONTEXT_BONUS).abs() < 1e-12
        );
        assert_eq!(with.conditions[0].condition, "Allergies");
    }

    #[test]
    fn fever_with_measured_temperature_boosts_febrile_conditions() {
        let without = analyze(&AnalysisInput::new("fever and cough"));
        let with = analyze(
            &AnalysisInput::new("fever and cough").with_context("temperature 39°C", ""),
        );
        let flu_raw = |r: &AnalysisResult| {
            r.conditions
                .iter()
                .find(|c| c.condition == "Flu (Influenza)")
                .unwrap()
                .raw_score
        };
        assert!(flu_raw(&with) > flu_raw(&without));
    }

    #[test]
    fn long_context_earns_the_detail_bonus() {
        let short = analyze(&AnalysisInput::new("headache").with_context("2 days", ""));
        let long = analyze(&AnalysisInput::new("headache").with_context(
            "started two days ago after a long drive, worse in the evening",
            "",
        ));
        assert!((long.confidence - short.confidence - normalize::DETAIL_BONUS).abs() < 1e-12);
    }

    // ── Profile integration ─────────────────────────────────────

    #[test]
    fn bmi_appears_in_summary() {
        let input = AnalysisInput::new("headache").with_profile(PatientProfile {
            age: None,
            sex: None,
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
        });
        let result = analyze(&input);
        assert!(result.text.contains("BMI: 22.9 (normal weight)."));
    }

    #[test]
    fn infant_profile_forces_pediatric_tag_regardless_of_symptoms() {
        for symptoms in ["fever", "runny nose", "zzz"] {
            let input = AnalysisInput::new(symptoms).with_profile(PatientProfile {
                age: Some(1),
                ..Default::default()
            });
            let result = analyze(&input);
            assert!(
                result
                    .text
                    .contains("Safe to follow: Not safe to self-manage"),
                "missing pediatric tag for {symptoms}"
            );
        }
    }

    #[test]
    fn profile_notes_reach_the_self_care_section() {
        let input = AnalysisInput::new("fever").with_profile(PatientProfile {
            age: Some(70),
            ..Default::default()
        });
        let result = analyze(&input);
        assert!(result
            .text
            .contains("Important Safety Notes based on provided profile:"));
        assert!(result.text.contains("Age 65 or older"));
    }

    // ── Output shape ────────────────────────────────────────────

    #[test]
    fn text_has_the_golden_shape() {
        let result = analyze(&AnalysisInput::new("headache"));
        assert!(result
            .text
            .starts_with("1. Problem Summary\n\nBased on your message, you reported: headache.\n\n"));
        assert!(result.text.contains("\nSafe to follow: "));
        assert!(result.text.ends_with(
            "If you are concerned or if emergency warning signs appear, seek immediate \
             medical attention."
        ));
    }

    #[test]
    fn result_serializes_the_wire_contract() {
        let result = analyze(&AnalysisInput::new("fever"));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["text"].is_string());
        assert!(json["confidence"].is_number());
        let first = &json["conditions"][0];
        assert!(first["condition"].is_string());
        assert!(first["percentage"].is_number());
        assert!(first["precautions"].is_array());
    }

    #[test]
    fn custom_knowledge_base_is_honored() {
        static TINY: &[ConditionRecord] = &[ConditionRecord {
            name: "Test Sniffles",
            keywords: &["sniffle"],
            base_score: 0.4,
            transmission: None,
            recovery_time: None,
            precautions: &["rest"],
            emergency_warnings: &["severe abdominal pain"],
            chronic: false,
        }];
        let analyzer = SymptomAnalyzer::with_knowledge(TINY);
        let result = analyzer.analyze(&AnalysisInput::new("a sniffle"));
        assert_eq!(result.conditions.len(), 1);
        assert_eq!(result.conditions[0].condition, "Test Sniffles");
        assert_eq!(result.conditions[0].percentage, 100);
        assert!(result.text.contains("Severe or worsening abdominal pain"));
    }
}
