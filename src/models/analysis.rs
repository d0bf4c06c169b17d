use serde::Serialize;

use super::profile::PatientProfile;

/// Sanitized input for one analysis. The engine never retains it past the
/// call; profile lifetime equals request lifetime.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub symptoms: String,
    pub additional_info: String,
    pub other_relevant_info: String,
    pub profile: Option<PatientProfile>,
}

impl AnalysisInput {
    pub fn new(symptoms: impl Into<String>) -> Self {
        AnalysisInput {
            symptoms: symptoms.into(),
            additional_info: String::new(),
            other_relevant_info: String::new(),
            profile: None,
        }
    }

    pub fn with_context(
        mut self,
        additional_info: impl Into<String>,
        other_relevant_info: impl Into<String>,
    ) -> Self {
        self.additional_info = additional_info.into();
        self.other_relevant_info = other_relevant_info.into();
        self
    }

    pub fn with_profile(mut self, profile: PatientProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}

/// One ranked candidate condition, created per request and discarded after
/// response assembly. Serialized field names match the original wire shape
/// consumed by the display layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCondition {
    pub condition: &'static str,
    /// Base score plus match bonuses, capped at 0.95. Engine-internal;
    /// the wire carries only the normalized percentage.
    #[serde(skip)]
    pub raw_score: f64,
    /// Share of the total raw score, rounded independently per condition.
    pub percentage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_time: Option<&'static str>,
    pub precautions: &'static [&'static str],
    pub emergency_warnings: &'static [&'static str],
}

/// The engine's sole output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// The structured six-section advisory, stable and deterministic for
    /// a given input.
    pub text: String,
    /// Overall certainty of the top-ranked result, in [0.35, 0.97].
    pub confidence: f64,
    /// Every knowledge-base condition, sorted by descending percentage.
    pub conditions: Vec<ScoredCondition>,
}
