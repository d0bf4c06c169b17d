//! Input gate.
//!
//! The engine itself accepts any text and any profile; this module is the
//! caller-side contract. Text is capped then trimmed rather than
//! rejected, out-of-range profile fields are dropped individually, and
//! the single hard requirement (a non-empty symptoms string) is
//! enforced here so the engine never has to.

use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::models::{AnalysisInput, PatientProfile, Sex};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("symptoms are required and must be non-empty")]
    EmptySymptoms,
}

/// Profile as it arrives from the outside: numbers unchecked, sex as free
/// text. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPatientProfile {
    pub age: Option<f64>,
    pub sex: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

/// Cap to `max_chars`, then trim surrounding whitespace.
pub fn sanitize_text(raw: &str, max_chars: usize) -> String {
    let capped: String = raw.chars().take(max_chars).collect();
    capped.trim().to_string()
}

/// Per-field validation. A field outside its documented range is dropped,
/// not an error; a profile with no surviving field is no profile.
pub fn validate_profile(raw: &RawPatientProfile) -> Option<PatientProfile> {
    let profile = PatientProfile {
        age: raw
            .age
            .filter(|a| (0.0..=150.0).contains(a))
            .map(|a| a as u32),
        sex: raw.sex.as_deref().and_then(Sex::parse),
        weight_kg: raw.weight_kg.filter(|w| *w > 0.0 && *w <= 500.0),
        height_cm: raw.height_cm.filter(|h| *h > 50.0 && *h <= 250.0),
    };
    if profile.is_empty() {
        None
    } else {
        Some(profile)
    }
}

/// Build a sanitized [`AnalysisInput`], rejecting only empty symptoms.
pub fn prepare(
    symptoms: &str,
    additional_info: &str,
    other_relevant_info: &str,
    profile: Option<&RawPatientProfile>,
) -> Result<AnalysisInput, InputError> {
    let symptoms = sanitize_text(symptoms, config::MAX_SYMPTOMS_CHARS);
    if symptoms.is_empty() {
        return Err(InputError::EmptySymptoms);
    }

    Ok(AnalysisInput {
        symptoms,
        additional_info: sanitize_text(additional_info, config::MAX_ADDITIONAL_INFO_CHARS),
        other_relevant_info: sanitize_text(
            other_relevant_info,
            config::MAX_OTHER_INFO_CHARS,
        ),
        profile: profile.and_then(validate_profile),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_caps_then_trims() {
        assert_eq!(sanitize_text("  hello  ", 100), "hello");
        // The cap applies before the trim, as the upstream API did it.
        assert_eq!(sanitize_text("abcdef", 3), "abc");
        assert_eq!(sanitize_text("ab    ", 4), "ab");
    }

    #[test]
    fn sanitize_counts_characters_not_bytes() {
        assert_eq!(sanitize_text("°C°C", 2), "°C");
    }

    #[test]
    fn prepare_rejects_empty_symptoms() {
        assert_eq!(
            prepare("", "info", "", None).unwrap_err(),
            InputError::EmptySymptoms
        );
        assert_eq!(
            prepare("   ", "", "", None).unwrap_err(),
            InputError::EmptySymptoms
        );
    }

    #[test]
    fn prepare_passes_context_through_sanitized() {
        let input = prepare("fever", "  2 days  ", " none ", None).unwrap();
        assert_eq!(input.symptoms, "fever");
        assert_eq!(input.additional_info, "2 days");
        assert_eq!(input.other_relevant_info, "none");
        assert!(input.profile.is_none());
    }

    #[test]
    fn profile_fields_validate_independently() {
        let raw = RawPatientProfile {
            age: Some(200.0),           // out of range, dropped
            sex: Some("female".into()), // valid
            weight_kg: Some(70.0),      // valid
            height_cm: Some(20.0),      // out of range, dropped
        };
        let p = validate_profile(&raw).unwrap();
        assert_eq!(p.age, None);
        assert_eq!(p.sex, Some(Sex::Female));
        assert_eq!(p.weight_kg, Some(70.0));
        assert_eq!(p.height_cm, None);
    }

    #[test]
    fn profile_boundaries() {
        let ok = RawPatientProfile {
            age: Some(150.0),
            sex: None,
            weight_kg: Some(500.0),
            height_cm: Some(250.0),
        };
        let p = validate_profile(&ok).unwrap();
        assert_eq!(p.age, Some(150));
        assert_eq!(p.weight_kg, Some(500.0));
        assert_eq!(p.height_cm, Some(250.0));

        let bad = RawPatientProfile {
            age: Some(-1.0),
            sex: Some("attack helicopter".into()),
            weight_kg: Some(0.0),
            height_cm: Some(50.0), // exclusive lower bound
        };
        assert!(validate_profile(&bad).is_none());
    }

    #[test]
    fn all_invalid_profile_is_treated_as_absent() {
        let input = prepare(
            "fever",
            "",
            "",
            Some(&RawPatientProfile {
                age: Some(999.0),
                sex: Some("x".into()),
                weight_kg: None,
                height_cm: None,
            }),
        )
        .unwrap();
        assert!(input.profile.is_none());
    }

    #[test]
    fn raw_profile_deserializes_wire_names_leniently() {
        let raw: RawPatientProfile = serde_json::from_str(
            r#"{"age":30,"sex":"FEMALE","weightKg":70,"heightCm":175,"extra":"ignored"}"#,
        )
        .unwrap();
        let p = validate_profile(&raw).unwrap();
        assert_eq!(p.sex, Some(Sex::Female));
        assert_eq!(p.age, Some(30));
    }
}
