//! Patient safety advisor.
//!
//! Pure function of the optional profile: each rule that applies appends
//! one caution note, and the combination selects a single safety tag.
//! A missing profile (or missing field) skips the corresponding rules
//! rather than failing.

use serde::Serialize;

use crate::models::{PatientProfile, Sex};

/// BMI below this is underweight.
const BMI_UNDERWEIGHT: f64 = 18.5;
/// BMI at or above this is overweight.
const BMI_OVERWEIGHT: f64 = 25.0;
/// BMI at or above this is obese.
const BMI_OBESE: f64 = 30.0;

/// Childbearing age window for the pregnancy caution.
const PREGNANCY_AGE_MIN: u32 = 15;
const PREGNANCY_AGE_MAX: u32 = 50;

/// How cautiously the user should treat self-care advice.
/// Ordered here from most to least restrictive; selection stops at the
/// first applicable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyTag {
    /// Infants: self-management is off the table.
    SeekPediatricAdvice,
    /// Age 65+: professional input before self-managing.
    CautionElderly,
    /// Possible pregnancy changes what is safe to take.
    CheckPregnancy,
    /// BMI extremes raise specific risks.
    CautionBmi,
    /// Some other note applied.
    Caution,
    /// No profile concerns.
    LikelySafe,
}

impl SafetyTag {
    /// The fixed user-facing line rendered beneath the problem summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyTag::SeekPediatricAdvice => {
                "Not safe to self-manage — seek pediatric/urgent medical advice."
            }
            SafetyTag::CautionElderly => {
                "Use caution — consider contacting a healthcare professional before self-managing."
            }
            SafetyTag::CheckPregnancy => {
                "Check with a healthcare professional before taking medications or specific \
                 treatments (possible pregnancy)."
            }
            SafetyTag::CautionBmi => {
                "Use caution — certain conditions (BMI extremes) may increase risk; contact \
                 your provider if concerned."
            }
            SafetyTag::Caution => {
                "Use caution — follow self-care and contact a provider if symptoms worsen."
            }
            SafetyTag::LikelySafe => "Likely safe to follow general self-care advice.",
        }
    }
}

/// Body mass index, rounded to one decimal, with its display category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub category: &'static str,
}

/// BMI from weight and height when both are present and positive.
pub fn bmi(profile: &PatientProfile) -> Option<Bmi> {
    let weight = profile.weight_kg.filter(|w| *w > 0.0)?;
    let height_cm = profile.height_cm.filter(|h| *h > 0.0)?;
    let height_m = height_cm / 100.0;
    let value = (weight / (height_m * height_m) * 10.0).round() / 10.0;
    let category = if value < BMI_UNDERWEIGHT {
        "underweight"
    } else if value >= BMI_OBESE {
        "obese"
    } else if value >= BMI_OVERWEIGHT {
        "overweight"
    } else {
        "normal weight"
    };
    Some(Bmi { value, category })
}

/// What the profile contributes to the response: caution notes for the
/// self-care section, the safety tag, and the BMI for the summary.
#[derive(Debug, Clone)]
pub struct ProfileAssessment {
    pub notes: Vec<String>,
    pub tag: SafetyTag,
    pub bmi: Option<Bmi>,
}

impl ProfileAssessment {
    fn absent() -> Self {
        ProfileAssessment {
            notes: Vec::new(),
            tag: SafetyTag::LikelySafe,
            bmi: None,
        }
    }
}

/// Evaluate every applicable profile rule. Rules are independently
/// additive to the notes list; the tag is selected afterwards by
/// priority.
pub fn assess(profile: Option<&PatientProfile>) -> ProfileAssessment {
    let Some(profile) = profile else {
        return ProfileAssessment::absent();
    };

    let mut notes: Vec<String> = Vec::new();
    let mut bmi_extreme = false;
    let mut pregnancy_possible = false;

    if let Some(age) = profile.age {
        if age < 2 {
            notes.push(
                "Age under 2 years: many OTC medicines are NOT recommended for infants; seek \
                 pediatric advice before giving medication."
                    .to_string(),
            );
        } else if age < 12 {
            notes.push(
                "Age under 12 years: avoid aspirin; check pediatric dosing for any medication."
                    .to_string(),
            );
        } else if age >= 65 {
            notes.push(
                "Age 65 or older: higher risk for complications; avoid dehydration and check \
                 with provider before new medications."
                    .to_string(),
            );
        }
    }

    let bmi = bmi(profile);
    if let Some(bmi) = bmi {
        if bmi.value < BMI_UNDERWEIGHT {
            notes.push(format!(
                "BMI {} (underweight): be cautious with dehydration and reduced reserves.",
                bmi.value
            ));
            bmi_extreme = true;
        }
        if bmi.value >= BMI_OBESE {
            notes.push(format!(
                "BMI {} (obese): higher risk of respiratory complications; seek provider \
                 advice if breathing issues arise.",
                bmi.value
            ));
            bmi_extreme = true;
        }
    }

    if profile.sex == Some(Sex::Female) {
        if let Some(age) = profile.age {
            if (PREGNANCY_AGE_MIN..=PREGNANCY_AGE_MAX).contains(&age) {
                notes.push(
                    "If there is any chance of pregnancy, avoid certain medications and seek \
                     pregnancy-safe advice."
                        .to_string(),
                );
                pregnancy_possible = true;
            }
        }
    }

    let tag = select_tag(profile, &notes, pregnancy_possible, bmi_extreme);
    ProfileAssessment { notes, tag, bmi }
}

/// First match wins, most restrictive first.
fn select_tag(
    profile: &PatientProfile,
    notes: &[String],
    pregnancy_possible: bool,
    bmi_extreme: bool,
) -> SafetyTag {
    if profile.age.is_some_and(|a| a < 2) {
        SafetyTag::SeekPediatricAdvice
    } else if profile.age.is_some_and(|a| a >= 65) {
        SafetyTag::CautionElderly
    } else if pregnancy_possible {
        SafetyTag::CheckPregnancy
    } else if bmi_extreme {
        SafetyTag::CautionBmi
    } else if !notes.is_empty() {
        SafetyTag::Caution
    } else {
        SafetyTag::LikelySafe
    }
}
