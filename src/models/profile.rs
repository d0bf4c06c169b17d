use serde::{Deserialize, Serialize};

/// Patient sex as accepted by the advisor. Anything the upstream form
/// sends outside these three values is treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// Lenient parse for free text coming off a form field.
    pub fn parse(raw: &str) -> Option<Sex> {
        match raw.trim().to_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            "other" => Some(Sex::Other),
            _ => None,
        }
    }
}

/// Optional patient attributes for one request. Every field is optional;
/// a missing field simply skips its advisor rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientProfile {
    /// Years, 0-150.
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    /// Kilograms, >0-500.
    pub weight_kg: Option<f64>,
    /// Centimeters, 50-250.
    pub height_cm: Option<f64>,
}

impl PatientProfile {
    /// True when no field survived validation; such a profile is treated
    /// the same as no profile at all.
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.sex.is_none()
            && self.weight_kg.is_none()
            && self.height_cm.is_none()
    }
}
