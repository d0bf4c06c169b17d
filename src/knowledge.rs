//! The condition knowledge base.
//!
//! A fixed table of common, self-care-relevant conditions with the
//! keywords, prior scores and guidance text the rest of the engine works
//! from. Loaded once as static data and shared by reference; there is no
//! runtime mutation API.

use crate::models::ConditionRecord;

/// Declaration order matters: it is the tie-break for equal scores.
static CONDITIONS: &[ConditionRecord] = &[
    ConditionRecord {
        name: "Common Cold",
        keywords: &["cold", "runny nose", "sneezing", "sore throat"],
        base_score: 0.25,
        transmission: Some(
            "Airborne droplets from coughing/sneezing, direct contact with infected nasal \
             secretions, or contaminated surfaces",
        ),
        recovery_time: Some("7-14 days with self-care"),
        precautions: &[
            "Wash hands frequently",
            "Avoid touching face",
            "Cover cough/sneeze with tissue",
            "Stay home when sick",
            "Clean frequently touched surfaces",
        ],
        emergency_warnings: &[
            "Severe difficulty breathing",
            "Persistent high fever (>39°C)",
            "Severe chest pain",
            "Confusion or severe lethargy",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Flu (Influenza)",
        keywords: &["fever", "cough", "body ache", "fatigue", "chills"],
        base_score: 0.30,
        transmission: Some(
            "Respiratory droplets from coughing/sneezing, highly contagious 1 day before to \
             5 days after symptom onset",
        ),
        recovery_time: Some("1-2 weeks with rest and fluids, up to 3 weeks for full recovery"),
        precautions: &[
            "Get vaccinated annually",
            "Wash hands regularly",
            "Avoid close contact with infected people",
            "Wear mask when sick",
            "Stay home for 5+ days after fever onset",
        ],
        emergency_warnings: &[
            "Difficulty breathing or shortness of breath",
            "Chest pain or pressure",
            "Severe confusion or altered mental state",
            "Blue lips or face",
            "Persistent high fever >39.5°C",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "COVID-19",
        keywords: &["fever", "cough", "breathlessness", "loss of appetite", "fatigue"],
        base_score: 0.20,
        transmission: Some(
            "Airborne transmission, respiratory droplets up to 2 meters, surfaces (less \
             common), most contagious first 5-7 days",
        ),
        recovery_time: Some("2-4 weeks mild, 4-6 weeks moderate, 6-12 weeks severe cases"),
        precautions: &[
            "Get vaccinated/boosted",
            "Improve ventilation",
            "Wear N95 mask in crowded settings",
            "Test if symptomatic",
            "Isolate 5+ days if positive",
            "Hand hygiene essential",
        ],
        emergency_warnings: &[
            "Severe difficulty breathing",
            "Persistent chest pain",
            "New confusion",
            "Inability to rouse",
            "Blue lips/face",
            "Severe persistent dizziness",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Bronchitis",
        keywords: &["cough", "breathlessness", "chest pain", "phlegm"],
        base_score: 0.18,
        transmission: Some("Viral: airborne droplets; Bacterial: similar respiratory routes"),
        recovery_time: Some("2-3 weeks acute, chronic cases may last 6-8 weeks"),
        precautions: &[
            "Avoid air pollutants and smoke",
            "Use humidifier",
            "Stay hydrated",
            "Get flu/pneumonia vaccines",
            "Avoid respiratory irritants",
        ],
        emergency_warnings: &[
            "Severe difficulty breathing or shortness of breath",
            "Coughing up blood",
            "Chest pain with breathing",
            "High fever >39°C persistent",
            "Signs of pneumonia",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Asthma",
        keywords: &["breathlessness", "cough", "chest pain", "wheezing"],
        base_score: 0.15,
        transmission: Some("Not contagious; triggered by allergens, exercise, cold air, stress"),
        recovery_time: Some(
            "Chronic condition, acute attacks resolve in hours to days with treatment",
        ),
        precautions: &[
            "Use rescue inhaler as prescribed",
            "Avoid known triggers",
            "Keep inhalers accessible",
            "Exercise in appropriate conditions",
            "Monitor air quality",
            "Keep doctor updated",
        ],
        emergency_warnings: &[
            "Severe difficulty breathing/gasping",
            "Inability to speak full sentences",
            "Extreme anxiety about breathing",
            "Peak flow <50% normal",
            "No improvement with inhaler after 15-20 min",
        ],
        chronic: true,
    },
    ConditionRecord {
        name: "Allergies",
        keywords: &["runny nose", "sneezing", "itchy eyes", "sore throat"],
        base_score: 0.22,
        transmission: Some(
            "Not contagious; triggered by allergens (pollen, dust, pets, food)",
        ),
        recovery_time: Some("Seasonal (2-3 months), perennial management ongoing"),
        precautions: &[
            "Identify and avoid allergen triggers",
            "Use antihistamines as needed",
            "Keep windows closed during high pollen",
            "Shower after outdoor activities",
            "Clean bedding weekly",
        ],
        emergency_warnings: &[
            "Anaphylaxis signs (swelling face/throat, difficulty breathing)",
            "Severe throat swelling affecting breathing",
            "Loss of consciousness",
            "Severe reaction to new allergen",
        ],
        chronic: true,
    },
    ConditionRecord {
        name: "Migraine",
        keywords: &["headache", "nausea", "vomiting", "sensitivity to light"],
        base_score: 0.20,
        transmission: Some(
            "Not contagious; triggered by stress, hormones, foods, light, sleep changes",
        ),
        recovery_time: Some("4-72 hours acute episode, recovery time depends on treatment"),
        precautions: &[
            "Identify personal triggers",
            "Manage stress",
            "Regular sleep schedule",
            "Stay hydrated",
            "Reduce caffeine gradually",
            "Avoid bright screens before bed",
        ],
        emergency_warnings: &[
            "Sudden worst headache of life",
            "Headache with fever and stiff neck",
            "Headache with confusion or vision loss",
            "New pattern of headache",
            "Weakness/numbness with headache",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Tension Headache",
        keywords: &["headache", "stress", "neck pain"],
        base_score: 0.25,
        transmission: Some("Not contagious; triggered by stress, poor posture, muscle tension"),
        recovery_time: Some("30 minutes to several hours with rest/medication"),
        precautions: &[
            "Manage stress (yoga, meditation)",
            "Correct posture regularly",
            "Take frequent breaks from screens",
            "Neck stretches and exercises",
            "Adequate sleep",
            "Regular exercise",
        ],
        emergency_warnings: &[
            "Sudden severe headache",
            "Headache with fever",
            "Headache with stiff neck",
            "Persistent headache with vision changes",
            "Headache following head injury",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Gastroenteritis",
        keywords: &["nausea", "vomiting", "diarrhea", "abdominal pain", "fever"],
        base_score: 0.28,
        transmission: Some(
            "Viral/Bacterial: fecal-oral route, contaminated food/water, person-to-person \
             contact",
        ),
        recovery_time: Some("1-7 days viral, 5-7 days bacterial, 1-3 weeks parasitic"),
        precautions: &[
            "Wash hands thoroughly after toilet",
            "Food safety practices",
            "Clean kitchen/bathroom surfaces",
            "Separate personal items",
            "Stay home 48 hours after last symptom",
            "Boil water if contaminated",
        ],
        emergency_warnings: &[
            "Severe dehydration signs (extreme thirst, dark urine, dizziness)",
            "Blood in stool/vomit",
            "Severe abdominal pain",
            "High fever >39°C",
            "Symptoms lasting >7 days",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Food Poisoning",
        keywords: &["nausea", "vomiting", "diarrhea", "abdominal pain"],
        base_score: 0.22,
        transmission: Some("Contaminated food/water, bacteria (Salmonella, E.coli), toxins"),
        recovery_time: Some("1-3 days mild, up to 1 week severe cases"),
        precautions: &[
            "Proper food storage (refrigerate <4°C)",
            "Cook meat thoroughly",
            "Wash produce",
            "Avoid unpasteurized dairy",
            "Check expiration dates",
            "Avoid cross-contamination",
        ],
        emergency_warnings: &[
            "Severe dehydration",
            "Blood in vomit/stool",
            "Signs of organ failure",
            "Symptoms >3 days",
            "Severe abdominal pain",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Dehydration",
        keywords: &["headache", "fatigue", "dizziness", "dry mouth"],
        base_score: 0.18,
        transmission: Some(
            "Not contagious; caused by inadequate fluid intake or excessive loss",
        ),
        recovery_time: Some("30 minutes to 2 hours with fluid replacement"),
        precautions: &[
            "Drink water regularly (8-10 cups daily)",
            "Monitor urine color",
            "Increase fluids during exercise/illness",
            "Electrolyte drinks for severe loss",
            "Limit caffeine/alcohol",
        ],
        emergency_warnings: &[
            "Severe dizziness/fainting",
            "Extreme thirst with confusion",
            "No urination for 8+ hours",
            "Dark urine",
            "Rapid/weak pulse",
            "Low blood pressure",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Anxiety",
        keywords: &["headache", "nausea", "fatigue", "chest pain", "dizziness"],
        base_score: 0.15,
        transmission: Some("Not contagious; mental health condition triggered by stress"),
        recovery_time: Some(
            "Variable, acute episodes 15-30 minutes with coping, chronic requires therapy",
        ),
        precautions: &[
            "Practice relaxation techniques (deep breathing, meditation)",
            "Regular exercise",
            "Adequate sleep",
            "Limit caffeine",
            "Social support",
            "Professional counseling if severe",
        ],
        emergency_warnings: &[
            "Severe panic attack feeling",
            "Suicidal thoughts",
            "Severe chest pain (rule out cardiac)",
            "Loss of consciousness",
            "Inability to function",
        ],
        chronic: false,
    },
    ConditionRecord {
        name: "Strep Throat",
        keywords: &["sore throat", "fever", "headache", "body ache"],
        base_score: 0.22,
        transmission: Some(
            "Respiratory droplets, highly contagious 24 hours before to 3 days after \
             antibiotic treatment",
        ),
        recovery_time: Some("5-7 days with antibiotics, 1-2 weeks without"),
        precautions: &[
            "Take full antibiotic course",
            "Gargle with salt water",
            "Use throat lozenges",
            "Wash hands frequently",
            "Don't share personal items",
            "Stay home during contagious period",
            "Avoid smoking/secondhand smoke",
        ],
        emergency_warnings: &[
            "Severe difficulty swallowing",
            "Drooling/unable to swallow saliva",
            "Difficulty breathing",
            "High fever >39°C with confusion",
            "Severe rash with fever",
        ],
        chronic: false,
    },
];

/// The full knowledge base, in declaration order.
pub fn conditions() -> &'static [ConditionRecord] {
    CONDITIONS
}

/// Look up a record by its unique name.
pub fn find(name: &str) -> Option<&'static ConditionRecord> {
    CONDITIONS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = conditions().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), conditions().len());
    }

    #[test]
    fn base_scores_are_modest_priors() {
        for c in conditions() {
            assert!(c.base_score > 0.0, "{} has a zero prior", c.name);
            // A base score can never produce a near-certain result on its own.
            assert!(c.base_score < 0.5, "{} prior too high", c.name);
        }
    }

    #[test]
    fn keywords_are_lowercase_and_nonempty() {
        for c in conditions() {
            assert!(!c.keywords.is_empty(), "{} has no keywords", c.name);
            for kw in c.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{}: keyword not lowercase", c.name);
                assert!(!kw.trim().is_empty());
            }
        }
    }

    #[test]
    fn every_condition_carries_guidance() {
        for c in conditions() {
            assert!(!c.precautions.is_empty(), "{} has no precautions", c.name);
            assert!(
                !c.emergency_warnings.is_empty(),
                "{} has no emergency warnings",
                c.name
            );
        }
    }

    #[test]
    fn chronic_flags_cover_the_chronic_leaning_entries() {
        let chronic: Vec<_> = conditions()
            .iter()
            .filter(|c| c.chronic)
            .map(|c| c.name)
            .collect();
        assert_eq!(chronic, vec!["Asthma", "Allergies"]);
    }

    #[test]
    fn find_resolves_known_names() {
        assert!(find("Flu (Influenza)").is_some());
        assert!(find("Strep Throat").is_some());
        assert!(find("Ebola").is_none());
    }
}
