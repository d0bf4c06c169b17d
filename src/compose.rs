//! Response composition.
//!
//! Assembles the six-section advisory text from the upstream outputs.
//! Section order, headers, bullet markers and blank-line placement are
//! fixed so that identical inputs produce byte-identical text; golden
//! tests depend on that.

use crate::models::{AnalysisInput, ScoredCondition};
use crate::safety::advisor::{Bmi, ProfileAssessment};

/// How many top-ranked condition names feed cause inference when no
/// symptom category matched directly.
const CAUSE_INFERENCE_TOP_N: usize = 3;

/// A symptom-category rule: if any matched keyword contains one of
/// `triggers`, `statement` joins the possible-causes list.
struct CauseRule {
    triggers: &'static [&'static str],
    statement: &'static str,
}

/// Category order is emission order.
static CAUSE_RULES: &[CauseRule] = &[
    CauseRule {
        triggers: &["fever"],
        statement: "Could be due to a viral or bacterial infection causing fever",
    },
    CauseRule {
        triggers: &["cough", "breathlessness", "wheezing"],
        statement:
            "Could be due to a respiratory infection (cold, flu, COVID-19) or reactive airway \
             disease",
    },
    CauseRule {
        triggers: &["nausea", "vomiting", "diarrhea", "abdominal pain"],
        statement: "Could be due to gastroenteritis or foodborne illness",
    },
    CauseRule {
        triggers: &["headache"],
        statement:
            "Could be related to dehydration, migraine, tension-type headache, or infection",
    },
    CauseRule {
        triggers: &["sore throat"],
        statement:
            "Could be due to throat infection such as viral pharyngitis or strep throat",
    },
    CauseRule {
        triggers: &["dizziness", "fatigue"],
        statement:
            "Could be related to dehydration, low blood pressure, low energy, or systemic \
             causes",
    },
    CauseRule {
        triggers: &["chest pain"],
        statement:
            "Could be cardiac or respiratory; treat as potentially serious and seek urgent care",
    },
    CauseRule {
        triggers: &["itchy eyes", "sneezing", "runny nose"],
        statement: "Could be due to allergies or environmental triggers",
    },
];

/// Fallback rules applied to the names of the top-ranked conditions.
static NAME_CAUSE_RULES: &[CauseRule] = &[
    CauseRule {
        triggers: &[
            "flu",
            "influenza",
            "covid",
            "common cold",
            "bronchitis",
            "gastroenteritis",
            "food poisoning",
        ],
        statement: "Could be due to a viral or bacterial infection",
    },
    CauseRule {
        triggers: &["dehydration"],
        statement: "Could be due to dehydration or electrolyte imbalance",
    },
    CauseRule {
        triggers: &["allerg"],
        statement: "Could be due to an allergic reaction",
    },
    CauseRule {
        triggers: &["asthma", "bronchitis", "covid", "flu", "pneumonia"],
        statement: "Could be related to a respiratory infection or irritant exposure",
    },
    CauseRule {
        triggers: &["migraine", "tension"],
        statement:
            "Could be related to primary headache disorders (stress, tension, migraine \
             triggers)",
    },
    CauseRule {
        triggers: &["food poisoning", "gastroenteritis"],
        statement: "Could be due to contaminated food or a gastrointestinal infection",
    },
    CauseRule {
        triggers: &["anxiety"],
        statement: "Could be related to anxiety or stress",
    },
];

static GENERIC_CAUSE: &str = "Could be due to a common viral infection or non-specific causes";

static SELF_CARE_BASE: &[&str] = &[
    "Drink plenty of fluids (water, oral rehydration solutions if nausea/vomiting/diarrhea)",
    "Rest and avoid strenuous activity",
    "Monitor your temperature and symptoms regularly",
];

/// Symptom-triggered self-care tips, same trigger semantics as the cause
/// rules.
static SELF_CARE_RULES: &[CauseRule] = &[
    CauseRule {
        triggers: &["fever"],
        statement:
            "For fever: stay hydrated, use cooling measures, and consider \
             paracetamol/acetaminophen if appropriate for your profile.",
    },
    CauseRule {
        triggers: &["cough", "sore throat"],
        statement:
            "For cough/sore throat: rest voice, use humidified air, throat lozenges, and \
             saline gargles; avoid smoke.",
    },
    CauseRule {
        triggers: &["nausea", "vomiting", "diarrhea"],
        statement:
            "For nausea/vomiting/diarrhea: take small sips of oral rehydration solution, \
             avoid solid food briefly, and seek care if unable to keep fluids down.",
    },
    CauseRule {
        triggers: &["headache"],
        statement:
            "For headache: rest in a quiet, dark room, stay hydrated, and consider simple \
             analgesics only if safe for you.",
    },
    CauseRule {
        triggers: &["breathlessness", "wheezing"],
        statement:
            "For breathlessness: stop exertion, sit upright, use prescribed inhaler if \
             available, and seek urgent care if severe.",
    },
    CauseRule {
        triggers: &["runny nose", "sneezing", "itchy eyes"],
        statement:
            "For allergies: identify and avoid triggers, use saline rinses, and consider \
             antihistamines if suitable.",
    },
];

static SELF_CARE_CLOSING: &str =
    "Consider over-the-counter symptomatic relief only if suitable for you and not \
     contraindicated; check with a pharmacist/doctor if unsure";

static PREVENTION_TIPS: &[&str] = &[
    "Maintain good hand hygiene (wash with soap and water regularly)",
    "Avoid close contact with sick people and stay home when unwell",
    "Keep up to date with recommended vaccinations (e.g., influenza, COVID-19 where applicable)",
    "Maintain a balanced diet, regular exercise, and adequate sleep",
    "Practice safe food handling and clean surfaces regularly",
];

static FOLLOW_UP_QUESTIONS: &[&str] = &[
    "Since when did the symptoms start?",
    "Have you noticed fever, difficulty breathing, or vomiting/diarrhea?",
    "Do you have any known chronic conditions (e.g., asthma, diabetes, heart disease)?",
    "Are you taking any medications or have any allergies?",
];

static DISCLAIMER: &str = "\n⚕️ IMPORTANT: This information is for educational purposes only \
     and is not a medical diagnosis. If you are concerned or if emergency warning signs \
     appear, seek immediate medical attention.";

/// Assemble the full advisory text.
pub fn compose(
    input: &AnalysisInput,
    matched_symptoms: &[&str],
    ranked: &[ScoredCondition],
    warnings: &[String],
    assessment: &ProfileAssessment,
) -> String {
    let mut text = String::new();

    text.push_str(&format!(
        "1. Problem Summary\n\n{}\n\n",
        problem_summary(input, assessment.bmi)
    ));
    text.push_str(&format!("Safe to follow: {}\n\n", assessment.tag.as_str()));

    text.push_str("2. Possible Causes (General Information Only)\n\n");
    for cause in possible_causes(matched_symptoms, ranked) {
        text.push_str(&format!("- {cause}\n\n"));
    }

    text.push_str("3. Immediate Self-Care Advice\n\n");
    for advice in self_care(matched_symptoms) {
        text.push_str(&format!("- {advice}\n"));
    }
    if !assessment.notes.is_empty() {
        text.push_str("\nImportant Safety Notes based on provided profile:\n");
        for note in &assessment.notes {
            text.push_str(&format!("- {note}\n"));
        }
    }
    text.push('\n');

    text.push_str(
        "4. Warning Signs (When to seek medical help)\n\nSeek medical help if you notice any \
         of the following:\n",
    );
    for warning in warnings {
        text.push_str(&format!("- {warning}\n"));
    }
    text.push('\n');

    text.push_str("5. Lifestyle / Prevention Tips\n\n");
    for tip in PREVENTION_TIPS {
        text.push_str(&format!("- {tip}\n"));
    }
    text.push('\n');

    text.push_str("6. Follow-Up Questions (to improve accuracy)\n\n");
    for question in FOLLOW_UP_QUESTIONS {
        text.push_str(&format!("- {question}\n"));
    }

    text.push_str(DISCLAIMER);
    text
}

/// Section 1: restate what the user reported, plus BMI when computable.
fn problem_summary(input: &AnalysisInput, bmi: Option<Bmi>) -> String {
    let symptoms = input.symptoms.trim();
    let mut summary = format!(
        "Based on your message, you reported: {}",
        if symptoms.is_empty() {
            "no symptoms provided"
        } else {
            symptoms
        }
    );
    if !input.additional_info.is_empty() {
        summary.push_str(&format!(
            "; additional info: {}",
            input.additional_info.trim()
        ));
    }
    if !input.other_relevant_info.is_empty() {
        summary.push_str(&format!(
            "; other relevant info: {}",
            input.other_relevant_info.trim()
        ));
    }
    summary.push('.');
    if let Some(bmi) = bmi {
        summary.push_str(&format!(" BMI: {} ({}).", bmi.value, bmi.category));
    }
    summary
}

/// Section 2: category statements from matched keywords, then inference
/// from top condition names, then a generic statement. Never empty.
fn possible_causes(
    matched_symptoms: &[&str],
    ranked: &[ScoredCondition],
) -> Vec<&'static str> {
    let mut causes: Vec<&'static str> = Vec::new();

    if !matched_symptoms.is_empty() {
        for rule in CAUSE_RULES {
            if triggered(matched_symptoms, rule.triggers) {
                push_unique(&mut causes, rule.statement);
            }
        }
    }

    if causes.is_empty() {
        for condition in ranked.iter().take(CAUSE_INFERENCE_TOP_N) {
            let name_lower = condition.condition.to_lowercase();
            for rule in NAME_CAUSE_RULES {
                if rule.triggers.iter().any(|t| name_lower.contains(t)) {
                    push_unique(&mut causes, rule.statement);
                }
            }
        }
    }

    if causes.is_empty() {
        causes.push(GENERIC_CAUSE);
    }
    causes
}

/// Section 3 body: fixed base list, symptom-triggered tips, fixed closer.
fn self_care(matched_symptoms: &[&str]) -> Vec<&'static str> {
    let mut advice: Vec<&'static str> = SELF_CARE_BASE.to_vec();
    for rule in SELF_CARE_RULES {
        if triggered(matched_symptoms, rule.triggers) {
            advice.push(rule.statement);
        }
    }
    advice.push(SELF_CARE_CLOSING);
    advice
}

fn triggered(matched_symptoms: &[&str], triggers: &[&str]) -> bool {
    matched_symptoms
        .iter()
        .any(|kw| triggers.iter().any(|t| kw.contains(t)))
}

fn push_unique(causes: &mut Vec<&'static str>, statement: &'static str) {
    if !causes.contains(&statement) {
        causes.push(statement);
    }
}
