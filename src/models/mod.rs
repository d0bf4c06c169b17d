pub mod analysis;
pub mod condition;
pub mod profile;

pub use analysis::{AnalysisInput, AnalysisResult, ScoredCondition};
pub use condition::ConditionRecord;
pub use profile::{PatientProfile, Sex};
