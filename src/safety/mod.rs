//! Safety layer: emergency-warning prioritization and profile-driven
//! caution notes. Both are pure functions over the engine's intermediate
//! results; neither feeds back into scoring.

pub mod advisor;
pub mod warnings;
