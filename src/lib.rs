//! Selfcheck: a deterministic symptom self-check engine.
//!
//! One invocation consumes a `(symptoms, context, optional profile)` tuple
//! and produces one [`models::AnalysisResult`] with no I/O and no shared
//! mutable state. The knowledge base is read-only static data, so any
//! number of analyses may run concurrently without coordination.
//!
//! This is general health information, not a diagnostic system. The
//! engine's guarantees are about deterministic, explainable scoring and
//! bounded output, never clinical accuracy.

pub mod compose;
pub mod config;
pub mod engine;
pub mod input;
pub mod knowledge;
pub mod limiter;
pub mod models;
pub mod safety;

pub use engine::SymptomAnalyzer;
pub use models::{AnalysisInput, AnalysisResult, PatientProfile, ScoredCondition, Sex};
