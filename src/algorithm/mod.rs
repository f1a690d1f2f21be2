//! Triage algorithms
//!
//! This module contains the computation pipeline: validation, the three
//! risk scorers, the triage decision table, and result assembly. All
//! functions here are pure; orchestration (external models, batching)
//! lives in the engine.

pub mod assemble;
pub mod compat;
pub mod scoring;
pub mod triage;
pub mod validation;

pub use assemble::{InterventionMap, assemble};
pub use compat::assess_vital_compatibility;
pub use scoring::{RiskModel, rule_based_score};
pub use triage::decide;
pub use validation::validate;
