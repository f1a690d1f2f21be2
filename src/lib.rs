//! A Rust library for vital-signs emergency triage: validation, risk
//! scoring, a deterministic triage decision table, and intervention
//! planning.

pub mod algorithm;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::TriageConfig;
pub use engine::TriageEngine;
pub use error::{Result, TriageError, ValidationError};

// Data models
pub use models::compat::{CompatibilityNote, CompatibilityVerdict, ImageFindings};
pub use models::result::{EmergencyIndicator, TriageResult};
pub use models::risk::{RiskCategory, RiskScore, RiskScores};
pub use models::triage::{SeverityBand, TriageLevel};
pub use models::vitals::{ValidReading, VitalField, VitalReading};

// Algorithm entry points
pub use algorithm::assemble::InterventionMap;
pub use algorithm::scoring::RiskModel;
pub use algorithm::{decide, validate};
