//! Data models for the triage engine
//!
//! This module contains the value objects flowing through the pipeline:
//! vital-sign readings (raw and validated), risk scores, triage levels,
//! the assembled triage result, and the image-compatibility records.

pub mod compat;
pub mod result;
pub mod risk;
pub mod triage;
pub mod vitals;

// Re-export commonly used types for easier use
pub use compat::{CompatibilityNote, CompatibilityVerdict, ImageFindings};
pub use result::{EmergencyIndicator, TriageResult};
pub use risk::{IndicatorContribution, RiskCategory, RiskScore, RiskScores};
pub use triage::{SeverityBand, TriageLevel};
pub use vitals::{ValidReading, VitalField, VitalReading};
