//! Image-classifier compatibility models
//!
//! The triage core never produces image findings; it only consumes the
//! result record of an external image classifier for a best-effort
//! cross-validation against the vital-derived triage level.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::triage::SeverityBand;

/// Result record of an external image classifier, treated as opaque input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFindings {
    /// The classifier's primary diagnosis label
    pub primary_diagnosis: String,
    /// Classifier confidence in the primary diagnosis
    pub confidence: f64,
    /// Severity fraction in [0.0, 1.0]; values outside are clamped
    pub severity_score: f64,
}

/// Verdict of the image/vitals compatibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityVerdict {
    /// Image and vital severities agree within one band
    Consistent,
    /// Image and vital severities differ by more than one band
    Discrepant,
}

impl fmt::Display for CompatibilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consistent => write!(f, "consistent"),
            Self::Discrepant => write!(f, "discrepant"),
        }
    }
}

/// Outcome of cross-validating image findings against a triage result
///
/// Disagreement is reported, never silently resolved; neither input is
/// adjusted by this check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityNote {
    /// Whether the two assessments agree within one severity band
    pub verdict: CompatibilityVerdict,
    /// Severity band derived from the image classifier's severity score
    pub image_severity: SeverityBand,
    /// Severity band derived from the vital-based triage level
    pub vital_severity: SeverityBand,
    /// Human-readable summary of the comparison
    pub note: String,
}

impl CompatibilityNote {
    /// Whether the assessments agree within one band
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.verdict == CompatibilityVerdict::Consistent
    }
}
