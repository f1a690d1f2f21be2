//! Image/vitals compatibility check
//!
//! Best-effort correlation between an external image classifier's findings
//! and the vital-derived triage level. The check reports agreement or
//! disagreement; it never adjusts either assessment.

use crate::config::DecisionThresholds;
use crate::models::compat::{CompatibilityNote, CompatibilityVerdict, ImageFindings};
use crate::models::result::TriageResult;
use crate::models::triage::{SeverityBand, TriageLevel};

/// Maximum band distance still considered agreement
const AGREEMENT_TOLERANCE: i32 = 1;

/// Cross-validate image findings against a triage result
///
/// The image severity score is clamped to [0, 1] and banded with the same
/// cut points used for indicators; the triage level maps onto the band its
/// decision rule corresponds to. Agreement means the two bands differ by
/// at most one step.
#[must_use]
pub fn assess_vital_compatibility(
    image: &ImageFindings,
    triage: &TriageResult,
    thresholds: &DecisionThresholds,
) -> CompatibilityNote {
    let image_severity = thresholds.band(image.severity_score.clamp(0.0, 1.0));
    let vital_severity = level_band(triage.triage_level);

    let distance = image_severity.distance(vital_severity);
    let verdict = if distance <= AGREEMENT_TOLERANCE {
        CompatibilityVerdict::Consistent
    } else {
        CompatibilityVerdict::Discrepant
    };

    let note = match verdict {
        CompatibilityVerdict::Consistent => format!(
            "image findings ({}, {} severity) agree with triage level {}",
            image.primary_diagnosis, image_severity, triage.triage_level
        ),
        CompatibilityVerdict::Discrepant => format!(
            "image findings ({}, {} severity) disagree with triage level {} by {} bands; review both assessments",
            image.primary_diagnosis, image_severity, triage.triage_level, distance
        ),
    };

    CompatibilityNote {
        verdict,
        image_severity,
        vital_severity,
        note,
    }
}

/// The severity band a triage level corresponds to
const fn level_band(level: TriageLevel) -> SeverityBand {
    match level {
        // Expectant and immediate both sit at the top of the scale.
        TriageLevel::P1Red | TriageLevel::P4Black => SeverityBand::Critical,
        TriageLevel::P2Yellow => SeverityBand::High,
        TriageLevel::P3Green => SeverityBand::Moderate,
    }
}
