//! Shock risk scorer
//!
//! Scores hypovolemic/circulatory shock risk from the shock index (heart
//! rate over systolic pressure). Confidence is a piecewise-linear,
//! monotonically increasing function of the index, clamped to [0, 1].

use smallvec::SmallVec;

use crate::algorithm::scoring::{LOW_BAND_CEILING, MODERATE_BAND_CEILING};
use crate::config::ShockThresholds;
use crate::models::risk::{IndicatorContribution, RiskCategory, RiskScore};
use crate::models::vitals::{ValidReading, VitalField};

/// Heart rate above which compensatory tachycardia contributes (bpm)
const TACHYCARDIA_CUTOFF: u16 = 100;
/// Systolic pressure below which hypotension contributes (mmHg)
const HYPOTENSION_CUTOFF: u16 = 90;

/// Score shock risk for a validated reading
#[must_use]
pub fn score(reading: &ValidReading, thresholds: &ShockThresholds) -> RiskScore {
    let index = reading.shock_index();
    let confidence = confidence_for_index(index, thresholds);

    let mut contributions: SmallVec<[IndicatorContribution; 4]> = SmallVec::new();

    if index >= thresholds.moderate_index {
        contributions.push(IndicatorContribution {
            name: "elevated shock index",
            source: VitalField::HeartRate,
            weight: index,
        });
    }
    if reading.heart_rate() > TACHYCARDIA_CUTOFF {
        contributions.push(IndicatorContribution {
            name: "compensatory tachycardia",
            source: VitalField::HeartRate,
            weight: f64::from(reading.heart_rate() - TACHYCARDIA_CUTOFF)
                / f64::from(TACHYCARDIA_CUTOFF),
        });
    }
    if reading.blood_pressure_systolic() < HYPOTENSION_CUTOFF {
        contributions.push(IndicatorContribution {
            name: "systolic hypotension",
            source: VitalField::BloodPressureSystolic,
            weight: f64::from(HYPOTENSION_CUTOFF - reading.blood_pressure_systolic())
                / f64::from(HYPOTENSION_CUTOFF),
        });
    }

    RiskScore::new(RiskCategory::Shock, confidence, contributions.into_vec())
}

/// Map a shock index onto a confidence value
///
/// The low band rises to `LOW_BAND_CEILING` at the moderate knee, the
/// moderate band to `MODERATE_BAND_CEILING` at the high knee, and the high
/// band saturates at 1.0 once the index reaches the ceiling.
fn confidence_for_index(index: f64, thresholds: &ShockThresholds) -> f64 {
    let confidence = if index < thresholds.moderate_index {
        index / thresholds.moderate_index * LOW_BAND_CEILING
    } else if index < thresholds.high_index {
        let span = thresholds.high_index - thresholds.moderate_index;
        LOW_BAND_CEILING
            + (index - thresholds.moderate_index) / span * (MODERATE_BAND_CEILING - LOW_BAND_CEILING)
    } else {
        let span = thresholds.ceiling_index - thresholds.high_index;
        MODERATE_BAND_CEILING
            + (index - thresholds.high_index) / span * (1.0 - MODERATE_BAND_CEILING)
    };
    confidence.clamp(0.0, 1.0)
}
