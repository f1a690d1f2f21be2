//! Respiratory risk scorer
//!
//! Combines respiratory-rate deviation from the normal band with the
//! oxygen-saturation deficit below 95% into a weighted risk. Saturation
//! below the critical cut-off forces a minimum confidence regardless of
//! the rate component.

use smallvec::SmallVec;

use crate::config::RespiratoryThresholds;
use crate::models::risk::{IndicatorContribution, RiskCategory, RiskScore};
use crate::models::vitals::{ValidReading, VitalField};

/// Relative weight of the saturation component
const SATURATION_WEIGHT: f64 = 0.6;
/// Relative weight of the rate component
const RATE_WEIGHT: f64 = 0.4;

/// Breaths above the normal band that saturate the tachypnea component
const TACHYPNEA_SPAN: f64 = 20.0;
/// Breaths below the normal band that saturate the bradypnea component
const BRADYPNEA_SPAN: f64 = 8.0;
/// Percentage points of deficit that saturate the hypoxemia component
const SATURATION_SPAN: f64 = 15.0;

/// Score respiratory distress risk for a validated reading
#[must_use]
pub fn score(reading: &ValidReading, thresholds: &RespiratoryThresholds) -> RiskScore {
    let rate = reading.respiratory_rate();
    let saturation = reading.oxygen_saturation();

    let mut contributions: SmallVec<[IndicatorContribution; 4]> = SmallVec::new();

    let saturation_deficit = if saturation < thresholds.saturation_floor {
        let deficit = ((thresholds.saturation_floor - saturation) / SATURATION_SPAN).min(1.0);
        contributions.push(IndicatorContribution {
            name: "hypoxemia",
            source: VitalField::OxygenSaturation,
            weight: deficit,
        });
        deficit
    } else {
        0.0
    };

    let rate_deviation = if rate > thresholds.rate_high {
        let deviation = (f64::from(rate - thresholds.rate_high) / TACHYPNEA_SPAN).min(1.0);
        contributions.push(IndicatorContribution {
            name: "tachypnea",
            source: VitalField::RespiratoryRate,
            weight: deviation,
        });
        deviation
    } else if rate < thresholds.rate_low {
        let deviation = (f64::from(thresholds.rate_low - rate) / BRADYPNEA_SPAN).min(1.0);
        contributions.push(IndicatorContribution {
            name: "bradypnea",
            source: VitalField::RespiratoryRate,
            weight: deviation,
        });
        deviation
    } else {
        0.0
    };

    let mut confidence = SATURATION_WEIGHT * saturation_deficit + RATE_WEIGHT * rate_deviation;

    if saturation < thresholds.hypoxemia_critical {
        confidence = confidence.max(thresholds.hypoxemia_min_confidence);
    }

    RiskScore::new(
        RiskCategory::Respiratory,
        confidence,
        contributions.into_vec(),
    )
}
