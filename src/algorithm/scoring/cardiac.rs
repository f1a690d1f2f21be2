//! Cardiac risk scorer
//!
//! Combines heart-rate deviation from the normal band with systolic
//! pressure deviation from the normal band into a weighted risk.
//! Extreme tachycardia/bradycardia or severe hypotension floors the
//! confidence near 1.0.

use smallvec::SmallVec;

use crate::config::CardiacThresholds;
use crate::models::risk::{IndicatorContribution, RiskCategory, RiskScore};
use crate::models::vitals::{ValidReading, VitalField};

/// Relative weight of the heart-rate component
const HEART_RATE_WEIGHT: f64 = 0.5;
/// Relative weight of the pressure component
const PRESSURE_WEIGHT: f64 = 0.5;

/// Beats above the normal band that saturate the tachycardia component
const TACHYCARDIA_SPAN: f64 = 60.0;
/// Beats below the normal band that saturate the bradycardia component
const BRADYCARDIA_SPAN: f64 = 30.0;
/// mmHg below the normal band that saturate the hypotension component
const HYPOTENSION_SPAN: f64 = 30.0;
/// mmHg above the normal band that saturate the hypertension component
const HYPERTENSION_SPAN: f64 = 60.0;

/// Confidence floor applied for extreme rate or pressure findings
const EXTREME_FLOOR: f64 = 0.9;

/// Score cardiac emergency risk for a validated reading
#[must_use]
pub fn score(reading: &ValidReading, thresholds: &CardiacThresholds) -> RiskScore {
    let heart_rate = reading.heart_rate();
    let systolic = reading.blood_pressure_systolic();

    let mut contributions: SmallVec<[IndicatorContribution; 4]> = SmallVec::new();

    let rate_deviation = if heart_rate > thresholds.heart_rate_high {
        let deviation =
            (f64::from(heart_rate - thresholds.heart_rate_high) / TACHYCARDIA_SPAN).min(1.0);
        contributions.push(IndicatorContribution {
            name: "tachycardia",
            source: VitalField::HeartRate,
            weight: deviation,
        });
        deviation
    } else if heart_rate < thresholds.heart_rate_low {
        let deviation =
            (f64::from(thresholds.heart_rate_low - heart_rate) / BRADYCARDIA_SPAN).min(1.0);
        contributions.push(IndicatorContribution {
            name: "bradycardia",
            source: VitalField::HeartRate,
            weight: deviation,
        });
        deviation
    } else {
        0.0
    };

    let pressure_deviation = if systolic < thresholds.systolic_low {
        let deviation =
            (f64::from(thresholds.systolic_low - systolic) / HYPOTENSION_SPAN).min(1.0);
        contributions.push(IndicatorContribution {
            name: "hypotension",
            source: VitalField::BloodPressureSystolic,
            weight: deviation,
        });
        deviation
    } else if systolic > thresholds.systolic_high {
        let deviation =
            (f64::from(systolic - thresholds.systolic_high) / HYPERTENSION_SPAN).min(1.0);
        contributions.push(IndicatorContribution {
            name: "hypertension",
            source: VitalField::BloodPressureSystolic,
            weight: deviation,
        });
        deviation
    } else {
        0.0
    };

    let mut confidence =
        HEART_RATE_WEIGHT * rate_deviation + PRESSURE_WEIGHT * pressure_deviation;

    let extreme = heart_rate >= thresholds.extreme_tachycardia
        || heart_rate <= thresholds.extreme_bradycardia
        || systolic < thresholds.severe_hypotension;
    if extreme {
        confidence = confidence.max(EXTREME_FLOOR);
    }

    RiskScore::new(RiskCategory::Cardiac, confidence, contributions.into_vec())
}
