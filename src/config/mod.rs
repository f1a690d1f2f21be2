//! Configuration for the triage engine.
//!
//! Every numeric threshold in the scoring and decision policy lives here
//! with a documented default. The defaults are a testable policy, not
//! recovered clinical intent; deployments are expected to tune them.

use std::time::Duration;

use crate::models::triage::SeverityBand;

/// Thresholds for the shock-index scorer
#[derive(Debug, Clone)]
pub struct ShockThresholds {
    /// Shock index at which moderate risk weight begins
    pub moderate_index: f64,
    /// Shock index at which high risk weight begins
    pub high_index: f64,
    /// Shock index at which confidence saturates at 1.0
    pub ceiling_index: f64,
}

impl Default for ShockThresholds {
    fn default() -> Self {
        Self {
            moderate_index: 0.7,
            high_index: 0.9,
            ceiling_index: 1.4,
        }
    }
}

/// Thresholds for the cardiac scorer
#[derive(Debug, Clone)]
pub struct CardiacThresholds {
    /// Lower edge of the normal heart-rate band (bpm)
    pub heart_rate_low: u16,
    /// Upper edge of the normal heart-rate band (bpm)
    pub heart_rate_high: u16,
    /// Lower edge of the normal systolic band (mmHg)
    pub systolic_low: u16,
    /// Upper edge of the normal systolic band (mmHg)
    pub systolic_high: u16,
    /// Heart rate at or above which confidence is floored near 1.0
    pub extreme_tachycardia: u16,
    /// Heart rate at or below which confidence is floored near 1.0
    pub extreme_bradycardia: u16,
    /// Systolic pressure below which confidence is floored near 1.0
    pub severe_hypotension: u16,
}

impl Default for CardiacThresholds {
    fn default() -> Self {
        Self {
            heart_rate_low: 60,
            heart_rate_high: 100,
            systolic_low: 90,
            systolic_high: 140,
            extreme_tachycardia: 150,
            extreme_bradycardia: 40,
            severe_hypotension: 80,
        }
    }
}

/// Thresholds for the respiratory scorer
#[derive(Debug, Clone)]
pub struct RespiratoryThresholds {
    /// Lower edge of the normal respiratory-rate band (breaths/min)
    pub rate_low: u16,
    /// Upper edge of the normal respiratory-rate band (breaths/min)
    pub rate_high: u16,
    /// Oxygen saturation below which a deficit starts contributing (%)
    pub saturation_floor: f64,
    /// Oxygen saturation below which confidence is forced up (%)
    pub hypoxemia_critical: f64,
    /// Minimum confidence once saturation is below the critical cut-off
    pub hypoxemia_min_confidence: f64,
}

impl Default for RespiratoryThresholds {
    fn default() -> Self {
        Self {
            rate_low: 12,
            rate_high: 20,
            saturation_floor: 95.0,
            hypoxemia_critical: 90.0,
            hypoxemia_min_confidence: 0.8,
        }
    }
}

/// Cut points for the triage decision table
#[derive(Debug, Clone)]
pub struct DecisionThresholds {
    /// Confidence at or above which a single risk forces P1_RED
    pub immediate: f64,
    /// Confidence at or above which a single risk forces P2_YELLOW
    pub urgent: f64,
    /// Confidence at or above which an indicator counts as moderate
    pub observable: f64,
    /// Glasgow Coma Scale at or below which the reading is P1_RED
    pub coma_scale_critical: u8,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            immediate: 0.9,
            urgent: 0.6,
            observable: 0.3,
            coma_scale_critical: 8,
        }
    }
}

impl DecisionThresholds {
    /// Map a confidence value onto a severity band using these cut points
    #[must_use]
    pub fn band(&self, confidence: f64) -> SeverityBand {
        if confidence >= self.immediate {
            SeverityBand::Critical
        } else if confidence >= self.urgent {
            SeverityBand::High
        } else if confidence >= self.observable {
            SeverityBand::Moderate
        } else {
            SeverityBand::Low
        }
    }
}

/// Configuration for the `TriageEngine`
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Shock scorer thresholds
    pub shock: ShockThresholds,
    /// Cardiac scorer thresholds
    pub cardiac: CardiacThresholds,
    /// Respiratory scorer thresholds
    pub respiratory: RespiratoryThresholds,
    /// Decision table cut points
    pub decision: DecisionThresholds,
    /// Bound on a single external risk-model invocation
    pub scorer_timeout: Duration,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            shock: ShockThresholds::default(),
            cardiac: CardiacThresholds::default(),
            respiratory: RespiratoryThresholds::default(),
            decision: DecisionThresholds::default(),
            scorer_timeout: Duration::from_millis(500),
        }
    }
}
