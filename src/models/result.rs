//! Triage result model
//!
//! The assembled output record for one evaluated reading. A result is
//! constructed once per reading and never updated in place; a new reading
//! produces a new result.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::risk::{RiskCategory, RiskScores};
use crate::models::triage::{SeverityBand, TriageLevel};
use crate::models::vitals::VitalField;

/// An emergency indicator surfaced by one of the risk scorers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmergencyIndicator {
    /// Clinical name of the indicator
    pub name: &'static str,
    /// Severity band derived from the owning scorer's confidence
    pub severity: SeverityBand,
    /// The vital field the indicator was derived from
    pub source: VitalField,
    /// The risk category whose scorer surfaced the indicator
    pub category: RiskCategory,
    /// Contribution magnitude within the owning score
    pub contribution: f64,
}

/// The assembled triage decision for one vital-sign reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageResult {
    /// Decided triage level
    pub triage_level: TriageLevel,
    /// The three per-category risk scores
    pub risk_scores: RiskScores,
    /// Merged emergency indicators, ordered by contribution descending
    pub emergency_indicators: Vec<EmergencyIndicator>,
    /// Recommended interventions for the level and dominant risk category
    pub recommended_interventions: Vec<String>,
    /// Per-category confidence passthrough
    pub confidence_scores: FxHashMap<RiskCategory, f64>,
    /// Categories whose external model failed and fell back to rules
    pub degraded_categories: Vec<RiskCategory>,
    /// When the underlying reading was taken, if reported
    pub recorded_at: Option<DateTime<Utc>>,
}

impl TriageResult {
    /// Whether any scorer was degraded to its rule-based fallback
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.degraded_categories.is_empty()
    }

    /// Indicators at or above a given severity band
    #[must_use]
    pub fn indicators_at_least(&self, band: SeverityBand) -> Vec<&EmergencyIndicator> {
        self.emergency_indicators
            .iter()
            .filter(|indicator| indicator.severity >= band)
            .collect()
    }

    /// Whether a category contributed at least one indicator
    #[must_use]
    pub fn has_indicator_from(&self, category: RiskCategory) -> bool {
        self.emergency_indicators
            .iter()
            .any(|indicator| indicator.category == category)
    }
}
