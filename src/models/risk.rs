//! Risk score models
//!
//! This module defines the risk categories evaluated for every reading and
//! the score records the scorers produce. Scores are derived values,
//! recomputed per reading and never mutated after creation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::vitals::VitalField;

/// Risk categories evaluated for every vital-sign reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Hypovolemic/circulatory shock risk
    Shock = 1,
    /// Cardiac emergency risk
    Cardiac = 2,
    /// Respiratory distress risk
    Respiratory = 3,
}

impl RiskCategory {
    /// All risk categories, in declaration order
    ///
    /// Declaration order doubles as the positional tie-break when two
    /// categories carry equal confidence.
    pub const ALL: [Self; 3] = [Self::Shock, Self::Cardiac, Self::Respiratory];

    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Shock => "shock",
            Self::Cardiac => "cardiac",
            Self::Respiratory => "respiratory",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single indicator that contributed non-zero weight to a risk score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorContribution {
    /// Clinical name of the indicator (e.g. "hypoxemia")
    pub name: &'static str,
    /// The vital field the indicator was derived from
    pub source: VitalField,
    /// Contribution magnitude, used to order indicator lists
    pub weight: f64,
}

/// Risk score for one category, derived from a validated reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskScore {
    /// The category this score belongs to
    pub category: RiskCategory,
    /// Confidence that the risk is present, clamped to [0.0, 1.0]
    pub confidence: f64,
    /// Contributing indicators, sorted by weight descending
    ///
    /// The ordering is a contract: the assembler and downstream consumers
    /// rely on the first entry being the strongest contributor. Ties keep
    /// the scorer's declaration order (stable sort).
    pub indicators: Vec<IndicatorContribution>,
}

impl RiskScore {
    /// Create a score, clamping confidence and ordering indicators by
    /// contribution weight descending
    #[must_use]
    pub fn new(
        category: RiskCategory,
        confidence: f64,
        mut indicators: Vec<IndicatorContribution>,
    ) -> Self {
        indicators.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            category,
            confidence: confidence.clamp(0.0, 1.0),
            indicators,
        }
    }
}

/// The three per-category risk scores for one reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskScores {
    /// Shock risk score
    pub shock: RiskScore,
    /// Cardiac risk score
    pub cardiac: RiskScore,
    /// Respiratory risk score
    pub respiratory: RiskScore,
}

impl RiskScores {
    /// Get the score for a specific category
    #[must_use]
    pub const fn get(&self, category: RiskCategory) -> &RiskScore {
        match category {
            RiskCategory::Shock => &self.shock,
            RiskCategory::Cardiac => &self.cardiac,
            RiskCategory::Respiratory => &self.respiratory,
        }
    }

    /// Iterate the scores in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &RiskScore> {
        RiskCategory::ALL.iter().map(|category| self.get(*category))
    }

    /// Highest confidence across the three categories
    #[must_use]
    pub fn max_confidence(&self) -> f64 {
        self.iter()
            .map(|score| score.confidence)
            .fold(0.0, f64::max)
    }

    /// The category with the highest confidence
    ///
    /// Ties resolve positionally in declaration order, not by any
    /// secondary numeric criterion.
    #[must_use]
    pub fn dominant_category(&self) -> RiskCategory {
        let mut dominant = RiskCategory::Shock;
        for category in RiskCategory::ALL {
            if self.get(category).confidence > self.get(dominant).confidence {
                dominant = category;
            }
        }
        dominant
    }
}
