//! Result assembly
//!
//! Merges the scorers' indicator lists, resolves the intervention list for
//! the decided level and dominant risk category, and packages everything
//! into the immutable `TriageResult`.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::config::DecisionThresholds;
use crate::error::{Result, TriageError};
use crate::models::result::{EmergencyIndicator, TriageResult};
use crate::models::risk::{RiskCategory, RiskScores};
use crate::models::triage::TriageLevel;
use crate::models::vitals::ValidReading;

/// Static mapping from (triage level, dominant risk category) to an
/// ordered list of recommended interventions
///
/// The mapping must be total over every reachable pair; `verify` enforces
/// this at engine construction so a gap can never surface per-request.
#[derive(Debug, Clone)]
pub struct InterventionMap {
    entries: FxHashMap<(TriageLevel, RiskCategory), Vec<&'static str>>,
}

impl InterventionMap {
    /// Create an empty mapping (for tests of the totality check)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// The standard intervention policy
    #[must_use]
    pub fn standard() -> Self {
        let mut entries: FxHashMap<(TriageLevel, RiskCategory), Vec<&'static str>> =
            FxHashMap::default();

        entries.insert(
            (TriageLevel::P1Red, RiskCategory::Shock),
            vec![
                "initiate IV fluids",
                "prepare for blood transfusion",
                "alert trauma team",
            ],
        );
        entries.insert(
            (TriageLevel::P1Red, RiskCategory::Cardiac),
            vec![
                "attach cardiac monitor",
                "obtain 12-lead ECG",
                "prepare resuscitation drugs",
                "alert cardiology team",
            ],
        );
        entries.insert(
            (TriageLevel::P1Red, RiskCategory::Respiratory),
            vec![
                "administer high-flow oxygen",
                "prepare for airway management",
                "alert respiratory team",
            ],
        );

        entries.insert(
            (TriageLevel::P2Yellow, RiskCategory::Shock),
            vec![
                "establish IV access",
                "monitor blood pressure every 5 minutes",
                "type and crossmatch blood",
            ],
        );
        entries.insert(
            (TriageLevel::P2Yellow, RiskCategory::Cardiac),
            vec!["obtain 12-lead ECG", "continuous cardiac monitoring"],
        );
        entries.insert(
            (TriageLevel::P2Yellow, RiskCategory::Respiratory),
            vec![
                "administer supplemental oxygen",
                "continuous pulse oximetry",
            ],
        );

        entries.insert(
            (TriageLevel::P3Green, RiskCategory::Shock),
            vec!["record baseline vitals", "reassess within 30 minutes"],
        );
        entries.insert(
            (TriageLevel::P3Green, RiskCategory::Cardiac),
            vec!["record baseline vitals", "reassess within 30 minutes"],
        );
        entries.insert(
            (TriageLevel::P3Green, RiskCategory::Respiratory),
            vec!["record baseline vitals", "monitor oxygen saturation"],
        );

        entries.insert(
            (TriageLevel::P4Black, RiskCategory::Shock),
            vec![
                "confirm absence of vital signs",
                "follow expectant-care protocol",
            ],
        );
        entries.insert(
            (TriageLevel::P4Black, RiskCategory::Cardiac),
            vec![
                "confirm absence of vital signs",
                "follow expectant-care protocol",
            ],
        );
        entries.insert(
            (TriageLevel::P4Black, RiskCategory::Respiratory),
            vec![
                "confirm absence of vital signs",
                "follow expectant-care protocol",
            ],
        );

        Self { entries }
    }

    /// Check the mapping is total and every entry is non-empty
    ///
    /// Run once at engine construction; a failure here is a configuration
    /// fault, never a per-request error.
    pub fn verify(&self) -> Result<()> {
        for level in TriageLevel::ALL {
            for category in RiskCategory::ALL {
                match self.entries.get(&(level, category)) {
                    Some(interventions) if !interventions.is_empty() => {}
                    _ => {
                        return Err(TriageError::Configuration { level, category });
                    }
                }
            }
        }
        Ok(())
    }

    /// Interventions for a level and dominant category
    ///
    /// The mapping is verified total at construction, so a miss is a
    /// programming-contract failure; an empty slice is returned rather
    /// than panicking.
    #[must_use]
    pub fn interventions(&self, level: TriageLevel, category: RiskCategory) -> &[&'static str] {
        self.entries
            .get(&(level, category))
            .map_or(&[], Vec::as_slice)
    }
}

impl Default for InterventionMap {
    fn default() -> Self {
        Self::standard()
    }
}

/// Assemble the final triage result
///
/// Indicators are merged from the three scorers (declaration order),
/// tagged with their source category and a severity band from that
/// scorer's confidence, then ordered by contribution weight descending.
/// The sort is stable, so equal contributions keep declaration order.
#[must_use]
pub fn assemble(
    scores: RiskScores,
    level: TriageLevel,
    reading: &ValidReading,
    interventions: &InterventionMap,
    thresholds: &DecisionThresholds,
    degraded_categories: Vec<RiskCategory>,
) -> TriageResult {
    let emergency_indicators: Vec<EmergencyIndicator> = scores
        .iter()
        .flat_map(|score| {
            let severity = thresholds.band(score.confidence);
            score
                .indicators
                .iter()
                .map(move |indicator| EmergencyIndicator {
                    name: indicator.name,
                    severity,
                    source: indicator.source,
                    category: score.category,
                    contribution: indicator.weight,
                })
        })
        .sorted_by(|a, b| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .collect();

    let dominant = scores.dominant_category();
    let recommended_interventions = interventions
        .interventions(level, dominant)
        .iter()
        .map(ToString::to_string)
        .collect();

    let confidence_scores: FxHashMap<RiskCategory, f64> = scores
        .iter()
        .map(|score| (score.category, score.confidence))
        .collect();

    TriageResult {
        triage_level: level,
        recorded_at: reading.recorded_at(),
        emergency_indicators,
        recommended_interventions,
        confidence_scores,
        degraded_categories,
        risk_scores: scores,
    }
}
