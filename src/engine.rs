//! Triage engine
//!
//! The coordinating façade over validation, scoring, the decision table and
//! result assembly. The engine owns the configuration, the verified
//! intervention mapping, and any registered external risk models.

use std::sync::Arc;

use log::{info, warn};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::algorithm::assemble::{InterventionMap, assemble};
use crate::algorithm::scoring::{RiskModel, rule_based_score, score_with_timeout};
use crate::algorithm::triage::decide;
use crate::algorithm::validation::validate;
use crate::config::TriageConfig;
use crate::error::Result;
use crate::models::compat::{CompatibilityNote, ImageFindings};
use crate::models::result::TriageResult;
use crate::models::risk::{RiskCategory, RiskScore, RiskScores};
use crate::models::vitals::{ValidReading, VitalReading};
use crate::utils::logging::create_batch_progress_bar;

/// Vital-signs emergency triage engine
///
/// Evaluation is deterministic: identical readings always produce
/// identical results, independent of scorer execution order.
pub struct TriageEngine {
    config: TriageConfig,
    interventions: InterventionMap,
    external_models: FxHashMap<RiskCategory, Arc<dyn RiskModel>>,
}

impl std::fmt::Debug for TriageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageEngine")
            .field("config", &self.config)
            .field("interventions", &self.interventions)
            .field(
                "external_models",
                &self.external_models.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl TriageEngine {
    /// Create an engine with the default configuration and the standard
    /// intervention mapping
    pub fn new() -> Result<Self> {
        Self::with_config(TriageConfig::default())
    }

    /// Create an engine with a custom configuration
    ///
    /// The intervention mapping is verified total here; a gap is a fatal
    /// configuration error, so no request can ever hit a missing entry.
    pub fn with_config(config: TriageConfig) -> Result<Self> {
        Self::with_interventions(config, InterventionMap::standard())
    }

    /// Create an engine with a custom configuration and intervention map
    pub fn with_interventions(
        config: TriageConfig,
        interventions: InterventionMap,
    ) -> Result<Self> {
        interventions.verify()?;
        Ok(Self {
            config,
            interventions,
            external_models: FxHashMap::default(),
        })
    }

    /// Register an external risk model for its category
    ///
    /// At most one model per category; registering again replaces the
    /// previous model. The rule-based scorer remains the fallback.
    pub fn register_model(&mut self, model: Arc<dyn RiskModel>) {
        let category = model.category();
        info!("Registered external {category} risk model");
        self.external_models.insert(category, model);
    }

    /// The engine's configuration
    #[must_use]
    pub const fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Evaluate a raw vital-sign reading
    ///
    /// This is the sole entry point of the core: validation, the three
    /// risk scorers, the decision table and assembly, in that order. A
    /// validation failure propagates immediately; no partial result is
    /// produced.
    pub fn evaluate(&self, reading: &VitalReading) -> Result<TriageResult> {
        let valid = validate(reading)?;

        let (scores, degraded) = self.score_all(&valid);
        let level = decide(&scores, &valid, &self.config.decision);

        if !degraded.is_empty() {
            warn!(
                "Triage for reading degraded to rule-based scoring for: {}",
                degraded
                    .iter()
                    .copied()
                    .map(RiskCategory::display_name)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Ok(assemble(
            scores,
            level,
            &valid,
            &self.interventions,
            &self.config.decision,
            degraded,
        ))
    }

    /// Evaluate a batch of readings in parallel
    ///
    /// Results are order-aligned with the input slice and identical to
    /// evaluating each reading sequentially. A progress bar reports
    /// throughput for large batches.
    pub fn evaluate_batch(&self, readings: &[VitalReading]) -> Vec<Result<TriageResult>> {
        let progress = create_batch_progress_bar(readings.len() as u64);

        let results: Vec<Result<TriageResult>> = readings
            .par_iter()
            .map(|reading| {
                let result = self.evaluate(reading);
                progress.inc(1);
                result
            })
            .collect();

        progress.finish_and_clear();
        results
    }

    /// Cross-validate external image findings against a triage result
    ///
    /// Best-effort: agreement means the image-derived severity band and
    /// the vital-derived band differ by at most one step. Disagreement is
    /// reported, never resolved.
    #[must_use]
    pub fn assess_vital_compatibility(
        &self,
        image: &ImageFindings,
        triage: &TriageResult,
    ) -> CompatibilityNote {
        crate::algorithm::compat::assess_vital_compatibility(
            image,
            triage,
            &self.config.decision,
        )
    }

    /// Score all three categories for a validated reading
    ///
    /// The scorers have no data dependency on each other and run as a
    /// rayon fan-out. Returns the scores plus the categories that fell
    /// back from a failed external model.
    fn score_all(&self, reading: &ValidReading) -> (RiskScores, Vec<RiskCategory>) {
        let (shock, (cardiac, respiratory)) = rayon::join(
            || self.score_category(RiskCategory::Shock, reading),
            || {
                rayon::join(
                    || self.score_category(RiskCategory::Cardiac, reading),
                    || self.score_category(RiskCategory::Respiratory, reading),
                )
            },
        );

        let mut degraded = Vec::new();
        for (score, was_degraded) in [&shock, &cardiac, &respiratory] {
            if *was_degraded {
                degraded.push(score.category);
            }
        }

        (
            RiskScores {
                shock: shock.0,
                cardiac: cardiac.0,
                respiratory: respiratory.0,
            },
            degraded,
        )
    }

    /// Score one category, trying the external model first when present
    ///
    /// Returns the score and whether the category degraded to rules.
    fn score_category(&self, category: RiskCategory, reading: &ValidReading) -> (RiskScore, bool) {
        if let Some(model) = self.external_models.get(&category) {
            match score_with_timeout(model, *reading, self.config.scorer_timeout) {
                Ok(score) => return (score, false),
                Err(error) => {
                    warn!("External {category} model unavailable, using rule-based scorer: {error}");
                    return (rule_based_score(category, reading, &self.config), true);
                }
            }
        }
        (rule_based_score(category, reading, &self.config), false)
    }
}
