//! Risk scoring
//!
//! This module implements the three rule-based risk scorers and the seam
//! for substituting an external trained model per category. Each scorer is
//! a pure function over a validated reading; scorers share no state and
//! may run in any order or in parallel with identical results.

pub mod cardiac;
pub mod respiratory;
pub mod shock;

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::config::TriageConfig;
use crate::error::{Result, TriageError};
use crate::models::risk::{RiskCategory, RiskScore};
use crate::models::vitals::ValidReading;

/// Confidence ceiling of the low-risk band
///
/// Scorer confidence functions map their low/moderate/high input bands
/// onto [0, `LOW_BAND_CEILING`), [`LOW_BAND_CEILING`,
/// `MODERATE_BAND_CEILING`) and [`MODERATE_BAND_CEILING`, 1.0], so a
/// reading inside a band lands at the matching decision cut point.
pub const LOW_BAND_CEILING: f64 = 0.3;
/// Confidence ceiling of the moderate-risk band
pub const MODERATE_BAND_CEILING: f64 = 0.6;

/// A substitutable risk model for one category
///
/// Implementations wrap an external trained classifier. A model is invoked
/// with a bounded timeout; failure or timeout degrades the category to its
/// rule-based scorer and never silently defaults to zero risk.
pub trait RiskModel: Send + Sync {
    /// The category this model scores
    fn category(&self) -> RiskCategory;

    /// Score a validated reading
    fn score(&self, reading: &ValidReading) -> Result<RiskScore>;
}

/// Evaluate the rule-based scorer for one category
#[must_use]
pub fn rule_based_score(
    category: RiskCategory,
    reading: &ValidReading,
    config: &TriageConfig,
) -> RiskScore {
    match category {
        RiskCategory::Shock => shock::score(reading, &config.shock),
        RiskCategory::Cardiac => cardiac::score(reading, &config.cardiac),
        RiskCategory::Respiratory => respiratory::score(reading, &config.respiratory),
    }
}

/// Invoke an external risk model with a bounded timeout
///
/// The model runs on a helper thread so a hung implementation cannot block
/// evaluation past the deadline. An elapsed deadline or a model error is
/// returned as `ScorerUnavailable`; the caller decides the fallback.
pub fn score_with_timeout(
    model: &Arc<dyn RiskModel>,
    reading: ValidReading,
    timeout: Duration,
) -> Result<RiskScore> {
    let category = model.category();
    let (sender, receiver) = mpsc::channel();
    let model = Arc::clone(model);

    thread::spawn(move || {
        // The receiver may be gone if the deadline already elapsed.
        let _ = sender.send(model.score(&reading));
    });

    match receiver.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(TriageError::ScorerUnavailable {
            category,
            reason: format!("timed out after {timeout:?}"),
        }),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(TriageError::ScorerUnavailable {
            category,
            reason: "model thread terminated without a result".to_string(),
        }),
    }
}
