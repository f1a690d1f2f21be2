//! Triage decision table
//!
//! The decision table is an explicit, standalone function so triage policy
//! can change independently of the risk-scoring math. Rules are evaluated
//! top-down; the first match wins (positional priority, not numeric max).

use crate::config::DecisionThresholds;
use crate::models::risk::RiskScores;
use crate::models::triage::TriageLevel;
use crate::models::vitals::ValidReading;

/// Decide a triage level from the risk scores and the validated reading
///
/// The non-survivable pattern (no heart rate or no respirations) is tested
/// first: an arrest also drives the cardiac or respiratory confidence past
/// the immediate cut point, so evaluating it inside the ladder would leave
/// P4_BLACK unreachable. The remaining rules are:
///
/// 1. Coma scale at or below the critical cut-off, or any confidence at or
///    above the immediate cut point: P1_RED.
/// 2. Any confidence at or above the urgent cut point: P2_YELLOW.
/// 3. Otherwise: P3_GREEN, the documented "normal" floor.
#[must_use]
pub fn decide(
    scores: &RiskScores,
    reading: &ValidReading,
    thresholds: &DecisionThresholds,
) -> TriageLevel {
    if reading.heart_rate() == 0 || reading.respiratory_rate() == 0 {
        return TriageLevel::P4Black;
    }

    let max_confidence = scores.max_confidence();

    if reading.glasgow_coma_scale() <= thresholds.coma_scale_critical
        || max_confidence >= thresholds.immediate
    {
        return TriageLevel::P1Red;
    }

    if max_confidence >= thresholds.urgent {
        return TriageLevel::P2Yellow;
    }

    TriageLevel::P3Green
}
