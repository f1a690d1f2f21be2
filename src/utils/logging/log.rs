//! Logging utilities
//!
//! This module provides standardized logging functions for evaluation runs.

use crate::models::triage::TriageLevel;

/// Log the start of a batch evaluation with consistent format
pub fn log_batch_start(readings: usize) {
    log::info!("Evaluating {readings} vital-sign readings");
}

/// Log the completion of a batch evaluation with consistent format
///
/// # Arguments
/// * `evaluated` - Number of readings that produced a result
/// * `rejected` - Number of readings that failed validation
/// * `elapsed` - Optional elapsed time
pub fn log_batch_complete(
    evaluated: usize,
    rejected: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Evaluated {evaluated} readings ({rejected} rejected) in {duration:?}");
    } else {
        log::info!("Evaluated {evaluated} readings ({rejected} rejected)");
    }
}

/// Log a single triage outcome at a level-appropriate altitude
pub fn log_triage_outcome(level: TriageLevel) {
    match level {
        TriageLevel::P1Red | TriageLevel::P4Black => {
            log::warn!("Triage outcome: {level} ({})", level.description());
        }
        TriageLevel::P2Yellow | TriageLevel::P3Green => {
            log::info!("Triage outcome: {level} ({})", level.description());
        }
    }
}
