//! Error handling for the triage engine.

use crate::models::risk::RiskCategory;
use crate::models::triage::TriageLevel;
use crate::models::vitals::VitalField;

/// Errors raised while validating a raw vital-sign reading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required vital field was not supplied
    #[error("missing required vital field: {field}")]
    MissingField {
        /// The field that was absent from the reading
        field: VitalField,
    },

    /// A vital field was outside its physiological bound
    #[error("{field} out of physiological range: {value} (expected {min} to {max})")]
    OutOfRange {
        /// The offending field
        field: VitalField,
        /// The value that was supplied
        value: f64,
        /// Lower bound of the accepted range
        min: f64,
        /// Upper bound of the accepted range
        max: f64,
    },

    /// Systolic pressure was below diastolic pressure
    #[error("systolic pressure {systolic} mmHg below diastolic {diastolic} mmHg")]
    PressureInverted {
        /// Supplied systolic pressure
        systolic: u16,
        /// Supplied diastolic pressure
        diastolic: u16,
    },
}

/// Specialized error type for triage evaluation
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    /// The reading failed physiological validation
    #[error("invalid vital reading: {0}")]
    Validation(#[from] ValidationError),

    /// An external risk model failed or timed out
    #[error("{category} risk model unavailable: {reason}")]
    ScorerUnavailable {
        /// Risk category the model was registered for
        category: RiskCategory,
        /// What went wrong (failure message or timeout)
        reason: String,
    },

    /// The intervention mapping is missing an entry for a reachable pair
    #[error("intervention mapping incomplete: no entry for {level} / {category}")]
    Configuration {
        /// Triage level of the missing entry
        level: TriageLevel,
        /// Risk category of the missing entry
        category: RiskCategory,
    },
}

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;
