//! Triage level and severity band models
//!
//! This module defines the mass-casualty triage taxonomy and the severity
//! bands used to tag emergency indicators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mass-casualty triage levels, totally ordered by descending urgency
///
/// P1 is the most urgent; the derived ordering places more urgent levels
/// first (`P1Red < P2Yellow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TriageLevel {
    /// Immediate: life-threatening, treat first
    #[serde(rename = "P1_RED")]
    P1Red = 1,
    /// Delayed: urgent but can wait briefly
    #[serde(rename = "P2_YELLOW")]
    P2Yellow = 2,
    /// Minimal: walking wounded or stable
    #[serde(rename = "P3_GREEN")]
    P3Green = 3,
    /// Expectant/deceased: no vital signs or non-survivable pattern
    #[serde(rename = "P4_BLACK")]
    P4Black = 4,
}

impl TriageLevel {
    /// All triage levels, most urgent first
    pub const ALL: [Self; 4] = [Self::P1Red, Self::P2Yellow, Self::P3Green, Self::P4Black];

    /// Get the wire code for this level
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::P1Red => "P1_RED",
            Self::P2Yellow => "P2_YELLOW",
            Self::P3Green => "P3_GREEN",
            Self::P4Black => "P4_BLACK",
        }
    }

    /// Get a descriptive name for this level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::P1Red => "immediate",
            Self::P2Yellow => "delayed",
            Self::P3Green => "minimal",
            Self::P4Black => "expectant",
        }
    }

    /// Check whether this level is more urgent than another
    #[must_use]
    pub fn is_more_urgent_than(self, other: Self) -> bool {
        self < other
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Severity bands for emergency indicators
///
/// Band boundaries reuse the triage decision cut points, so an indicator's
/// band always agrees with the level its scorer alone would have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    /// Below every decision threshold
    Low = 1,
    /// Would reach at most P3_GREEN on its own
    Moderate = 2,
    /// Would reach P2_YELLOW on its own
    High = 3,
    /// Would reach P1_RED on its own
    Critical = 4,
}

impl SeverityBand {
    /// Get the numeric value for this band
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get a descriptive name for this band
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Absolute distance between two bands, in band steps
    #[must_use]
    pub const fn distance(self, other: Self) -> i32 {
        (self as i32 - other as i32).abs()
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
