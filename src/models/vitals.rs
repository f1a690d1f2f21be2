//! Vital-sign reading models
//!
//! This module contains the raw and validated forms of a vital-sign reading.
//! A raw `VitalReading` arrives from an upstream monitoring-device
//! integration and may be incomplete; a `ValidReading` can only be obtained
//! through validation and guarantees every field is present and within its
//! physiological bound.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// The seven vital-sign fields carried by a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalField {
    /// Heart rate in beats per minute
    HeartRate,
    /// Systolic blood pressure in mmHg
    BloodPressureSystolic,
    /// Diastolic blood pressure in mmHg
    BloodPressureDiastolic,
    /// Respiratory rate in breaths per minute
    RespiratoryRate,
    /// Peripheral oxygen saturation as a percentage
    OxygenSaturation,
    /// Core body temperature in degrees Celsius
    Temperature,
    /// Glasgow Coma Scale score (3-15)
    GlasgowComaScale,
}

impl VitalField {
    /// All vital fields, in declaration order
    pub const ALL: [Self; 7] = [
        Self::HeartRate,
        Self::BloodPressureSystolic,
        Self::BloodPressureDiastolic,
        Self::RespiratoryRate,
        Self::OxygenSaturation,
        Self::Temperature,
        Self::GlasgowComaScale,
    ];

    /// Get the field name as it appears in reading records
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::HeartRate => "heart_rate",
            Self::BloodPressureSystolic => "blood_pressure_systolic",
            Self::BloodPressureDiastolic => "blood_pressure_diastolic",
            Self::RespiratoryRate => "respiratory_rate",
            Self::OxygenSaturation => "oxygen_saturation",
            Self::Temperature => "temperature",
            Self::GlasgowComaScale => "glasgow_coma_scale",
        }
    }
}

impl fmt::Display for VitalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// A raw vital-sign reading as delivered by an upstream device integration
///
/// Every field is optional so that incomplete upstream records are
/// representable and rejected explicitly during validation rather than
/// silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VitalReading {
    /// Heart rate in beats per minute
    #[serde(default)]
    pub heart_rate: Option<u16>,
    /// Systolic blood pressure in mmHg
    #[serde(default)]
    pub blood_pressure_systolic: Option<u16>,
    /// Diastolic blood pressure in mmHg
    #[serde(default)]
    pub blood_pressure_diastolic: Option<u16>,
    /// Respiratory rate in breaths per minute
    #[serde(default)]
    pub respiratory_rate: Option<u16>,
    /// Peripheral oxygen saturation as a percentage (0.0-100.0)
    #[serde(default)]
    pub oxygen_saturation: Option<f64>,
    /// Core body temperature in degrees Celsius
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Glasgow Coma Scale score (3-15)
    #[serde(default)]
    pub glasgow_coma_scale: Option<u8>,
    /// When the reading was taken, if the device reported it
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl VitalReading {
    /// Create a complete reading with all seven vital fields
    #[must_use]
    pub fn new(
        heart_rate: u16,
        blood_pressure_systolic: u16,
        blood_pressure_diastolic: u16,
        respiratory_rate: u16,
        oxygen_saturation: f64,
        temperature: f64,
        glasgow_coma_scale: u8,
    ) -> Self {
        Self {
            heart_rate: Some(heart_rate),
            blood_pressure_systolic: Some(blood_pressure_systolic),
            blood_pressure_diastolic: Some(blood_pressure_diastolic),
            respiratory_rate: Some(respiratory_rate),
            oxygen_saturation: Some(oxygen_saturation),
            temperature: Some(temperature),
            glasgow_coma_scale: Some(glasgow_coma_scale),
            recorded_at: None,
        }
    }

    /// Attach the time the reading was taken
    #[must_use]
    pub fn with_recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }
}

/// A vital-sign reading that has passed physiological validation
///
/// Fields are private; the only way to obtain a `ValidReading` is through
/// `algorithm::validation::validate` (or the `TryFrom` impl), so holding one
/// is proof that every field is present and in range. Values are never
/// mutated or converted after validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidReading {
    heart_rate: u16,
    blood_pressure_systolic: u16,
    blood_pressure_diastolic: u16,
    respiratory_rate: u16,
    oxygen_saturation: f64,
    temperature: f64,
    glasgow_coma_scale: u8,
    recorded_at: Option<DateTime<Utc>>,
}

impl ValidReading {
    /// Construct a validated reading. Only the validator calls this;
    /// bounds must already have been checked.
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        heart_rate: u16,
        blood_pressure_systolic: u16,
        blood_pressure_diastolic: u16,
        respiratory_rate: u16,
        oxygen_saturation: f64,
        temperature: f64,
        glasgow_coma_scale: u8,
        recorded_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            heart_rate,
            blood_pressure_systolic,
            blood_pressure_diastolic,
            respiratory_rate,
            oxygen_saturation,
            temperature,
            glasgow_coma_scale,
            recorded_at,
        }
    }

    /// Heart rate in beats per minute
    #[must_use]
    pub const fn heart_rate(&self) -> u16 {
        self.heart_rate
    }

    /// Systolic blood pressure in mmHg
    #[must_use]
    pub const fn blood_pressure_systolic(&self) -> u16 {
        self.blood_pressure_systolic
    }

    /// Diastolic blood pressure in mmHg
    #[must_use]
    pub const fn blood_pressure_diastolic(&self) -> u16 {
        self.blood_pressure_diastolic
    }

    /// Respiratory rate in breaths per minute
    #[must_use]
    pub const fn respiratory_rate(&self) -> u16 {
        self.respiratory_rate
    }

    /// Oxygen saturation as a percentage
    #[must_use]
    pub const fn oxygen_saturation(&self) -> f64 {
        self.oxygen_saturation
    }

    /// Body temperature in degrees Celsius
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Glasgow Coma Scale score
    #[must_use]
    pub const fn glasgow_coma_scale(&self) -> u8 {
        self.glasgow_coma_scale
    }

    /// When the reading was taken, if reported
    #[must_use]
    pub const fn recorded_at(&self) -> Option<DateTime<Utc>> {
        self.recorded_at
    }

    /// Shock index: heart rate divided by systolic blood pressure
    ///
    /// Systolic pressure is validated strictly positive, so the division
    /// cannot fail at runtime.
    #[must_use]
    pub fn shock_index(&self) -> f64 {
        f64::from(self.heart_rate) / f64::from(self.blood_pressure_systolic)
    }
}

impl TryFrom<VitalReading> for ValidReading {
    type Error = ValidationError;

    fn try_from(reading: VitalReading) -> std::result::Result<Self, Self::Error> {
        crate::algorithm::validation::validate(&reading)
    }
}
