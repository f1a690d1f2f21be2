//! Vital-sign validation
//!
//! This module range-checks a raw reading against physiological bounds and
//! produces the `ValidReading` the scorers operate on. Validation succeeds
//! only when every field is present and in range; the first violation is
//! reported with the offending field and the bound it violated.

use crate::error::ValidationError;
use crate::models::vitals::{ValidReading, VitalField, VitalReading};

/// Physiological bounds, inclusive on both ends.
///
/// Zero heart or respiratory rate is admitted deliberately: it is the
/// documented "no vital signs" arrest pattern the decision table maps to
/// P4_BLACK. Blood pressure stays strictly positive so the shock index is
/// always well-defined.
pub const HEART_RATE_BOUNDS: (u16, u16) = (0, 300);
/// Systolic pressure bounds (mmHg)
pub const SYSTOLIC_BOUNDS: (u16, u16) = (1, 300);
/// Diastolic pressure bounds (mmHg)
pub const DIASTOLIC_BOUNDS: (u16, u16) = (1, 200);
/// Respiratory rate bounds (breaths/min)
pub const RESPIRATORY_RATE_BOUNDS: (u16, u16) = (0, 80);
/// Oxygen saturation bounds (%)
pub const OXYGEN_SATURATION_BOUNDS: (f64, f64) = (0.0, 100.0);
/// Body temperature bounds (°C)
pub const TEMPERATURE_BOUNDS: (f64, f64) = (25.0, 45.0);
/// Glasgow Coma Scale bounds
pub const COMA_SCALE_BOUNDS: (u8, u8) = (3, 15);

/// Validate a raw reading, returning an immutable `ValidReading`
///
/// No mutation or unit conversion is performed; the validated reading
/// wraps the original values.
pub fn validate(reading: &VitalReading) -> Result<ValidReading, ValidationError> {
    let heart_rate = require_in_range(
        reading.heart_rate,
        VitalField::HeartRate,
        HEART_RATE_BOUNDS,
    )?;
    let systolic = require_in_range(
        reading.blood_pressure_systolic,
        VitalField::BloodPressureSystolic,
        SYSTOLIC_BOUNDS,
    )?;
    let diastolic = require_in_range(
        reading.blood_pressure_diastolic,
        VitalField::BloodPressureDiastolic,
        DIASTOLIC_BOUNDS,
    )?;
    let respiratory_rate = require_in_range(
        reading.respiratory_rate,
        VitalField::RespiratoryRate,
        RESPIRATORY_RATE_BOUNDS,
    )?;
    let oxygen_saturation = require_in_range_f64(
        reading.oxygen_saturation,
        VitalField::OxygenSaturation,
        OXYGEN_SATURATION_BOUNDS,
    )?;
    let temperature = require_in_range_f64(
        reading.temperature,
        VitalField::Temperature,
        TEMPERATURE_BOUNDS,
    )?;
    let coma_scale = require_in_range(
        reading.glasgow_coma_scale,
        VitalField::GlasgowComaScale,
        COMA_SCALE_BOUNDS,
    )?;

    if systolic < diastolic {
        return Err(ValidationError::PressureInverted {
            systolic,
            diastolic,
        });
    }

    Ok(ValidReading::new(
        heart_rate,
        systolic,
        diastolic,
        respiratory_rate,
        oxygen_saturation,
        temperature,
        coma_scale,
        reading.recorded_at,
    ))
}

/// Check presence and bounds for an integer field
fn require_in_range<T>(
    value: Option<T>,
    field: VitalField,
    bounds: (T, T),
) -> Result<T, ValidationError>
where
    T: PartialOrd + Copy + Into<f64>,
{
    let value = value.ok_or(ValidationError::MissingField { field })?;
    if value < bounds.0 || value > bounds.1 {
        return Err(ValidationError::OutOfRange {
            field,
            value: value.into(),
            min: bounds.0.into(),
            max: bounds.1.into(),
        });
    }
    Ok(value)
}

/// Check presence and bounds for a floating-point field
fn require_in_range_f64(
    value: Option<f64>,
    field: VitalField,
    bounds: (f64, f64),
) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField { field })?;
    if !value.is_finite() || value < bounds.0 || value > bounds.1 {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: bounds.0,
            max: bounds.1,
        });
    }
    Ok(value)
}
