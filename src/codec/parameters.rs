//! Method-parameter checks.

use crate::domain::ParameterError;

/// Validates that a cut threshold lies in `[0.0, 1.0]` inclusive.
pub fn check_cut_threshold(value: f64) -> Result<(), ParameterError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ParameterError::CutThresholdOutOfRange { value });
    }
    Ok(())
}
