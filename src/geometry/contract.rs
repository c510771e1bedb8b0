//! Non-negativity checks for feature-space squared lengths

use crate::core::{GeometryError, Result};

/// Verify that a squared length is non-negative
///
/// `scale` is the sum of the absolute values of the terms that were combined
/// to produce `value`. Cancellation between terms of that size can leave a
/// small negative residue, so values down to `-tolerance * scale` are accepted
/// and reported as zero. Anything further below zero, or NaN, is a
/// `ContractViolation`. A zero tolerance accepts no negative value at all.
pub(crate) fn check_non_negative(
    quantity: &'static str,
    value: f64,
    scale: f64,
    tolerance: f64,
) -> Result<f64> {
    let band = tolerance * scale.abs();

    if value.is_nan() || value < -band {
        return Err(GeometryError::ContractViolation { quantity, value });
    }

    Ok(value.max(0.0))
}
