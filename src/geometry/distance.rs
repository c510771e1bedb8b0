//! Squared distance between feature-space centroids of two point sets
//!
//! ```text
//! ||c_A - c_B||² = 1/m² Σ K(a, a') - 2/(m·n) Σ K(a, b) + 1/n² Σ K(b, b')
//! ```
//!
//! Both self sums use the upper-triangular evaluation; the cross sum needs all
//! m·n pairs.

use crate::core::{EstimatorConfig, GeometryError, Result};
use crate::geometry::contract::check_non_negative;
use crate::geometry::sums::{cross_sum, Gram};
use crate::kernel::Kernel;
use log::debug;
use ndarray::ArrayView2;
use std::cmp::Ordering;

pub(crate) fn estimate<K: Kernel + ?Sized>(
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
    kernel: &K,
    config: &EstimatorConfig,
) -> Result<f64> {
    if a.nrows() == 0 || b.nrows() == 0 {
        return Err(GeometryError::EmptySet(
            "centroid distance involving an empty point set is undefined".to_string(),
        ));
    }
    if a.ncols() != b.ncols() {
        return Err(GeometryError::DimensionMismatch {
            expected: a.ncols(),
            actual: b.ncols(),
        });
    }

    // Fixed operand order makes the result bitwise symmetric in (a, b)
    let (a, b) = match canonical_cmp(a, b) {
        Ordering::Greater => (b.view(), a.view()),
        _ => (a.view(), b.view()),
    };

    let m = a.nrows() as f64;
    let n = b.nrows() as f64;

    let first = Gram::new(a, kernel, None).self_sum() / (m * m);
    let cross = -2.0 / (m * n) * cross_sum(a, b, kernel);
    let last = Gram::new(b, kernel, None).self_sum() / (n * n);

    let value = first + cross + last;
    let scale = first.abs() + cross.abs() + last.abs();
    let squared_distance = check_non_negative("squared distance", value, scale, config.tolerance)?;

    debug!(
        "squared distance between sets of {} and {} points: {:.6}",
        a.nrows(),
        b.nrows(),
        squared_distance
    );

    Ok(squared_distance)
}

/// Total order on point sets: by size, then element-wise
fn canonical_cmp(a: ArrayView2<f64>, b: ArrayView2<f64>) -> Ordering {
    a.nrows().cmp(&b.nrows()).then_with(|| {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x.total_cmp(y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}
