//! Squared radius of a point set in feature space
//!
//! For a set S = {p_1..p_n} with feature-space centroid c, the squared
//! distance of a point p to c expands into kernel evaluations only:
//!
//! ```text
//! ||φ(p) - c||² = K(p, p) - 2/n Σ_q K(p, q) + 1/n² Σ_i Σ_j K(x_i, x_j)
//! ```
//!
//! The last term is the squared norm of the centroid. It does not depend on p
//! and is computed once per call. The squared radius is the maximum of the
//! expression over all points of S: the radius of the smallest ball centered
//! at the centroid that encloses the set (an upper bound on the true minimum
//! enclosing ball radius).
//!
//! Every per-point value must be non-negative. Unlike the centroid distance,
//! where cancellation towards zero is expected for coinciding sets, a negative
//! per-point value is always reported as a `ContractViolation`; the configured
//! tolerance does not apply here.

use crate::cache::KernelCache;
use crate::core::{EstimatorConfig, GeometryError, Result};
use crate::geometry::contract::check_non_negative;
use crate::geometry::sums::Gram;
use crate::kernel::Kernel;
use log::debug;
use ndarray::ArrayView2;

pub(crate) fn estimate<K: Kernel + ?Sized>(
    points: ArrayView2<f64>,
    kernel: &K,
    config: &EstimatorConfig,
) -> Result<f64> {
    let n = points.nrows();
    if n == 0 {
        return Err(GeometryError::EmptySet(
            "squared radius of an empty point set is undefined".to_string(),
        ));
    }

    let cache = (config.cache_size > 0).then(|| KernelCache::for_point_set(n, config.cache_size));
    let mut gram = Gram::new(points.view(), kernel, cache);
    let n = n as f64;

    let centroid_norm = gram.self_sum() / (n * n);

    let mut squared_radius = 0.0_f64;
    for i in 0..points.nrows() {
        let self_term = gram.entry(i, i);
        let cross_term = -2.0 / n * gram.row_sum(i);
        let value = self_term + cross_term + centroid_norm;

        // No rounding band: any negative per-point value is reported
        let value = check_non_negative("squared radius", value, 0.0, 0.0)?;
        squared_radius = squared_radius.max(value);
    }

    match gram.cache() {
        Some(cache) => debug!(
            "squared radius of {} points: {:.6} ({} kernel evaluations, cache hit rate {:.1}%)",
            points.nrows(),
            squared_radius,
            gram.evaluations(),
            cache.hit_rate() * 100.0
        ),
        None => debug!(
            "squared radius of {} points: {:.6} ({} kernel evaluations)",
            points.nrows(),
            squared_radius,
            gram.evaluations()
        ),
    }

    Ok(squared_radius)
}
