//! Kernel-trick geometry of point sets
//!
//! Both estimators work from kernel evaluations between raw samples only; no
//! feature-space coordinates or centroids are ever formed.
//!
//! ```
//! use ndarray::array;
//! use treesvm::geometry::{squared_distance, squared_radius};
//! use treesvm::kernel::LinearKernel;
//!
//! # fn main() -> treesvm::Result<()> {
//! let square = array![[0.0, 0.0], [2.0, 0.0], [0.0, 2.0], [2.0, 2.0]];
//! assert_eq!(squared_radius(square.view(), &LinearKernel::new())?, 2.0);
//!
//! let left = array![[0.0, 0.0], [0.0, 2.0]];
//! let right = array![[4.0, 0.0], [4.0, 2.0]];
//! assert_eq!(squared_distance(left.view(), right.view(), &LinearKernel::new())?, 16.0);
//! # Ok(())
//! # }
//! ```

mod contract;
mod distance;
mod radius;
mod sums;

use crate::core::{EstimatorConfig, PointSet, Result};
use crate::kernel::Kernel;
use ndarray::ArrayView2;

/// Squared radius of the centroid-centered ball enclosing `points`
///
/// Rows of `points` are samples. Fails with `EmptySet` for zero rows and with
/// `ContractViolation` when the kernel yields a negative squared length.
pub fn squared_radius<K: Kernel + ?Sized>(points: ArrayView2<f64>, kernel: &K) -> Result<f64> {
    radius::estimate(points, kernel, &EstimatorConfig::default())
}

/// Squared distance between the feature-space centroids of `a` and `b`
///
/// Symmetric in its arguments, bit for bit. Fails with `EmptySet` if either
/// set has no rows, `DimensionMismatch` if their widths differ and
/// `ContractViolation` when the kernel yields a negative squared length.
pub fn squared_distance<K: Kernel + ?Sized>(
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
    kernel: &K,
) -> Result<f64> {
    distance::estimate(a, b, kernel, &EstimatorConfig::default())
}

/// Squared radius with an explicit configuration
pub fn squared_radius_with<K: Kernel + ?Sized>(
    points: ArrayView2<f64>,
    kernel: &K,
    config: &EstimatorConfig,
) -> Result<f64> {
    radius::estimate(points, kernel, config)
}

/// Squared centroid distance with an explicit configuration
pub fn squared_distance_with<K: Kernel + ?Sized>(
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
    kernel: &K,
    config: &EstimatorConfig,
) -> Result<f64> {
    distance::estimate(a, b, kernel, config)
}

impl PointSet {
    /// Squared radius of this set under `kernel`
    pub fn squared_radius<K: Kernel + ?Sized>(&self, kernel: &K) -> Result<f64> {
        squared_radius(self.points(), kernel)
    }

    /// Squared distance between the centroids of this set and `other`
    pub fn squared_distance<K: Kernel + ?Sized>(&self, other: &PointSet, kernel: &K) -> Result<f64> {
        squared_distance(self.points(), other.points(), kernel)
    }
}
