//! RBF (Radial Basis Function) kernel implementation
//!
//! The RBF kernel is defined as: K(x, y) = exp(-γ * ||x - y||²)
//! where γ (gamma) is a hyperparameter that controls the kernel width.

use crate::kernel::Kernel;
use ndarray::ArrayView1;

/// RBF (Radial Basis Function) kernel: K(x, y) = exp(-γ * ||x - y||²)
///
/// Every point has unit norm in the induced feature space (K(x, x) = 1), so
/// squared radii are bounded by 1 and squared centroid distances by 4.
/// The gamma parameter controls how quickly similarity decays:
/// - High gamma: only very close points look similar, classes spread apart
/// - Low gamma: distant points still look similar, classes collapse together
///
/// Common gamma values:
/// - 1.0 / n_features: good default starting point
/// - Manual tuning based on validation performance
#[derive(Debug, Clone, Copy)]
pub struct RBFKernel {
    gamma: f64,
}

impl RBFKernel {
    /// Create a new RBF kernel with specified gamma parameter
    ///
    /// # Arguments
    /// * `gamma` - The gamma parameter (must be positive)
    ///
    /// # Panics
    /// Panics if gamma is not positive
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma }
    }

    /// Create RBF kernel with gamma = 1.0 / n_features
    ///
    /// # Panics
    /// Panics if `n_features` is zero
    pub fn with_auto_gamma(n_features: usize) -> Self {
        assert!(n_features > 0, "Number of features must be positive");
        let gamma = 1.0 / n_features as f64;
        Self::new(gamma)
    }

    /// Create RBF kernel with gamma = 1.0 (unit gamma)
    pub fn unit_gamma() -> Self {
        Self::new(1.0)
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for RBFKernel {
    /// Default RBF kernel with gamma = 1.0
    fn default() -> Self {
        Self::unit_gamma()
    }
}

impl Kernel for RBFKernel {
    fn compute(&self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        let squared_distance = squared_euclidean_distance(x, y);
        (-self.gamma * squared_distance).exp()
    }

    fn describe(&self) -> String {
        format!("rbf(gamma={})", self.gamma)
    }
}

/// Compute squared Euclidean distance ||x - y||² = Σᵢ (xᵢ - yᵢ)²
fn squared_euclidean_distance(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| {
            let diff = a - b;
            diff * diff
        })
        .sum()
}
