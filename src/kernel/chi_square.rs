//! Chi-Square Kernel Implementation
//!
//! The Chi-square kernel is particularly effective for histogram and distribution data.
//!
//! The Chi-square kernel is defined as:
//! K(x, y) = exp(-γ * χ²(x, y))
//!
//! Where χ²(x, y) = Σᵢ (xᵢ - yᵢ)² / (xᵢ + yᵢ) for xᵢ + yᵢ > 0
//!
//! Features are expected to be non-negative; components whose sum is not
//! positive are skipped.

use crate::kernel::traits::Kernel;
use ndarray::ArrayView1;

/// Chi-square kernel for histogram and distribution data
#[derive(Debug, Clone)]
pub struct ChiSquareKernel {
    /// Scaling parameter gamma (must be positive)
    pub gamma: f64,
}

impl ChiSquareKernel {
    /// Creates a new Chi-square kernel with the specified gamma parameter
    ///
    /// # Examples
    /// ```
    /// use treesvm::kernel::ChiSquareKernel;
    ///
    /// let kernel = ChiSquareKernel::new(1.0);
    /// assert_eq!(kernel.gamma, 1.0);
    /// ```
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive");

        Self { gamma }
    }

    /// Creates a chi-square kernel with unit gamma (1.0)
    pub fn unit_gamma() -> Self {
        Self::new(1.0)
    }

    /// Creates a chi-square kernel with gamma = 1.0 / n_features
    pub fn with_auto_gamma(n_features: usize) -> Self {
        let gamma = 1.0 / n_features as f64;
        Self::new(gamma)
    }
}

impl Kernel for ChiSquareKernel {
    fn compute(&self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (-self.gamma * chi_square_distance(x, y)).exp()
    }

    fn describe(&self) -> String {
        format!("chi-square(gamma={})", self.gamma)
    }
}

/// Computes χ²(x, y) = Σᵢ (xᵢ - yᵢ)² / (xᵢ + yᵢ) for xᵢ + yᵢ > 0
fn chi_square_distance(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    let mut distance = 0.0;

    for (&a, &b) in x.iter().zip(y.iter()) {
        let sum = a + b;
        if sum > 0.0 {
            let diff = a - b;
            distance += (diff * diff) / sum;
        }
    }

    distance
}
