//! Core type definitions for kernel geometry

use crate::core::{Dataset, GeometryError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Feature matrix with one label per row
///
/// Rows are samples, columns are features. Every row has exactly one label at
/// the same position and all rows share the same width.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoints {
    features: Array2<f64>,
    labels: Vec<String>,
}

impl LabeledPoints {
    /// Create a collection from a feature matrix and a parallel label vector
    pub fn new(features: Array2<f64>, labels: Vec<String>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(GeometryError::DimensionMismatch {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    /// Borrow the feature matrix
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Borrow the labels, one per row
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Dataset for LabeledPoints {
    fn len(&self) -> usize {
        self.features.nrows()
    }

    fn dim(&self) -> usize {
        self.features.ncols()
    }

    fn sample(&self, i: usize) -> ArrayView1<'_, f64> {
        self.features.row(i)
    }

    fn label(&self, i: usize) -> &str {
        &self.labels[i]
    }
}

/// All samples of one class, stored as a dense matrix (rows = samples)
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    label: String,
    points: Array2<f64>,
}

impl PointSet {
    /// Create a point set
    pub fn new(label: impl Into<String>, points: Array2<f64>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Class label shared by every point
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the points
    pub fn points(&self) -> ArrayView2<'_, f64> {
        self.points.view()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    /// Number of features per point
    pub fn dim(&self) -> usize {
        self.points.ncols()
    }

    /// Check if the set has no points
    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }
}

/// Configuration for the geometry estimators
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Kernel cache capacity in Gram entries (0 disables caching)
    pub cache_size: usize,
    /// Relative rounding tolerance for the centroid distance check
    pub tolerance: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            cache_size: 0,
            tolerance: 1e-9,
        }
    }
}
