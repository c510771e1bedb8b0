//! High-level API for class geometry
//!
//! This module bundles a kernel with an [`EstimatorConfig`] and runs both
//! estimators over every class of a partition: one squared radius per class
//! and one centroid squared distance per pair of classes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use treesvm::api::GeometryEstimator;
//! use treesvm::kernel::RBFKernel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let geometry = GeometryEstimator::with_kernel(RBFKernel::new(0.1))
//!     .with_cache_size(1 << 20)
//!     .class_geometry_from_csv("sat-train.csv")?;
//!
//! for (label, radius) in geometry.labels().iter().zip(geometry.squared_radii()) {
//!     println!("{label}: R² = {radius:.4}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::core::{EstimatorConfig, GeometryError, PointSet, Result};
use crate::data::{load, partition, ClassPartition};
use crate::geometry::{squared_distance_with, squared_radius_with};
use crate::kernel::{Kernel, LinearKernel};
use log::{debug, info};
use ndarray::{Array2, ArrayView2};
use std::path::Path;

/// Kernel plus estimator configuration, built with the builder pattern
pub struct GeometryEstimator<K: Kernel = LinearKernel> {
    kernel: K,
    config: EstimatorConfig,
}

impl GeometryEstimator<LinearKernel> {
    /// Create an estimator with linear kernel and default parameters
    pub fn new() -> Self {
        Self {
            kernel: LinearKernel::new(),
            config: EstimatorConfig::default(),
        }
    }
}

impl Default for GeometryEstimator<LinearKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel> GeometryEstimator<K> {
    /// Create an estimator with a custom kernel
    pub fn with_kernel(kernel: K) -> Self {
        Self {
            kernel,
            config: EstimatorConfig::default(),
        }
    }

    /// Set the kernel cache capacity in Gram entries (0 disables caching)
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.config.cache_size = cache_size;
        self
    }

    /// Set the relative rounding tolerance of the centroid distance check
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// The kernel in use
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The active configuration
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Squared radius of one class
    pub fn squared_radius(&self, set: &PointSet) -> Result<f64> {
        self.validate()?;
        squared_radius_with(set.points(), &self.kernel, &self.config)
    }

    /// Squared distance between the centroids of two classes
    pub fn squared_distance(&self, a: &PointSet, b: &PointSet) -> Result<f64> {
        self.validate()?;
        squared_distance_with(a.points(), b.points(), &self.kernel, &self.config)
    }

    /// Radii of every class and distances between every pair of classes
    pub fn class_geometry(&self, partition: &ClassPartition) -> Result<ClassGeometry> {
        self.validate()?;
        info!(
            "Computing geometry of {} classes with {} kernel",
            partition.len(),
            self.kernel.describe()
        );

        let classes: Vec<&PointSet> = partition.iter().collect();
        let n = classes.len();

        let mut squared_radii = Vec::with_capacity(n);
        for set in &classes {
            let radius = squared_radius_with(set.points(), &self.kernel, &self.config)?;
            debug!("class {:?}: squared radius {:.6}", set.label(), radius);
            squared_radii.push(radius);
        }

        let mut squared_distances = Array2::zeros((n, n));
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = squared_distance_with(
                    classes[i].points(),
                    classes[j].points(),
                    &self.kernel,
                    &self.config,
                )?;
                squared_distances[[i, j]] = distance;
                squared_distances[[j, i]] = distance;
            }
        }

        Ok(ClassGeometry {
            labels: classes.iter().map(|set| set.label().to_string()).collect(),
            sizes: classes.iter().map(|set| set.len()).collect(),
            squared_radii,
            squared_distances,
            dim: partition.dim(),
        })
    }

    /// Load, partition and measure a CSV file
    pub fn class_geometry_from_csv<P: AsRef<Path>>(&self, path: P) -> Result<ClassGeometry> {
        let classes = partition(&load(path)?)?;
        self.class_geometry(&classes)
    }

    fn validate(&self) -> Result<()> {
        let tolerance = self.config.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(GeometryError::InvalidParameter(format!(
                "Tolerance must be a non-negative finite number, got: {tolerance}"
            )));
        }
        Ok(())
    }
}

/// Per-class squared radii and pairwise centroid squared distances
///
/// Classes are indexed in the order of the partition they were computed from.
/// The distance matrix is symmetric with a zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassGeometry {
    labels: Vec<String>,
    sizes: Vec<usize>,
    squared_radii: Vec<f64>,
    squared_distances: Array2<f64>,
    dim: usize,
}

impl ClassGeometry {
    pub(crate) fn from_parts(
        labels: Vec<String>,
        sizes: Vec<usize>,
        squared_radii: Vec<f64>,
        squared_distances: Array2<f64>,
        dim: usize,
    ) -> Result<Self> {
        let n = labels.len();
        for actual in [sizes.len(), squared_radii.len(), squared_distances.nrows(), squared_distances.ncols()] {
            if actual != n {
                return Err(GeometryError::DimensionMismatch { expected: n, actual });
            }
        }
        Ok(Self {
            labels,
            sizes,
            squared_radii,
            squared_distances,
            dim,
        })
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if there are no classes
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Class labels; position i is class index i
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of samples in each class
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Squared radius of each class
    pub fn squared_radii(&self) -> &[f64] {
        &self.squared_radii
    }

    /// Symmetric matrix of centroid squared distances
    pub fn squared_distances(&self) -> ArrayView2<'_, f64> {
        self.squared_distances.view()
    }

    /// Feature dimension of the measured data
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Class index of a label
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Squared radius of a class by label
    pub fn radius(&self, label: &str) -> Result<f64> {
        Ok(self.squared_radii[self.require(label)?])
    }

    /// Squared centroid distance between two classes by label
    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        Ok(self.squared_distances[[self.require(a)?, self.require(b)?]])
    }

    fn require(&self, label: &str) -> Result<usize> {
        self.index_of(label)
            .ok_or_else(|| GeometryError::UnknownClass(label.to_string()))
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;

    /// Load a CSV file and partition it by label
    pub fn load_classes<P: AsRef<Path>>(path: P) -> Result<ClassPartition> {
        partition(&load(path)?)
    }

    /// Class geometry of a CSV file under a linear kernel
    pub fn linear_geometry<P: AsRef<Path>>(path: P) -> Result<ClassGeometry> {
        GeometryEstimator::new().class_geometry_from_csv(path)
    }
}
