//! Geometry report serialization
//!
//! A [`ClassGeometry`] together with the kernel and settings that produced it
//! is written as pretty-printed JSON, so that a classifier run can reuse the
//! measurements without recomputing the quadratic kernel sums.

use crate::api::ClassGeometry;
use crate::core::{EstimatorConfig, GeometryError, Result};
use crate::kernel::Kernel;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializable representation of a class geometry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeometryReport {
    /// One entry per class, in class index order
    pub classes: Vec<ClassSummary>,
    /// Row-major centroid squared distances
    pub squared_distances: Vec<Vec<f64>>,
    /// Kernel description
    pub kernel: String,
    /// Report metadata
    pub metadata: ReportMetadata,
}

/// Size and squared radius of one class
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassSummary {
    pub label: String,
    pub n_samples: usize,
    pub squared_radius: f64,
}

/// Metadata for tracking and validation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportMetadata {
    /// Library version used to create the report
    pub library_version: String,
    /// Feature dimension of the measured data
    pub n_features: usize,
    /// Kernel cache capacity used (Gram entries)
    pub cache_size: usize,
    /// Rounding tolerance used by the centroid distance check
    pub tolerance: f64,
    /// Creation timestamp
    pub created_at: String,
}

impl GeometryReport {
    /// Snapshot a class geometry
    pub fn from_class_geometry<K: Kernel + ?Sized>(
        geometry: &ClassGeometry,
        kernel: &K,
        config: &EstimatorConfig,
    ) -> Self {
        let classes = geometry
            .labels()
            .iter()
            .zip(geometry.sizes())
            .zip(geometry.squared_radii())
            .map(|((label, &n_samples), &squared_radius)| ClassSummary {
                label: label.clone(),
                n_samples,
                squared_radius,
            })
            .collect();

        let squared_distances = geometry
            .squared_distances()
            .outer_iter()
            .map(|row| row.to_vec())
            .collect();

        Self {
            classes,
            squared_distances,
            kernel: kernel.describe(),
            metadata: ReportMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                n_features: geometry.dim(),
                cache_size: config.cache_size,
                tolerance: config.tolerance,
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Rebuild the class geometry
    pub fn to_class_geometry(&self) -> Result<ClassGeometry> {
        let n = self.classes.len();
        let mut squared_distances = Array2::zeros((n, n));

        if self.squared_distances.len() != n {
            return Err(GeometryError::DimensionMismatch {
                expected: n,
                actual: self.squared_distances.len(),
            });
        }
        for (i, row) in self.squared_distances.iter().enumerate() {
            if row.len() != n {
                return Err(GeometryError::DimensionMismatch {
                    expected: n,
                    actual: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                squared_distances[[i, j]] = value;
            }
        }

        ClassGeometry::from_parts(
            self.classes.iter().map(|c| c.label.clone()).collect(),
            self.classes.iter().map(|c| c.n_samples).collect(),
            self.classes.iter().map(|c| c.squared_radius).collect(),
            squared_distances,
            self.metadata.n_features,
        )
    }

    /// Save report to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(GeometryError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| GeometryError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load report from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(GeometryError::IoError)?;
        let reader = BufReader::new(file);
        let report = serde_json::from_reader(reader)
            .map_err(|e| GeometryError::SerializationError(e.to_string()))?;
        Ok(report)
    }

    /// Print report summary
    pub fn print_summary(&self) {
        println!("=== Class Geometry Summary ===");
        println!("Kernel: {}", self.kernel);
        println!("Classes: {}", self.classes.len());
        println!("Features: {}", self.metadata.n_features);
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
        println!("Estimator Parameters:");
        println!("  Cache Size: {}", self.metadata.cache_size);
        println!("  Tolerance: {:e}", self.metadata.tolerance);
    }
}
