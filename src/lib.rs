//! Kernel-trick geometry of labeled point sets
//!
//! Measures, in the feature space induced by a kernel, the squared radius of
//! each class and the squared distance between class centroids. These are the
//! quantities a decision-tree-of-SVMs builder uses to decide which classes to
//! separate first.

pub mod api;
pub mod cache;
pub mod core;
pub mod data;
pub mod geometry;
pub mod kernel;
pub mod persistence;

// Re-export main types for convenience
pub use crate::api::{ClassGeometry, GeometryEstimator};
pub use crate::cache::{CacheStats, KernelCache};
pub use crate::core::error::*;
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::data::{load, partition, ClassPartition, CsvFormat};
pub use crate::geometry::{squared_distance, squared_radius};
pub use crate::kernel::{Kernel, LinearKernel};
pub use crate::persistence::GeometryReport;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
