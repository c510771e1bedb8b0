//! Core traits for kernel geometry

use ndarray::ArrayView1;

/// Labeled dataset abstraction used by the partitioner
pub trait Dataset: Send + Sync {
    /// Number of samples in the dataset
    fn len(&self) -> usize;

    /// Number of features (dimensionality)
    fn dim(&self) -> usize;

    /// Get a single sample by index
    ///
    /// # Panics
    /// Panics if index >= len()
    fn sample(&self, i: usize) -> ArrayView1<'_, f64>;

    /// Get the label of a single sample
    ///
    /// # Panics
    /// Panics if index >= len()
    fn label(&self, i: usize) -> &str;

    /// Check if the dataset is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
