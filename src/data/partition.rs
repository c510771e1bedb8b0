//! Grouping of a labeled collection into per-class point sets

use crate::core::{Dataset, GeometryError, PointSet, Result};
use log::{info, warn};
use ndarray::Array2;
use std::collections::HashMap;

/// Group the samples of `dataset` by label
///
/// Within each class samples keep their source order. Classes are ordered by
/// first appearance, so repeated calls produce identical partitions.
pub fn partition<D: Dataset>(dataset: &D) -> Result<ClassPartition> {
    ClassPartition::from_dataset(dataset)
}

/// Mapping from label to the dense point set of that class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassPartition {
    classes: Vec<PointSet>,
    index: HashMap<String, usize>,
}

impl ClassPartition {
    /// Partition a dataset by label
    pub fn from_dataset<D: Dataset>(dataset: &D) -> Result<Self> {
        let dim = dataset.dim();
        let mut buckets: Vec<(String, usize, Vec<f64>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for i in 0..dataset.len() {
            let label = dataset.label(i);
            let slot = match index.get(label) {
                Some(&slot) => slot,
                None => {
                    index.insert(label.to_string(), buckets.len());
                    buckets.push((label.to_string(), 0, Vec::new()));
                    buckets.len() - 1
                }
            };

            let (_, count, values) = &mut buckets[slot];
            *count += 1;
            values.extend(dataset.sample(i).iter().copied());
        }

        let classes = buckets
            .into_iter()
            .map(|(label, count, values)| {
                if count == 1 {
                    warn!("Class {label:?} has a single sample");
                }
                let points = Array2::from_shape_vec((count, dim), values)?;
                Ok(PointSet::new(label, points))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Partitioned {} samples into {} classes",
            dataset.len(),
            classes.len()
        );

        Ok(Self { classes, index })
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if there are no classes
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Labels in order of first appearance
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|set| set.label())
    }

    /// Position of a label in [`labels`](Self::labels)
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Point set of a class, if present
    pub fn get(&self, label: &str) -> Option<&PointSet> {
        self.index_of(label).map(|i| &self.classes[i])
    }

    /// Point set of a class, failing with `UnknownClass` if absent
    pub fn class(&self, label: &str) -> Result<&PointSet> {
        self.get(label)
            .ok_or_else(|| GeometryError::UnknownClass(label.to_string()))
    }

    /// Iterate over the point sets in label order
    pub fn iter(&self) -> std::slice::Iter<'_, PointSet> {
        self.classes.iter()
    }

    /// Total number of samples across all classes
    pub fn total_samples(&self) -> usize {
        self.classes.iter().map(PointSet::len).sum()
    }

    /// Feature dimension shared by every class (0 when empty)
    pub fn dim(&self) -> usize {
        self.classes.first().map(PointSet::dim).unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a ClassPartition {
    type Item = &'a PointSet;
    type IntoIter = std::slice::Iter<'a, PointSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
