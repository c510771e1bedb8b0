//! Data loading and class partitioning
//!
//! A delimited file is parsed into a [`LabeledPoints`](crate::core::LabeledPoints)
//! collection, which is then grouped by label into a [`ClassPartition`].

pub mod csv;
pub mod partition;

pub use self::csv::*;
pub use self::partition::*;
