//! Error types for kernel geometry computations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed or unreadable input; line 0 when the source cannot be opened
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("Empty point set: {0}")]
    EmptySet(String),

    /// A quantity that is non-negative for every positive-semidefinite kernel
    /// came out negative beyond rounding tolerance.
    #[error("Contract violation: {quantity} is negative ({value:e}); is the kernel positive-semidefinite?")]
    ContractViolation { quantity: &'static str, value: f64 },

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
