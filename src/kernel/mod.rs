//! Kernel functions for feature-space geometry

pub mod chi_square;
pub mod linear;
pub mod polynomial;
pub mod rbf;
pub mod traits;

pub use self::chi_square::*;
pub use self::linear::*;
pub use self::polynomial::*;
pub use self::rbf::*;
pub use self::traits::*;
