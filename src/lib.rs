pub mod cross;
pub mod geometry;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("The coordinates must not be empty")]
    EmptyCoordinates,
    #[error("Coordinate at position {0} is not a finite number")]
    InvalidCoordinate(usize),
    #[error("Dimension mismatch: {0} vs {1}")]
    DimensionMismatch(usize, usize),
    #[error("Could not normalize Zero vector")]
    ZeroVector,
    #[error("A zero vector has no angle")]
    ZeroVectorAngle,
    #[error("No unique parallel component to a zero basis vector")]
    NoUniqueParallelComponent,
    #[error("No unique orthogonal component to a zero basis vector")]
    NoUniqueOrthogonalComponent,
    #[error("Only defined in two, three dimensions")]
    UnsupportedDimension(usize),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use utils::generate_random_vectors;
pub use vector::{Vector, DEFAULT_TOLERANCE};
