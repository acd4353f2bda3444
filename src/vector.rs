use std::fmt;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{Result, VectorError};

/// Default tolerance for the zero-vector, orthogonality, and parallelism
/// predicates.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub fn new(coordinates: Vec<f64>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        if let Some(position) = coordinates.iter().position(|c| !c.is_finite()) {
            return Err(VectorError::InvalidCoordinate(position));
        }
        Ok(Self {
            data: Array1::from_vec(coordinates),
        })
    }

    pub fn from_slice(coordinates: &[f64]) -> Result<Self> {
        Self::new(coordinates.to_vec())
    }

    // Internal constructor for results of operations on already-validated
    // vectors.
    pub(crate) fn from_data(data: Array1<f64>) -> Self {
        Self { data }
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn coordinates(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub(crate) fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch(
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(())
    }

    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Vector::from_data(&self.data + &other.data))
    }

    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Vector::from_data(&self.data - &other.data))
    }

    pub fn times_scalar(&self, scalar: f64) -> Vector {
        Vector::from_data(&self.data * scalar)
    }

    pub fn magnitude(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    pub fn normalized(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::ZeroVector);
        }
        Ok(self.times_scalar(1.0 / magnitude))
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_with_tolerance(DEFAULT_TOLERANCE)
    }

    pub fn is_zero_with_tolerance(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, ")")
    }
}
