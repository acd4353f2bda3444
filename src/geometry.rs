use crate::vector::{Vector, DEFAULT_TOLERANCE};
use crate::{Result, VectorError};

impl Vector {
    pub fn dot_product(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self.coordinates().dot(other.coordinates()))
    }

    pub fn angle_with(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot_product(other)?;
        let norms = self.magnitude() * other.magnitude();
        if norms == 0.0 {
            return Err(VectorError::ZeroVectorAngle);
        }
        // Rounding in the division can push the ratio just outside acos's
        // domain.
        let cosine = (dot / norms).clamp(-1.0, 1.0);
        Ok(cosine.acos())
    }

    pub fn angle_with_degrees(&self, other: &Vector) -> Result<f64> {
        Ok(self.angle_with(other)?.to_degrees())
    }

    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_to_with_tolerance(other, DEFAULT_TOLERANCE)
    }

    pub fn is_orthogonal_to_with_tolerance(
        &self,
        other: &Vector,
        tolerance: f64,
    ) -> Result<bool> {
        Ok(self.dot_product(other)?.abs() < tolerance)
    }

    /// True when either vector is zero, or the angle between them is `0` or
    /// `π` within [`DEFAULT_TOLERANCE`] (measured on the cosine).
    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool> {
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let dot = self.dot_product(other)?;
        // acos amplifies rounding near the ends of its domain; compare
        // cosines instead of angles.
        let cosine = (dot / (self.magnitude() * other.magnitude())).clamp(-1.0, 1.0);
        Ok(1.0 - cosine.abs() < DEFAULT_TOLERANCE)
    }

    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector> {
        match basis.normalized() {
            Ok(unit) => {
                let weight = self.dot_product(&unit)?;
                Ok(unit.times_scalar(weight))
            }
            Err(VectorError::ZeroVector) => Err(VectorError::NoUniqueParallelComponent),
            Err(other) => Err(other),
        }
    }

    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector> {
        match self.component_parallel_to(basis) {
            Ok(projection) => self.minus(&projection),
            Err(VectorError::NoUniqueParallelComponent) => {
                Err(VectorError::NoUniqueOrthogonalComponent)
            }
            Err(other) => Err(other),
        }
    }
}
