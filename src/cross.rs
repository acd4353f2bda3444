use ndarray::Array1;

use crate::vector::Vector;
use crate::{Result, VectorError};

impl Vector {
    /// Cross product, defined for two- and three-dimensional vectors. A
    /// two-dimensional pair is embedded in three dimensions with a zero
    /// third coordinate, so the result is always three-dimensional.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        match self.dimension() {
            2 => self.embedded_in_3d().cross(&other.embedded_in_3d()),
            3 => {
                let a = self.coordinates();
                let b = other.coordinates();
                Ok(Vector::from_data(Array1::from_vec(vec![
                    a[1] * b[2] - a[2] * b[1],
                    -(a[0] * b[2] - a[2] * b[0]),
                    a[0] * b[1] - a[1] * b[0],
                ])))
            }
            dimension => Err(VectorError::UnsupportedDimension(dimension)),
        }
    }

    pub fn area_of_parallelogram_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.area_of_parallelogram_with(other)? / 2.0)
    }

    fn embedded_in_3d(&self) -> Vector {
        let mut coordinates = self.coordinates().to_vec();
        coordinates.push(0.0);
        Vector::from_data(Array1::from_vec(coordinates))
    }
}
