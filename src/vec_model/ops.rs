use std::f64::consts::PI;

use super::*;

impl Vector {
    /// componentwise sum
    pub fn add(&self, other: &Vector) -> Result<Vector, VecError> {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    /// componentwise difference
    pub fn subtract(&self, other: &Vector) -> Result<Vector, VecError> {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Result<Vector, VecError> {
        Vector::new(self.x * scalar, self.y * scalar)
    }

    /// componentwise division
    ///
    /// a zero scalar turns the components infinite, which the construction
    /// gate rejects
    pub fn divide(&self, scalar: f64) -> Result<Vector, VecError> {
        Vector::new(self.x / scalar, self.y / scalar)
    }

    /// flip both components
    pub fn inverse(&self) -> Result<Vector, VecError> {
        Vector::new(-self.x, -self.y)
    }

    /// squared length, cheaper when only comparing
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// direction in radians, always in [0, 2π)
    ///
    /// the zero vector maps to 0. axis aligned vectors skip the arctangent
    /// branch so x never divides zero
    pub fn angle(&self) -> f64 {
        if self.x == 0.0 {
            return if self.y > 0.0 {
                PI / 2.0
            } else if self.y < 0.0 {
                3.0 * PI / 2.0
            } else {
                0.0
            };
        }
        if self.y == 0.0 {
            return if self.x > 0.0 { 0.0 } else { PI };
        }
        let theta = (self.y / self.x).atan();
        if self.x < 0.0 {
            // quadrants II and III
            theta + PI
        } else if self.y < 0.0 {
            // quadrant IV
            theta + 2.0 * PI
        } else {
            theta
        }
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// signed z component of the 3d cross product
    pub fn cross(&self, other: &Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_squared(&self, other: &Vector) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Vector) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// unsigned angle between two vectors in radians
    ///
    /// both inputs must have non zero magnitude, a zero length input
    /// divides zero and the NaN propagates to the caller
    pub fn angle_between(&self, other: &Vector) -> f64 {
        (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
    }

    /// unit vector with the same direction
    ///
    /// the zero vector stays the zero vector instead of raising a
    /// division error
    pub fn normalize(&self) -> Result<Vector, VecError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Ok(Vector::ZERO);
        }
        self.divide(mag)
    }

    /// keep direction, cap magnitude at limit
    ///
    /// limit must be non negative
    pub fn clamp(&self, limit: f64) -> Result<Vector, VecError> {
        if self.magnitude() > limit {
            return Vector::from_polar(limit, self.angle());
        }
        Ok(*self)
    }

    /// rotate about pivot by radians, counter clockwise positive
    pub fn rotate(&self, pivot: &Vector, radians: f64) -> Result<Vector, VecError> {
        let (sin, cos) = radians.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Vector::new(dx * cos - dy * sin + pivot.x, dx * sin + dy * cos + pivot.y)
    }

    /// step by magnitude along the direction given in radians
    pub fn offset(&self, magnitude: f64, radians: f64) -> Result<Vector, VecError> {
        self.add(&Vector::from_polar(magnitude, radians)?)
    }

    pub fn midpoint(&self, other: &Vector) -> Result<Vector, VecError> {
        self.add(other)?.divide(2.0)
    }

    /// projection of self onto other
    ///
    /// other must have non zero magnitude
    pub fn proj(&self, other: &Vector) -> Result<Vector, VecError> {
        other.multiply(self.dot(other) / other.magnitude_squared())
    }

    /// the two unit normals, at +90 and -90 degrees
    pub fn perpendiculars(&self) -> Result<(Vector, Vector), VecError> {
        let left = Vector::new(-self.y, self.x)?.normalize()?;
        let right = Vector::new(self.y, -self.x)?.normalize()?;
        Ok((left, right))
    }

    /// mean of a non empty list of vectors
    pub fn avg(vectors: &[Vector]) -> Result<Vector, VecError> {
        if vectors.is_empty() {
            return Err(VecError::EmptyInput);
        }
        let mut sum = Vector::ZERO;
        for v in vectors {
            sum = sum.add(v)?;
        }
        sum.divide(vectors.len() as f64)
    }
}
