//! Dual-representation points
//!
//! A [`Vector`] is a point in 3D space tagged with the representation its
//! caller works in. Arithmetic is normalized to Cartesian internally and
//! the result is handed back in the receiver's representation, so callers
//! never see the conversion round trip.

use crate::coordinates::cartesian::Cartesian;
use crate::coordinates::spherical::Spherical;
use crate::coordinates::Coordinate;
use crate::matrix::Matrix;
use crate::Result;

/// A point in 3D space, in either coordinate representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vector {
    /// Rectangular form
    Cartesian(Cartesian),
    /// Radius/azimuth/polar form
    Spherical(Spherical),
}

impl Vector {
    /// The Cartesian equivalent of this point
    pub fn to_cartesian(&self) -> Cartesian {
        match self {
            Vector::Cartesian(c) => *c,
            Vector::Spherical(s) => s.to_cartesian(),
        }
    }

    /// The spherical equivalent of this point
    pub fn to_spherical(&self) -> Spherical {
        match self {
            Vector::Cartesian(c) => c.to_spherical(),
            Vector::Spherical(s) => *s,
        }
    }

    /// Shifts this point by `other`
    pub fn translate(&self, other: &Vector) -> Vector {
        self.with_cartesian(self.to_cartesian().translate(&other.to_cartesian()))
    }

    /// Scales this point by `factor`
    pub fn scale(&self, factor: f64) -> Vector {
        self.with_cartesian(self.to_cartesian().scale(factor))
    }

    /// Returns the point directly opposite to this one
    pub fn negate(&self) -> Vector {
        self.with_cartesian(self.to_cartesian().negate())
    }

    /// Applies a 4x4 homogeneous transform
    pub fn transform(&self, m: &Matrix) -> Result<Vector> {
        Ok(self.with_cartesian(self.to_cartesian().transform(m)?))
    }

    /// Returns the projection of `other` onto this vector
    pub fn project(&self, other: &Vector) -> Result<Vector> {
        Ok(self.with_cartesian(self.to_cartesian().project(&other.to_cartesian())?))
    }

    /// Produces the matrix which translates by this point
    pub fn translation_matrix(&self) -> Matrix {
        self.to_cartesian().translation_matrix()
    }

    /// Comparison within the crate tolerance, across representations
    pub fn approx_eq(&self, other: &Vector) -> bool {
        self.to_cartesian().approx_eq(&other.to_cartesian())
    }

    /// Rewraps a Cartesian result in this value's representation
    fn with_cartesian(&self, cart: Cartesian) -> Vector {
        match self {
            Vector::Cartesian(_) => Vector::Cartesian(cart),
            Vector::Spherical(_) => Vector::Spherical(Spherical::from_cartesian(cart)),
        }
    }
}

impl From<Cartesian> for Vector {
    fn from(cart: Cartesian) -> Self {
        Vector::Cartesian(cart)
    }
}

impl From<Spherical> for Vector {
    fn from(spherical: Spherical) -> Self {
        Vector::Spherical(spherical)
    }
}
