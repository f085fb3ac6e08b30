//! # Spherical Coordinate Module
//!
//! `(radius, theta, phi)` representation of a point: a distance from the
//! origin plus an [`Orientation`]. Construction and every mutating
//! operation keep the angles normalized — `theta` in `[0, 2π)` and `phi`
//! in `[0, π]`, with out-of-range tilts reflected back through the pole.
//!
//! Arithmetic (translation, scaling, transforms, projection) is expressed
//! by converting to Cartesian, operating there, and converting back, so
//! the two representations always agree within tolerance.
//!
//! ## Degenerate Values
//!
//! When the radius is ~0 the angles carry no meaning, and when `phi` is
//! ~0 or ~π (on the polar axis) the azimuth carries no meaning. The
//! [`approx_eq`](Spherical::approx_eq) predicate treats such values as
//! equal regardless of the meaningless angles.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::EPSILON;
use crate::coordinates::cartesian::Cartesian;
use crate::coordinates::orientation::Orientation;
use crate::coordinates::Coordinate;
use crate::matrix::Matrix;
use crate::tolerance::{approx_eq, approx_eq_angle};
use crate::Result;

/// A 3D coordinate in spherical form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// Distance from the origin, non-negative
    pub radius: f64,
    /// Rotation about the Z axis, kept in `[0, 2π)`
    pub theta: f64,
    /// Tilt from the Z axis, kept in `[0, π]`
    pub phi: f64,
}

impl Spherical {
    /// Creates a new Spherical, normalizing both angles
    ///
    /// The angles pass through the [`Orientation`] wrap logic: rotate by
    /// `theta`, then tilt by `phi`, so a tilt beyond π lands on the far
    /// side of the pole with the azimuth flipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spaceframe::Spherical;
    /// use std::f64::consts::PI;
    ///
    /// let s = Spherical::new(2.0, 0.0, 3.0 * PI / 2.0);
    /// assert!((s.theta - PI).abs() < 1e-12);
    /// assert!((s.phi - PI / 2.0).abs() < 1e-12);
    /// ```
    pub fn new(radius: f64, theta: f64, phi: f64) -> Self {
        let orientation = Orientation::from_angles(theta, phi);
        Spherical {
            radius,
            theta: orientation.theta,
            phi: orientation.phi,
        }
    }

    /// The angles of this point as a pure direction
    pub fn orientation(&self) -> Orientation {
        Orientation {
            theta: self.theta,
            phi: self.phi,
        }
    }

    /// Adjusts the rotation about Z by `dtheta`, radius unchanged
    pub fn rotate(&self, dtheta: f64) -> Spherical {
        let orientation = self.orientation().rotate(dtheta);
        Spherical {
            radius: self.radius,
            theta: orientation.theta,
            phi: orientation.phi,
        }
    }

    /// Adjusts the tilt from Z by `dphi`, radius unchanged
    ///
    /// Tilting past a pole reflects `phi` back into `[0, π]` and rotates
    /// the azimuth by π.
    pub fn tilt(&self, dphi: f64) -> Spherical {
        let orientation = self.orientation().tilt(dphi);
        Spherical {
            radius: self.radius,
            theta: orientation.theta,
            phi: orientation.phi,
        }
    }

    /// Shifts this point by `other`
    ///
    /// Addition happens in Cartesian space; the result converts back to
    /// spherical form.
    pub fn translate(&self, other: &Spherical) -> Spherical {
        Spherical::from_cartesian(self.to_cartesian().translate(&other.to_cartesian()))
    }

    /// Scales this point by `factor`
    ///
    /// A negative factor flips the direction through the origin.
    pub fn scale(&self, factor: f64) -> Spherical {
        Spherical::from_cartesian(self.to_cartesian().scale(factor))
    }

    /// Returns the point directly opposite to this one
    pub fn negate(&self) -> Spherical {
        Spherical::from_cartesian(self.to_cartesian().negate())
    }

    /// Applies a 4x4 homogeneous transform to this point
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateTransform`](crate::GeometryError::DegenerateTransform)
    /// when the homogeneous divisor vanishes.
    pub fn transform(&self, m: &Matrix) -> Result<Spherical> {
        Ok(Spherical::from_cartesian(self.to_cartesian().transform(m)?))
    }

    /// Returns the projection of `u` onto this vector
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateProjection`](crate::GeometryError::DegenerateProjection)
    /// when this vector's length is below tolerance.
    pub fn project(&self, u: &Spherical) -> Result<Spherical> {
        Ok(Spherical::from_cartesian(
            self.to_cartesian().project(&u.to_cartesian())?,
        ))
    }

    /// Produces the matrix which translates by this point
    pub fn translation_matrix(&self) -> Matrix {
        self.to_cartesian().translation_matrix()
    }

    /// Comparison within the crate tolerance, degeneracy-aware
    ///
    /// Radii must agree. Near the origin the angles are unconstrained; on
    /// the polar axis the azimuth is unconstrained; elsewhere the azimuth
    /// compares modulo a full turn.
    pub fn approx_eq(&self, other: &Spherical) -> bool {
        if !approx_eq(self.radius, other.radius) {
            return false;
        }
        // Points close to the origin with very different directions
        if self.radius.abs() < EPSILON {
            return true;
        }

        if !approx_eq(self.phi, other.phi) {
            return false;
        }
        // Points close to the polar axis with very different rotations
        if self.phi < EPSILON || (PI - self.phi).abs() < EPSILON {
            return true;
        }

        approx_eq_angle(self.theta, other.theta)
    }
}

impl Coordinate for Spherical {
    /// `x = R sinφ cosθ`, `y = R sinφ sinθ`, `z = R cosφ`
    fn to_cartesian(&self) -> Cartesian {
        Cartesian::from_orientation(&self.orientation(), self.radius)
    }

    /// `R = sqrt(x² + y² + z²)` with angles via `atan2`
    ///
    /// Total for every input: the origin becomes the zero spherical value.
    fn from_cartesian(cart: Cartesian) -> Self {
        let orientation = Orientation::from_cartesian(cart);
        Spherical {
            radius: cart.magnitude(),
            theta: orientation.theta,
            phi: orientation.phi,
        }
    }

    fn to_spherical(&self) -> Spherical {
        *self
    }
}
