//! # Cartesian Coordinate Module
//!
//! Rectangular `(x, y, z)` representation of a point or free vector, and
//! the arithmetic the rest of the crate is built on.
//!
//! ## Design Philosophy
//!
//! Cartesian coordinates are the preferred intermediate format for every
//! operation in the crate:
//! - Linear transformations (rotations, translations) are straightforward
//! - No singularities at the poles, unlike spherical systems
//! - Vector operations (dot products, projections) are direct
//!
//! Spherical values convert here, operate, and convert back.
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values with no normalization or
//! conversion on construction; `(0, 0, 0)` is the distinguished origin.
//!
//! ## Examples
//!
//! ```rust
//! use spaceframe::Cartesian;
//!
//! let p = Cartesian::new(3.0, 4.0, 0.0);
//! assert_eq!(p.magnitude(), 5.0);
//!
//! let q = p.translate(&p.negate());
//! assert!(q.approx_eq(&Cartesian::ORIGIN));
//! ```

use log::warn;
use nalgebra::{Vector3, Vector4};
use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;
use crate::coordinates::orientation::Orientation;
use crate::coordinates::Coordinate;
use crate::matrix::Matrix;
use crate::tolerance::approx_eq;
use crate::{GeometryError, Result};

/// A 3D coordinate in rectangular form
///
/// Can represent a location, a free vector, or a direction; the
/// interpretation depends on context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Cartesian {
    /// The origin `(0, 0, 0)`
    pub const ORIGIN: Cartesian = Cartesian {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new Cartesian coordinate
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian { x, y, z }
    }

    /// Creates the Cartesian point at `radius` along `orientation`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spaceframe::{Cartesian, Orientation};
    /// use std::f64::consts::PI;
    ///
    /// // Two units down the +X axis
    /// let p = Cartesian::from_orientation(&Orientation::from_angles(0.0, PI / 2.0), 2.0);
    /// assert!(p.approx_eq(&Cartesian::new(2.0, 0.0, 0.0)));
    /// ```
    pub fn from_orientation(orientation: &Orientation, radius: f64) -> Self {
        orientation.to_cartesian().scale(radius)
    }

    /// Shifts this point by `other` (componentwise addition)
    pub fn translate(&self, other: &Cartesian) -> Cartesian {
        *self + *other
    }

    /// Scales each component by `factor`
    pub fn scale(&self, factor: f64) -> Cartesian {
        *self * factor
    }

    /// Returns the point directly opposite to this one
    pub fn negate(&self) -> Cartesian {
        -*self
    }

    /// Euclidean distance from the origin: `sqrt(x² + y² + z²)`
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Dot product with `other`
    pub fn dot(&self, other: &Cartesian) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns a unit vector in the same direction, or `None` for the
    /// zero vector
    pub fn normalize(&self) -> Option<Cartesian> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(self.scale(1.0 / mag))
        }
    }

    /// Returns the vector projection of `u` onto this vector
    ///
    /// Computes `self * (u · self) / (self · self)`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateProjection`] when this vector's squared
    /// length is below tolerance; the quotient would not be finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spaceframe::Cartesian;
    ///
    /// let x_axis = Cartesian::new(1.0, 0.0, 0.0);
    /// let p = x_axis.project(&Cartesian::new(2.0, 7.0, -1.0)).unwrap();
    /// assert!(p.approx_eq(&Cartesian::new(2.0, 0.0, 0.0)));
    ///
    /// assert!(Cartesian::ORIGIN.project(&x_axis).is_err());
    /// ```
    pub fn project(&self, u: &Cartesian) -> Result<Cartesian> {
        let denom = self.dot(self);
        if denom < EPSILON {
            warn!("projection onto near-zero vector ({}, {}, {})", self.x, self.y, self.z);
            return Err(GeometryError::DegenerateProjection);
        }
        Ok(self.scale(u.dot(self) / denom))
    }

    /// Applies a 4x4 homogeneous transform to this point
    ///
    /// The point is lifted to `(x, y, z, 1)`, multiplied through the
    /// matrix, and divided by the resulting `w` component.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateTransform`] when `|w|` falls below
    /// tolerance, as can happen for hand-built projective matrices.
    pub fn transform(&self, m: &Matrix) -> Result<Cartesian> {
        let v = self.to_vector3();
        let out = m.inner() * Vector4::new(v.x, v.y, v.z, 1.0);
        if out.w.abs() < EPSILON {
            warn!(
                "homogeneous transform of ({}, {}, {}) produced w = {}",
                self.x, self.y, self.z, out.w
            );
            return Err(GeometryError::DegenerateTransform);
        }
        Ok(Cartesian::new(
            out.x / out.w,
            out.y / out.w,
            out.z / out.w,
        ))
    }

    /// Produces the matrix which translates by this point
    pub fn translation_matrix(&self) -> Matrix {
        Matrix::translation(self)
    }

    /// The direction of this point from the origin
    ///
    /// The origin itself maps to the zero orientation by convention.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_cartesian(*self)
    }

    /// Componentwise comparison within the crate tolerance
    pub fn approx_eq(&self, other: &Cartesian) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }

    /// Converts to a nalgebra `Vector3` for linear-algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from a nalgebra `Vector3`
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl Coordinate for Cartesian {
    fn to_cartesian(&self) -> Cartesian {
        *self
    }

    fn from_cartesian(cart: Cartesian) -> Self {
        cart
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian {
    type Output = Cartesian;

    fn add(self, other: Cartesian) -> Cartesian {
        Cartesian {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian {
    type Output = Cartesian;

    fn sub(self, other: Cartesian) -> Cartesian {
        Cartesian {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian {
    type Output = Cartesian;

    fn mul(self, scalar: f64) -> Cartesian {
        Cartesian {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Neg for Cartesian {
    type Output = Cartesian;

    fn neg(self) -> Cartesian {
        Cartesian {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
