//! 4x4 homogeneous transform matrices
//!
//! A [`Matrix`] represents an affine transform of 3D space in homogeneous
//! coordinates: row-major, with row/column 3 carrying the translation and
//! perspective-divide terms. The built-in constructors (rotations,
//! translations) always produce a last row of `[0, 0, 0, 1]`; the general
//! [`Cartesian::transform`](crate::Cartesian::transform) routine still
//! honors a projective divide for matrices built by hand.
//!
//! Storage and multiplication are delegated to [`nalgebra`], which the rest
//! of the crate also uses for its linear-algebra plumbing.

use nalgebra::Matrix4;

use crate::coordinates::cartesian::Cartesian;
use crate::tolerance::approx_eq;

/// A 4x4 homogeneous transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    m: Matrix4<f64>,
}

impl Matrix {
    /// The identity transform
    pub fn identity() -> Self {
        Matrix {
            m: Matrix4::identity(),
        }
    }

    /// Builds a matrix from four rows of four elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spaceframe::Matrix;
    ///
    /// let m = Matrix::from_rows([
    ///     [1.0, 0.0, 0.0, 5.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m[(0, 3)], 5.0);
    /// ```
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Matrix {
            m: Matrix4::from_row_slice(&flat),
        }
    }

    /// Produces a matrix which rotates about the X axis by `theta` radians
    ///
    /// Right-handed: a positive `theta` carries +Y toward +Z.
    pub fn rotation_about_x(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Matrix {
            m: Matrix4::new(
                1.0, 0.0, 0.0, 0.0, //
                0.0, cos, -sin, 0.0, //
                0.0, sin, cos, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Produces a matrix which rotates about the Y axis by `theta` radians
    ///
    /// Right-handed: a positive `theta` carries +Z toward +X.
    pub fn rotation_about_y(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Matrix {
            m: Matrix4::new(
                cos, 0.0, sin, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                -sin, 0.0, cos, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Produces a matrix which rotates about the Z axis by `theta` radians
    ///
    /// Right-handed: a positive `theta` carries +X toward +Y.
    pub fn rotation_about_z(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Matrix {
            m: Matrix4::new(
                cos, -sin, 0.0, 0.0, //
                sin, cos, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Produces the identity with the translation column set to `v`
    pub fn translation(v: &Cartesian) -> Self {
        Matrix {
            m: Matrix4::new(
                1.0, 0.0, 0.0, v.x, //
                0.0, 1.0, 0.0, v.y, //
                0.0, 0.0, 1.0, v.z, //
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Returns the matrix product `self * other`
    ///
    /// Matrix multiplication composes transforms right-to-left: the result
    /// applies `other` first, then `self`. Associative, not commutative.
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            m: self.m * other.m,
        }
    }

    /// Elementwise comparison within the crate tolerance
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| approx_eq(*a, *b))
    }

    /// Access to the underlying nalgebra matrix
    pub(crate) fn inner(&self) -> &Matrix4<f64> {
        &self.m
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.m[(row, col)]
    }
}
