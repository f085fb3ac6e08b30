//! # Orientation Module
//!
//! A pure direction in space: spherical angles with the radius implicitly
//! one. Orientations carry the angle-wrap arithmetic for the whole crate —
//! azimuth normalization into `[0, 2π)` and the tilt reflection at the
//! poles — plus the orthogonal-decomposition algorithm used to keep two
//! directions perpendicular.
//!
//! ## Angle Convention
//!
//! - `theta`: rotation about the Z axis (azimuth), kept in `[0, 2π)`
//! - `phi`: tilt away from the +Z axis (polar angle), kept in `[0, π]`
//!
//! The zero orientation points along +Z. When `phi` is `0` or `π` (on the
//! polar axis) the azimuth is not meaningful.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::{EPSILON, TAU};
use crate::coordinates::cartesian::Cartesian;
use crate::coordinates::Coordinate;
use crate::matrix::Matrix;
use crate::tolerance::{approx_eq, approx_eq_angle};
use crate::Result;

/// The direction of spherical coordinates, radius fixed at one
///
/// The default value is the zero orientation, pointing along +Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation about the Z axis, in `[0, 2π)`
    pub theta: f64,
    /// Tilt from the Z axis, in `[0, π]`
    pub phi: f64,
}

impl Orientation {
    /// Creates an Orientation from a rotation and a tilt
    ///
    /// Applies [`rotate`](Self::rotate) then [`tilt`](Self::tilt) to the
    /// zero orientation. The order matters: a tilt that crosses a pole
    /// flips the azimuth it was given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spaceframe::Orientation;
    /// use std::f64::consts::PI;
    ///
    /// // Tilting three quarter-turns from +Z lands on -X
    /// let o = Orientation::from_angles(0.0, 3.0 * PI / 2.0);
    /// assert!(o.approx_eq(&Orientation { theta: PI, phi: PI / 2.0 }));
    /// ```
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        Orientation::default().rotate(theta).tilt(phi)
    }

    /// Adjusts the rotation about Z by `dtheta`
    ///
    /// The result is normalized into `[0, 2π)`.
    pub fn rotate(&self, dtheta: f64) -> Orientation {
        Orientation {
            theta: (self.theta + dtheta).rem_euclid(TAU),
            phi: self.phi,
        }
    }

    /// Adjusts the tilt from Z by `dphi`
    ///
    /// The summed tilt is first wrapped into `[0, 2π)`. A value beyond π
    /// has tilted past a pole: the tilt reflects back into range and the
    /// azimuth rotates by π, because crossing the pole faces the opposite
    /// side of the sphere.
    pub fn tilt(&self, dphi: f64) -> Orientation {
        let wrapped = (self.phi + dphi).rem_euclid(TAU);

        if wrapped > PI {
            return Orientation {
                theta: self.theta,
                phi: TAU - wrapped,
            }
            .rotate(PI);
        }

        Orientation {
            theta: self.theta,
            phi: wrapped,
        }
    }

    /// Transforms this direction by the given matrix
    ///
    /// The unit vector is transformed and the angles re-derived; any
    /// length the matrix introduces is discarded.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateTransform`](crate::GeometryError::DegenerateTransform)
    /// when the homogeneous divisor vanishes.
    pub fn transform(&self, m: &Matrix) -> Result<Orientation> {
        Ok(Orientation::from_cartesian(self.to_cartesian().transform(m)?))
    }

    /// Produces the matrix which rotates the +Z axis onto this orientation
    ///
    /// Composed as `Rz(theta) * Ry(phi)`: tilt away from the pole first,
    /// then spin into azimuth.
    pub fn rotation_matrix(&self) -> Matrix {
        let tilt = Matrix::rotation_about_y(self.phi);
        let spin = Matrix::rotation_about_z(self.theta);
        spin.multiply(&tilt)
    }

    /// Produces the azimuth-conjugated rotation `Rz(theta) * Ry(phi) * Rz(-theta)`
    ///
    /// Used when rotating about this direction rather than onto it; the
    /// trailing `Rz(-theta)` undoes the azimuth spin that
    /// [`rotation_matrix`](Self::rotation_matrix) bakes in.
    pub fn axis_rotation_matrix(&self) -> Matrix {
        self.rotation_matrix()
            .multiply(&Matrix::rotation_about_z(-self.theta))
    }

    /// Returns the portion of `other` which is orthogonal to this direction
    ///
    /// Subtracts from `other`'s unit vector its projection onto this
    /// direction; the remainder is perpendicular to `self`. Returns `None`
    /// when `other` is parallel or anti-parallel to `self` — there is no
    /// well-defined perpendicular direction and callers must not treat the
    /// result as a valid facing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spaceframe::Orientation;
    /// use std::f64::consts::PI;
    ///
    /// let pole = Orientation::default();
    /// let tilted = Orientation::from_angles(0.3, PI / 4.0);
    ///
    /// // The orthogonal portion lies in the horizontal plane
    /// let flat = pole.orthogonal_portion(&tilted).unwrap();
    /// assert!(flat.approx_eq(&Orientation { theta: 0.3, phi: PI / 2.0 }));
    ///
    /// // A parallel direction has no perpendicular component
    /// assert!(pole.orthogonal_portion(&pole).is_none());
    /// ```
    pub fn orthogonal_portion(&self, other: &Orientation) -> Option<Orientation> {
        let base = self.to_cartesian();
        let target = other.to_cartesian();

        // base is unit length, so the projection of target onto it is
        // base scaled by their dot product
        let remainder = target - base * target.dot(&base);
        if remainder.magnitude() < EPSILON {
            return None;
        }
        Some(Orientation::from_cartesian(remainder))
    }

    /// Comparison within the crate tolerance
    ///
    /// Azimuths compare modulo a full turn, and are ignored on the polar
    /// axis where they carry no meaning.
    pub fn approx_eq(&self, other: &Orientation) -> bool {
        if !approx_eq(self.phi, other.phi) {
            return false;
        }
        if self.phi < EPSILON || (PI - self.phi).abs() < EPSILON {
            return true;
        }
        approx_eq_angle(self.theta, other.theta)
    }
}

impl Coordinate for Orientation {
    /// The unit vector at this direction
    fn to_cartesian(&self) -> Cartesian {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        Cartesian {
            x: cos_t * sin_p,
            y: sin_t * sin_p,
            z: cos_p,
        }
    }

    /// The direction of `cart` from the origin, radius discarded
    ///
    /// Uses `atan2` in both angles, so every input is defined — including
    /// the origin, which maps to the zero orientation.
    fn from_cartesian(cart: Cartesian) -> Self {
        let horizontal = (cart.x * cart.x + cart.y * cart.y).sqrt();
        Orientation {
            theta: cart.y.atan2(cart.x).rem_euclid(TAU),
            phi: horizontal.atan2(cart.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_points_up() {
        let o = Orientation::default();
        assert!(o.to_cartesian().approx_eq(&Cartesian::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotate_wraps_into_range() {
        let o = Orientation::default().rotate(TAU + 0.5);
        assert_relative_eq!(o.theta, 0.5, epsilon = 1e-12);

        let negative = Orientation::default().rotate(-0.5);
        assert_relative_eq!(negative.theta, TAU - 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_leaves_phi() {
        let o = Orientation { theta: 0.0, phi: 1.0 }.rotate(2.0);
        assert_relative_eq!(o.phi, 1.0);
        assert_relative_eq!(o.theta, 2.0);
    }

    #[test]
    fn test_tilt_within_range() {
        let o = Orientation { theta: 0.0, phi: 0.3 }.tilt(0.4);
        assert_relative_eq!(o.phi, 0.7, epsilon = 1e-12);
        assert_relative_eq!(o.theta, 0.0);
    }

    #[test]
    fn test_tilt_to_pole_does_not_flip() {
        // Landing exactly on the pole keeps the azimuth
        let o = Orientation {
            theta: 0.2,
            phi: PI / 2.0,
        }
        .tilt(PI / 2.0);
        assert_relative_eq!(o.phi, PI, epsilon = 1e-12);
        assert_relative_eq!(o.theta, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_tilt_past_pole_flips_azimuth() {
        let o = Orientation { theta: 1.0, phi: 3.0 }.tilt(0.5);
        assert_relative_eq!(o.phi, TAU - 3.5, epsilon = 1e-12);
        assert_relative_eq!(o.theta, 1.0 + PI, epsilon = 1e-12);
    }

    #[test]
    fn test_tilt_negative_crosses_north_pole() {
        let o = Orientation { theta: 0.0, phi: 0.3 }.tilt(-0.5);
        assert_relative_eq!(o.phi, 0.2, epsilon = 1e-12);
        assert_relative_eq!(o.theta, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_tilt_three_quarter_turn() {
        // +Z tilted by 3π/2 in the θ=0 plane passes -Z and lands on -X
        let o = Orientation::default().tilt(3.0 * PI / 2.0);
        assert!(o.to_cartesian().approx_eq(&Cartesian::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_from_angles_applies_rotate_then_tilt() {
        // The pole-crossing tilt flips the azimuth set by the rotation
        let o = Orientation::from_angles(PI / 2.0, 3.0 * PI / 2.0);
        assert_relative_eq!(o.theta, 3.0 * PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(o.phi, PI / 2.0, epsilon = 1e-12);
        assert!(o.to_cartesian().approx_eq(&Cartesian::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_to_cartesian_is_unit_length() {
        for (theta, phi) in [(0.0, 0.0), (1.0, 1.0), (4.0, 2.5), (6.0, 3.0)] {
            let o = Orientation::from_angles(theta, phi);
            assert_relative_eq!(o.to_cartesian().magnitude(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_from_cartesian_axes() {
        let cases = [
            (Cartesian::new(1.0, 0.0, 0.0), 0.0, PI / 2.0),
            (Cartesian::new(-1.0, 0.0, 0.0), PI, PI / 2.0),
            (Cartesian::new(0.0, 1.0, 0.0), PI / 2.0, PI / 2.0),
            (Cartesian::new(0.0, -1.0, 0.0), 3.0 * PI / 2.0, PI / 2.0),
            (Cartesian::new(0.0, 0.0, 1.0), 0.0, 0.0),
            (Cartesian::new(0.0, 0.0, -1.0), 0.0, PI),
        ];
        for (cart, theta, phi) in cases {
            let o = Orientation::from_cartesian(cart);
            assert!(
                o.approx_eq(&Orientation { theta, phi }),
                "wrong orientation for {:?}: {:?}",
                cart,
                o
            );
        }
    }

    #[test]
    fn test_from_cartesian_origin_is_zero() {
        let o = Orientation::from_cartesian(Cartesian::ORIGIN);
        assert_eq!(o.theta, 0.0);
        assert_eq!(o.phi, 0.0);
    }

    #[test]
    fn test_cartesian_round_trip() {
        for (theta, phi) in [(0.5, 0.5), (2.0, 1.0), (3.5, 2.0), (5.5, 3.0)] {
            let o = Orientation::from_angles(theta, phi);
            let back = Orientation::from_cartesian(o.to_cartesian());
            assert!(back.approx_eq(&o), "round trip failed for {:?}", o);
        }
    }

    #[test]
    fn test_orthogonal_portion_parallel_is_none() {
        let x_axis = Orientation::from_angles(0.0, PI / 2.0);
        assert!(x_axis.orthogonal_portion(&x_axis).is_none());

        let opposite = Orientation::from_angles(PI, PI / 2.0);
        assert!(x_axis.orthogonal_portion(&opposite).is_none());
    }

    #[test]
    fn test_orthogonal_portion_passes_perpendicular() {
        let x_axis = Orientation::from_angles(0.0, PI / 2.0);
        let y_axis = Orientation::from_angles(PI / 2.0, PI / 2.0);
        let portion = x_axis.orthogonal_portion(&y_axis).unwrap();
        assert!(portion.approx_eq(&y_axis));
    }

    #[test]
    fn test_orthogonal_portion_is_perpendicular() {
        let base = Orientation::from_angles(1.2, 0.8);
        let target = Orientation::from_angles(4.0, 2.1);
        let portion = base.orthogonal_portion(&target).unwrap();
        assert_relative_eq!(base.angle_between(&portion), PI / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_orthogonal_portion_of_pole() {
        let pole = Orientation::default();
        let tilted = Orientation::from_angles(0.3, PI / 4.0);
        let flat = pole.orthogonal_portion(&tilted).unwrap();
        assert!(flat.approx_eq(&Orientation {
            theta: 0.3,
            phi: PI / 2.0,
        }));
    }

    #[test]
    fn test_rotation_matrix_carries_pole_onto_orientation() {
        let pole = Cartesian::new(0.0, 0.0, 1.0);
        for (theta, phi) in [(0.0, 0.0), (0.0, PI / 2.0), (PI / 2.0, PI / 2.0), (2.5, 1.0)] {
            let o = Orientation::from_angles(theta, phi);
            let rotated = pole.transform(&o.rotation_matrix()).unwrap();
            assert!(
                rotated.approx_eq(&o.to_cartesian()),
                "rotation matrix missed for θ={}, φ={}",
                theta,
                phi
            );
        }
    }

    #[test]
    fn test_axis_rotation_matrix_of_pole_is_identity() {
        let m = Orientation::default().axis_rotation_matrix();
        assert!(m.approx_eq(&Matrix::identity()));
    }

    #[test]
    fn test_axis_rotation_matrix_zero_azimuth() {
        // With no azimuth the conjugation collapses to the plain tilt
        let o = Orientation::from_angles(0.0, PI / 2.0);
        assert!(o
            .axis_rotation_matrix()
            .approx_eq(&Matrix::rotation_about_y(PI / 2.0)));
    }

    #[test]
    fn test_axis_rotation_matrix_agrees_with_plain_form_on_the_pole() {
        let o = Orientation::from_angles(1.1, 0.7);
        let pole = Cartesian::new(0.0, 0.0, 1.0);

        // The trailing Rz(-θ) fixes the pole, so both forms carry it onto
        // the orientation
        let conjugated = pole.transform(&o.axis_rotation_matrix()).unwrap();
        let plain = pole.transform(&o.rotation_matrix()).unwrap();
        assert!(conjugated.approx_eq(&plain));
        assert!(conjugated.approx_eq(&o.to_cartesian()));

        // Away from the pole the two forms diverge
        let probe = Cartesian::new(1.0, 0.0, 0.0);
        let conjugated = probe.transform(&o.axis_rotation_matrix()).unwrap();
        let plain = probe.transform(&o.rotation_matrix()).unwrap();
        assert!(!conjugated.approx_eq(&plain));
    }

    #[test]
    fn test_transform_by_rotation() {
        let m = Matrix::rotation_about_x(PI / 2.0);
        let o = Orientation::default().transform(&m).unwrap();
        // +Z rotates onto -Y
        assert!(o.approx_eq(&Orientation {
            theta: 3.0 * PI / 2.0,
            phi: PI / 2.0,
        }));
    }

    #[test]
    fn test_approx_eq_wraps_azimuth() {
        let a = Orientation {
            theta: 0.0,
            phi: PI / 2.0,
        };
        let b = Orientation {
            theta: TAU - 1e-9,
            phi: PI / 2.0,
        };
        assert!(a.approx_eq(&b));
    }

    #[test]
    fn test_approx_eq_ignores_azimuth_at_poles() {
        let a = Orientation { theta: 1.0, phi: 0.0 };
        let b = Orientation { theta: 4.0, phi: 0.0 };
        assert!(a.approx_eq(&b));

        let down_a = Orientation { theta: 2.0, phi: PI };
        let down_b = Orientation { theta: 5.0, phi: PI };
        assert!(down_a.approx_eq(&down_b));

        assert!(!a.approx_eq(&down_a));
    }
}
