//! Coordinate representations and conversions
//!
//! Cartesian and spherical coordinates are two loss-free representations of
//! the same point; [`Orientation`] is a spherical value with the radius
//! fixed at one, representing a pure direction. All three share the
//! [`Coordinate`] conversion capability, with Cartesian as the common
//! intermediate form for arithmetic.

pub mod cartesian;
pub mod orientation;
pub mod spherical;

pub use cartesian::Cartesian;
pub use orientation::Orientation;
pub use spherical::Spherical;

use std::f64::consts::PI;

/// Conversion capability shared by every point-like value
pub trait Coordinate: Sized {
    /// The Cartesian equivalent of this value
    fn to_cartesian(&self) -> Cartesian;

    /// Rebuilds this representation from a Cartesian value
    fn from_cartesian(cart: Cartesian) -> Self;

    /// The spherical equivalent of this value
    fn to_spherical(&self) -> Spherical {
        Spherical::from_cartesian(self.to_cartesian())
    }

    /// Angle in radians `[0, π]` between this value and `other`, both
    /// treated as directions from the origin
    fn angle_between(&self, other: &Self) -> f64 {
        let cart1 = self.to_cartesian();
        let cart2 = other.to_cartesian();

        let mag_product = cart1.magnitude() * cart2.magnitude();
        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = cart1.dot(&cart2) / mag_product;

        // Handle numerical precision issues
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }
}
