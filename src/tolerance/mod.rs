//! Floating-point approximate equality
//!
//! Every equality check in the crate goes through these predicates with the
//! fixed tolerance [`EPSILON`](crate::constants::EPSILON). Angles get their
//! own predicate so that values on either side of the 0/2π seam compare
//! equal.

use crate::constants::{EPSILON, TAU};

/// Returns true iff `a` and `b` differ by less than [`EPSILON`](crate::constants::EPSILON)
///
/// # Examples
///
/// ```rust
/// use spaceframe::tolerance::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + 1e-9));
/// assert!(!approx_eq(1.0, 1.1));
/// ```
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Approximate equality for angles in radians, modulo a full turn
///
/// An azimuth just below 2π and one just above 0 describe the same
/// direction; a plain difference check would reject them.
pub fn approx_eq_angle(a: f64, b: f64) -> bool {
    let diff = (a - b).rem_euclid(TAU);
    diff < EPSILON || TAU - diff < EPSILON
}
