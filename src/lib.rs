//! Spaceframe: a small 3D spatial-geometry kernel
//!
//! This crate represents points and free vectors in two coordinate systems
//! (Cartesian and spherical), converts between them, and applies affine
//! transforms (translation, rotation, projection) through 4x4 homogeneous
//! matrices. On top of the point types it models oriented entities: an
//! [`Object`] carries a location, a primary facing direction, and a
//! secondary rotation axis that is kept orthogonal to the facing.

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod matrix;
pub mod object;
pub mod tolerance;
pub mod vector;

// Re-export commonly used types
pub use coordinates::cartesian::Cartesian;
pub use coordinates::orientation::Orientation;
pub use coordinates::spherical::Spherical;
pub use coordinates::Coordinate;
pub use matrix::Matrix;
pub use object::{Object, Tangible};
pub use vector::Vector;

/// Main error type for the spaceframe library
///
/// All angle arithmetic in the crate is total and never fails; the only
/// failure conditions are numerical degeneracies in projection and in the
/// homogeneous perspective divide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Projection onto a vector whose squared length is below tolerance.
    #[error("cannot project onto a zero-length vector")]
    DegenerateProjection,

    /// Homogeneous transform whose `w` divisor is below tolerance.
    #[error("homogeneous transform produced a zero divisor")]
    DegenerateTransform,
}

/// Result type for spaceframe operations
pub type Result<T> = std::result::Result<T, GeometryError>;
