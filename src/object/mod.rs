//! Objects situated in space
//!
//! An [`Object`] owns a location, a primary facing, and a secondary
//! rotation axis. The rotation is never stored as given: every
//! constructor and setter re-derives it as the portion orthogonal to the
//! current facing, so `rotation ⟂ orientation` holds after any mutation.
//!
//! Objects are plain single-owner values; callers needing concurrent
//! mutation must serialize access externally.

use log::debug;

use crate::coordinates::cartesian::Cartesian;
use crate::coordinates::orientation::Orientation;

/// Something which exists at a place and a facing in space
pub trait Tangible {
    /// Returns the physical location of the entity
    fn location(&self) -> Cartesian;
    /// Changes the physical location of the entity
    fn set_location(&mut self, location: Cartesian);

    /// Returns the primary facing of the entity
    fn orientation(&self) -> Orientation;
    /// Changes the primary facing, re-deriving the stored rotation
    fn set_orientation(&mut self, orientation: Orientation);

    /// Returns the secondary rotation axis, orthogonal to the facing
    fn rotation(&self) -> Orientation;
    /// Changes the rotation; only its orthogonal portion is stored
    fn set_rotation(&mut self, rotation: Orientation);
}

/// An entity with a location, a facing, and an orthogonal rotation axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    location: Cartesian,
    orientation: Orientation,
    // Always the portion of the requested rotation orthogonal to
    // orientation
    rotation: Orientation,
}

impl Object {
    /// Creates an object, storing only the orthogonal portion of `rotation`
    pub fn new(location: Cartesian, orientation: Orientation, rotation: Orientation) -> Self {
        Object {
            location,
            orientation,
            rotation: orthogonalized(&orientation, &rotation),
        }
    }
}

impl Tangible for Object {
    fn location(&self) -> Cartesian {
        self.location
    }

    fn set_location(&mut self, location: Cartesian) {
        self.location = location;
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.rotation = orthogonalized(&orientation, &self.rotation);
    }

    fn rotation(&self) -> Orientation {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Orientation) {
        self.rotation = orthogonalized(&self.orientation, &rotation);
    }
}

/// The portion of `rotation` orthogonal to `orientation`, collapsing a
/// parallel request to the default orientation
fn orthogonalized(orientation: &Orientation, rotation: &Orientation) -> Orientation {
    orientation.orthogonal_portion(rotation).unwrap_or_else(|| {
        debug!("requested rotation is parallel to the orientation; storing the default");
        Orientation::default()
    })
}
