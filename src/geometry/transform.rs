//! Conversion between the shared canvas space and an arrow's local
//! drawing space.
//!
//! Shape frames live in one shared coordinate space; each arrow draws and
//! hit-tests in its own local space. The mapping is a pure translation, so
//! applying it per-point every frame is cheaper than any caching scheme.

use super::types::{BoundingBox, Point};

/// Translation from shared canvas coordinates into local drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    /// Canvas-space point that maps to the local origin
    pub origin: Point,
}

impl LocalTransform {
    /// Create a transform whose local origin sits at `origin` in canvas space.
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// The identity mapping (local space equals canvas space).
    pub fn identity() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
        }
    }

    /// Transform anchored at the top-left corner of a bounding box.
    ///
    /// Used by the interaction controller: the arrow's local space is the
    /// union of its two endpoint frames.
    pub fn from_bounds(bounds: &BoundingBox) -> Self {
        Self {
            origin: Point::new(bounds.x, bounds.y),
        }
    }

    /// Map a canvas-space point into local space.
    pub fn to_local(&self, point: Point) -> Point {
        Point {
            x: point.x - self.origin.x,
            y: point.y - self.origin.y,
        }
    }

    /// Map a local-space point back into canvas space.
    pub fn to_canvas(&self, point: Point) -> Point {
        Point {
            x: point.x + self.origin.x,
            y: point.y + self.origin.y,
        }
    }
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::identity()
    }
}
