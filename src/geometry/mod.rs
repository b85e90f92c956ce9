//! Pure arrow-construction and hit-testing engine
//!
//! Given the frames of two shapes and a focal point for each, this module
//! computes the shortest connecting segment clipped to both shape
//! boundaries and widens it into a closed arrow outline usable both for
//! rendering and for exact point-in-shape hit-testing. Everything here is
//! pure: no state, no caching, recomputed from fresh frames every render.

pub mod arrow;
pub mod intersect;
pub mod transform;
pub mod types;

pub use arrow::{compute_arrow, ArrowPath, HEAD_HALF_WIDTH, HEAD_LENGTH, SHAFT_HALF_WIDTH};
pub use intersect::{first_intersection_to, segments_intersection, RectEdge};
pub use transform::LocalTransform;
pub use types::{BoundingBox, Point};
