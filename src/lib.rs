//! Canvas Link - directed connectors between shapes on an interactive canvas
//!
//! This library provides the geometry engine and interaction controller for
//! a directed arrow ("link") between two movable, resizable shapes: the
//! arrow is clipped to both shape boundaries, rendered as a fillable and
//! strokeable outline, and hit-tested exactly for selection, hover
//! highlighting and deletion. The surrounding canvas (shape ownership,
//! event loop, windowing) stays on the host side behind the [`Canvas`]
//! trait.
//!
//! # Example
//!
//! ```rust
//! use canvas_link::geometry::{compute_arrow, BoundingBox, LocalTransform, Point};
//!
//! let origin = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
//! let target = BoundingBox::new(200.0, 0.0, 100.0, 50.0);
//!
//! let arrow = compute_arrow(
//!     &origin,
//!     &target,
//!     target.center(),
//!     origin.center(),
//!     &LocalTransform::identity(),
//! )
//! .unwrap();
//!
//! // The arrow starts and ends on the shape boundaries and is clickable
//! // along its body.
//! assert_eq!(arrow.start, Point::new(100.0, 25.0));
//! assert_eq!(arrow.end, Point::new(200.0, 25.0));
//! assert!(arrow.contains(Point::new(150.0, 25.0)));
//! ```

pub mod geometry;
pub mod interaction;
pub mod renderer;
pub mod stylesheet;

pub use geometry::{compute_arrow, ArrowPath, BoundingBox, LocalTransform, Point};
pub use interaction::{
    ArrowScene, Canvas, CanvasError, EventOutcome, Key, LinkController, LinkId, LinkRecord,
    ShapeId,
};
pub use renderer::{render_link_fragment, SvgConfig};
pub use stylesheet::{Stylesheet, StylesheetError};

/// Render one link to an SVG fragment with the current canvas state.
///
/// Convenience wiring of [`LinkController::render`] and
/// [`render_link_fragment`]. Returns `Ok(None)` when no arrow can be
/// computed this frame (overlapping or degenerate shapes), which a host
/// should treat as "draw nothing" rather than an error.
pub fn render_link(
    controller: &mut LinkController,
    canvas: &dyn Canvas,
    stylesheet: &Stylesheet,
    config: &SvgConfig,
) -> Result<Option<String>, CanvasError> {
    let scene = controller.render(canvas, stylesheet)?;
    Ok(scene.map(|scene| render_link_fragment(&scene, config)))
}
