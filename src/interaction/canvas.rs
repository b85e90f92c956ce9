//! Canvas collaborator interface
//!
//! The canvas is the single owner of all shapes and links. The link
//! controller treats it as an opaque service: shape frames are looked up
//! fresh every render, and canvas-wide effects (global deselection,
//! removing a link) are delegated through this trait rather than broadcast.

use thiserror::Error;

use crate::geometry::BoundingBox;
use crate::interaction::link::{LinkId, ShapeId};

/// Errors reported by the canvas collaborator.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A shape identifier no longer resolves on the canvas. This is a
    /// precondition violation of the external interface, reported rather
    /// than masked.
    #[error("unknown shape '{id}'")]
    UnknownShape { id: ShapeId },
}

impl CanvasError {
    pub fn unknown_shape(id: &ShapeId) -> Self {
        Self::UnknownShape { id: id.clone() }
    }
}

/// Services the canvas provides to a link controller.
///
/// Structural mutations (adding/removing links and shapes) are serialized
/// by the canvas on the single interaction thread; no locking is involved.
pub trait Canvas {
    /// Current bounding box of a shape. Called on every render because
    /// shapes may have moved since the last one; the result is never
    /// cached by the controller.
    fn frame_of(&self, shape: &ShapeId) -> Result<BoundingBox, CanvasError>;

    /// Deselect every shape on the canvas.
    fn unselect_all_shapes(&mut self);

    /// Deselect every link on the canvas, including this controller's.
    fn unselect_all_links(&mut self);

    /// Inform the wider UI of the newly selected link's color, e.g. so a
    /// color picker can follow the selection.
    fn notify_selected_color(&mut self, color: &str);

    /// Destroy the link and release its controller.
    fn remove_link(&mut self, link: &LinkId);
}
