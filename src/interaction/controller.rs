//! Link interaction controller
//!
//! Drives the small interaction state machine for one link: idle,
//! hovering and selected (hovering and selected are independent flags).
//! Geometry is recomputed lazily from fresh shape frames on every render
//! and every hit-test; nothing is cached. Canvas-wide effects (global
//! deselection, removing the link) are delegated to the canvas
//! collaborator.

use log::debug;

use crate::geometry::{compute_arrow, ArrowPath, LocalTransform, Point};
use crate::interaction::canvas::{Canvas, CanvasError};
use crate::interaction::link::LinkRecord;
use crate::stylesheet::Stylesheet;

/// Whether an input event was handled by the controller or must propagate
/// to the default handler (e.g. rubber-band selection on the canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}

impl EventOutcome {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventOutcome::Consumed)
    }
}

/// Keyboard input delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    /// Any other key, identified by its platform key code
    Other(u32),
}

/// Everything needed to draw one link for the current frame.
///
/// Layers are drawn in field order: fill first, then the selection border,
/// then the hover highlight on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowScene {
    /// Arrow outline in local drawing space
    pub path: ArrowPath,
    /// Canvas-space position of the local origin, so the host can place
    /// the drawing
    pub origin: Point,
    /// Fill color for the arrow body
    pub fill: String,
    /// Border stroke color, present while the link is selected
    pub border: Option<String>,
    /// Hover highlight color, present while the pointer is over the link
    pub hover: Option<String>,
}

/// Interaction controller owning one link's view state.
#[derive(Debug, Clone)]
pub struct LinkController {
    link: LinkRecord,
    is_hovering: bool,
    has_focus: bool,
    needs_display: bool,
}

impl LinkController {
    pub fn new(link: LinkRecord) -> Self {
        Self {
            link,
            is_hovering: false,
            has_focus: false,
            needs_display: true,
        }
    }

    /// The persistent link record this controller manages.
    pub fn link(&self) -> &LinkRecord {
        &self.link
    }

    pub fn is_selected(&self) -> bool {
        self.link.is_selected
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    /// True while the controller holds keyboard focus (claimed when the
    /// link is selected by a pointer hit).
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// True when a mutating operation has requested a redraw since the
    /// last render.
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Recompute the arrow for the current shape frames.
    ///
    /// Frames are looked up through the canvas on every call; an absent
    /// arrow (overlapping or degenerate shapes) is a valid transient
    /// state, not an error.
    pub fn arrow_path(&self, canvas: &dyn Canvas) -> Result<Option<ArrowPath>, CanvasError> {
        let origin_frame = canvas.frame_of(&self.link.origin)?;
        let target_frame = canvas.frame_of(&self.link.target)?;
        let to_local = self.local_transform(canvas)?;

        Ok(compute_arrow(
            &origin_frame,
            &target_frame,
            target_frame.center(),
            origin_frame.center(),
            &to_local,
        ))
    }

    /// Mapping from canvas space into this link's local drawing space,
    /// anchored at the top-left of the union of both endpoint frames.
    pub fn local_transform(&self, canvas: &dyn Canvas) -> Result<LocalTransform, CanvasError> {
        let origin_frame = canvas.frame_of(&self.link.origin)?;
        let target_frame = canvas.frame_of(&self.link.target)?;
        Ok(LocalTransform::from_bounds(
            &origin_frame.union(&target_frame),
        ))
    }

    /// Build the drawing for the current frame, clearing the pending
    /// redraw request.
    ///
    /// Returns `Ok(None)` when no arrow can be computed this frame;
    /// nothing is drawn and nothing is hit-testable until the shapes move
    /// apart again.
    pub fn render(
        &mut self,
        canvas: &dyn Canvas,
        stylesheet: &Stylesheet,
    ) -> Result<Option<ArrowScene>, CanvasError> {
        self.needs_display = false;

        let Some(path) = self.arrow_path(canvas)? else {
            return Ok(None);
        };
        let origin = self.local_transform(canvas)?.origin;

        let fill = if self.link.color.is_empty() {
            stylesheet.resolve_or_default("link")
        } else {
            self.link.color.clone()
        };
        let border = self
            .link
            .is_selected
            .then(|| stylesheet.resolve_or_default("selection-stroke"));
        let hover = self
            .is_hovering
            .then(|| stylesheet.resolve_or_default("hover-overlay"));

        Ok(Some(ArrowScene {
            path,
            origin,
            fill,
            border,
            hover,
        }))
    }

    /// Exact containment test of a canvas-space point against the current
    /// arrow. An absent arrow always reports not-hit.
    pub fn hit_test(&self, point: Point, canvas: &dyn Canvas) -> Result<bool, CanvasError> {
        let Some(path) = self.arrow_path(canvas)? else {
            return Ok(false);
        };
        let local = self.local_transform(canvas)?.to_local(point);
        Ok(path.contains(local))
    }

    /// Handle a pointer press at a canvas-space point.
    ///
    /// On a hit the controller deselects everything else on the canvas,
    /// selects this link, claims keyboard focus and reports the selected
    /// color to the wider UI. A miss leaves all state untouched and
    /// returns [`EventOutcome::Ignored`] so the event propagates.
    pub fn on_pointer_down(
        &mut self,
        point: Point,
        canvas: &mut dyn Canvas,
    ) -> Result<EventOutcome, CanvasError> {
        debug!("link {}: pointer down at ({}, {})", self.link.id, point.x, point.y);

        if !self.hit_test(point, canvas)? {
            return Ok(EventOutcome::Ignored);
        }

        canvas.unselect_all_shapes();
        canvas.unselect_all_links();
        self.link.is_selected = true;
        self.has_focus = true;
        canvas.notify_selected_color(&self.link.color);
        self.needs_display = true;
        Ok(EventOutcome::Consumed)
    }

    /// Pointer entered the link's tracking region.
    pub fn on_pointer_enter(&mut self) {
        self.is_hovering = true;
        self.needs_display = true;
    }

    /// Pointer left the link's tracking region.
    pub fn on_pointer_exit(&mut self) {
        self.is_hovering = false;
        self.needs_display = true;
    }

    /// Handle a key press while this controller holds focus.
    ///
    /// Delete requests removal of the link (and of this controller) from
    /// the canvas; every other key propagates to the default handler.
    pub fn on_key_down(&mut self, key: Key, canvas: &mut dyn Canvas) -> EventOutcome {
        debug!("link {}: key down {:?}", self.link.id, key);

        match key {
            Key::Delete if self.has_focus => {
                canvas.remove_link(&self.link.id);
                EventOutcome::Consumed
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Reserved hook for future inline editing (e.g. a label editor).
    /// Currently a no-op that never consumes the event.
    pub fn on_double_click(&mut self, _point: Point) -> EventOutcome {
        EventOutcome::Ignored
    }

    /// Global deselect entry point, invoked by the canvas when any other
    /// element claims the selection.
    pub fn unselect(&mut self) {
        self.link.is_selected = false;
        self.has_focus = false;
        self.needs_display = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use crate::interaction::link::{LinkId, LinkRecord, ShapeId};
    use std::collections::HashMap;

    struct TestCanvas {
        frames: HashMap<ShapeId, BoundingBox>,
        removed: Vec<LinkId>,
    }

    impl TestCanvas {
        fn side_by_side() -> Self {
            let mut frames = HashMap::new();
            frames.insert(ShapeId::new("a"), BoundingBox::new(0.0, 0.0, 100.0, 50.0));
            frames.insert(ShapeId::new("b"), BoundingBox::new(200.0, 0.0, 100.0, 50.0));
            Self {
                frames,
                removed: vec![],
            }
        }
    }

    impl Canvas for TestCanvas {
        fn frame_of(&self, shape: &ShapeId) -> Result<BoundingBox, CanvasError> {
            self.frames
                .get(shape)
                .copied()
                .ok_or_else(|| CanvasError::unknown_shape(shape))
        }

        fn unselect_all_shapes(&mut self) {}
        fn unselect_all_links(&mut self) {}
        fn notify_selected_color(&mut self, _color: &str) {}

        fn remove_link(&mut self, link: &LinkId) {
            self.removed.push(link.clone());
        }
    }

    fn controller() -> LinkController {
        LinkController::new(LinkRecord::new(
            LinkId::new("l1"),
            ShapeId::new("a"),
            ShapeId::new("b"),
            "#2196f3",
        ))
    }

    #[test]
    fn test_hover_toggles_and_requests_redraw() {
        let mut ctrl = controller();
        ctrl.needs_display = false;

        ctrl.on_pointer_enter();
        assert!(ctrl.is_hovering());
        assert!(ctrl.needs_display());

        ctrl.on_pointer_exit();
        assert!(!ctrl.is_hovering());
    }

    #[test]
    fn test_hover_is_independent_of_selection() {
        let mut ctrl = controller();
        ctrl.on_pointer_enter();
        assert!(ctrl.is_hovering());
        assert!(!ctrl.is_selected());
    }

    #[test]
    fn test_delete_without_focus_propagates() {
        let mut ctrl = controller();
        let mut canvas = TestCanvas::side_by_side();
        let outcome = ctrl.on_key_down(Key::Delete, &mut canvas);
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(canvas.removed.is_empty());
    }

    #[test]
    fn test_delete_with_focus_removes_link_once() {
        let mut ctrl = controller();
        let mut canvas = TestCanvas::side_by_side();
        ctrl.on_pointer_down(Point::new(150.0, 25.0), &mut canvas)
            .unwrap();

        let outcome = ctrl.on_key_down(Key::Delete, &mut canvas);
        assert_eq!(outcome, EventOutcome::Consumed);
        assert_eq!(canvas.removed, vec![LinkId::new("l1")]);
    }

    #[test]
    fn test_other_keys_propagate() {
        let mut ctrl = controller();
        let mut canvas = TestCanvas::side_by_side();
        ctrl.on_pointer_down(Point::new(150.0, 25.0), &mut canvas)
            .unwrap();

        let outcome = ctrl.on_key_down(Key::Other(36), &mut canvas);
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(canvas.removed.is_empty());
    }

    #[test]
    fn test_double_click_is_reserved_noop() {
        let mut ctrl = controller();
        let outcome = ctrl.on_double_click(Point::new(150.0, 25.0));
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(!ctrl.is_selected());
    }

    #[test]
    fn test_unselect_clears_selection_and_focus() {
        let mut ctrl = controller();
        let mut canvas = TestCanvas::side_by_side();
        ctrl.on_pointer_down(Point::new(150.0, 25.0), &mut canvas)
            .unwrap();
        assert!(ctrl.is_selected());
        assert!(ctrl.has_focus());

        ctrl.unselect();
        assert!(!ctrl.is_selected());
        assert!(!ctrl.has_focus());
        assert!(ctrl.needs_display());
    }

    #[test]
    fn test_unknown_shape_surfaces_lookup_error() {
        let ctrl = LinkController::new(LinkRecord::new(
            LinkId::new("l1"),
            ShapeId::new("a"),
            ShapeId::new("ghost"),
            "",
        ));
        let canvas = TestCanvas::side_by_side();
        let err = ctrl.arrow_path(&canvas).unwrap_err();
        assert!(matches!(err, CanvasError::UnknownShape { .. }));
    }
}
