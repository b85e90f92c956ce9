//! Rectangle boundary intersection
//!
//! Finds where the line from a rectangle's center toward a focal point
//! crosses the rectangle's perimeter. This is the point where an arrow
//! enters or leaves a shape without overlapping it.

use super::types::{BoundingBox, Point};

/// The four edges of a bounding box, in the fixed scan order used by
/// [`first_intersection_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl RectEdge {
    /// Scan order for boundary intersection. Ties between edges (a segment
    /// passing exactly through a corner) resolve to the earlier edge.
    pub const SCAN_ORDER: [RectEdge; 4] =
        [RectEdge::Top, RectEdge::Right, RectEdge::Bottom, RectEdge::Left];

    /// Endpoints of this edge on the given bounding box.
    pub fn endpoints(&self, bounds: &BoundingBox) -> (Point, Point) {
        let top_left = Point::new(bounds.x, bounds.y);
        let top_right = Point::new(bounds.right(), bounds.y);
        let bottom_left = Point::new(bounds.x, bounds.bottom());
        let bottom_right = Point::new(bounds.right(), bounds.bottom());

        match self {
            RectEdge::Top => (top_left, top_right),
            RectEdge::Right => (top_right, bottom_right),
            RectEdge::Bottom => (bottom_left, bottom_right),
            RectEdge::Left => (top_left, bottom_left),
        }
    }
}

/// Intersection of two line segments `a1..a2` and `b1..b2`.
///
/// Standard parametric clipping: both parameters must land in `[0, 1]`.
/// Parallel or degenerate segments yield None.
pub fn segments_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let r = Point::new(a2.x - a1.x, a2.y - a1.y);
    let s = Point::new(b2.x - b1.x, b2.y - b1.y);

    let denom = r.x * s.y - r.y * s.x;
    if denom.abs() < f64::EPSILON {
        return None;
    }

    let qp = Point::new(b1.x - a1.x, b1.y - a1.y);
    let t = (qp.x * s.y - qp.y * s.x) / denom;
    let u = (qp.x * r.y - qp.y * r.x) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point::new(a1.x + t * r.x, a1.y + t * r.y))
    } else {
        None
    }
}

/// First crossing of the segment from `bounds.center()` toward `focal` with
/// the rectangle perimeter, scanning edges top, right, bottom, left.
///
/// Returns None when no crossing exists: the box has no area, the focal
/// point coincides with the center (degenerate direction), or the focal
/// point lies inside the box so the segment never reaches the boundary.
/// The absence of an intersection is a valid transient state while shapes
/// overlap or are mid-drag, not an error.
pub fn first_intersection_to(bounds: &BoundingBox, focal: Point) -> Option<Point> {
    if bounds.is_empty() {
        return None;
    }

    let center = bounds.center();
    for edge in RectEdge::SCAN_ORDER {
        let (e1, e2) = edge.endpoints(bounds);
        if let Some(hit) = segments_intersection(center, focal, e1, e2) {
            return Some(hit);
        }
    }
    None
}
