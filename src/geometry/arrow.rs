//! Arrow path construction and hit-testing
//!
//! An arrow between two shapes is the segment connecting their boundary
//! intersection points, widened into a closed outline with a triangular
//! head at the target end. The same outline serves rendering (fill and
//! stroke) and exact point containment for mouse hit-testing.

use super::intersect::first_intersection_to;
use super::transform::LocalTransform;
use super::types::{BoundingBox, Point};

/// Half-width of the arrow shaft.
pub const SHAFT_HALF_WIDTH: f64 = 2.5;
/// Length of the arrowhead along the shaft direction.
pub const HEAD_LENGTH: f64 = 15.0;
/// Half-width of the arrowhead at its base.
pub const HEAD_HALF_WIDTH: f64 = 7.5;

/// Minimum distance between the two boundary points for an arrow to exist.
/// Below this the direction is undefined (coincident or touching shapes).
const MIN_SEGMENT_LENGTH: f64 = 1e-6;

/// A closed, fillable and strokeable arrow outline in local drawing space.
///
/// The outline is a seven-vertex polygon: four corners of the shaft
/// quadrilateral plus the three corners of the head triangle, wound once
/// around the arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowPath {
    /// Boundary point on the origin shape (local space)
    pub start: Point,
    /// Boundary point on the target shape, the arrow tip (local space)
    pub end: Point,
    outline: Vec<Point>,
}

impl ArrowPath {
    /// Build the arrow outline for the segment `start -> end`.
    ///
    /// Returns None when the segment is too short to carry a direction.
    /// When the segment is shorter than [`HEAD_LENGTH`] the head base
    /// clamps to `start` so the outline stays well-formed.
    pub fn between(start: Point, end: Point) -> Option<Self> {
        let length = start.distance_to(end);
        if length < MIN_SEGMENT_LENGTH {
            return None;
        }

        let dir = Point::new((end.x - start.x) / length, (end.y - start.y) / length);
        let perp = Point::new(-dir.y, dir.x);

        let head_length = HEAD_LENGTH.min(length);
        let base = Point::new(end.x - dir.x * head_length, end.y - dir.y * head_length);

        let offset = |p: Point, v: Point, scale: f64| -> Point {
            Point::new(p.x + v.x * scale, p.y + v.y * scale)
        };

        let outline = vec![
            offset(start, perp, SHAFT_HALF_WIDTH),
            offset(base, perp, SHAFT_HALF_WIDTH),
            offset(base, perp, HEAD_HALF_WIDTH),
            end,
            offset(base, perp, -HEAD_HALF_WIDTH),
            offset(base, perp, -SHAFT_HALF_WIDTH),
            offset(start, perp, -SHAFT_HALF_WIDTH),
        ];

        Some(Self {
            start,
            end,
            outline,
        })
    }

    /// The outline vertices, wound once around the arrow.
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Exact point-in-path containment test (even-odd rule).
    ///
    /// Used for hit-testing mouse clicks against the rendered arrow.
    pub fn contains(&self, point: Point) -> bool {
        let pts = &self.outline;
        let mut inside = false;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let (pi, pj) = (pts[i], pts[j]);
            if (pi.y > point.y) != (pj.y > point.y)
                && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Axis-aligned bounding box of the outline.
    pub fn bounds(&self) -> BoundingBox {
        let min_x = self.outline.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = self
            .outline
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_y = self.outline.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = self
            .outline
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Convert the outline to an SVG path `d` attribute string.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.outline.iter().enumerate() {
            if i == 0 {
                d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
            } else {
                d.push_str(&format!(" L{:.2} {:.2}", p.x, p.y));
            }
        }
        d.push_str(" Z");
        d
    }
}

/// Compute the arrow connecting two shape frames.
///
/// `origin_focal` is the point the arrow aims at when leaving the origin
/// shape (typically the target shape's reference point) and `target_focal`
/// the point it comes from when entering the target shape. Both boundary
/// points are transformed into local space via `to_local` before the
/// outline is built.
///
/// Returns None whenever either boundary intersection cannot be computed
/// (coincident or zero-sized rectangles, focal point inside or at the
/// center of its rectangle) or the trimmed segment degenerates. This is a
/// valid transient state while shapes overlap or are mid-drag; geometry is
/// recomputed every render, so it self-heals on the next frame.
pub fn compute_arrow(
    origin_rect: &BoundingBox,
    target_rect: &BoundingBox,
    origin_focal: Point,
    target_focal: Point,
    to_local: &LocalTransform,
) -> Option<ArrowPath> {
    let p1 = first_intersection_to(origin_rect, origin_focal)?;
    let p2 = first_intersection_to(target_rect, target_focal)?;
    ArrowPath::between(to_local.to_local(p1), to_local.to_local(p2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn side_by_side() -> (BoundingBox, BoundingBox) {
        (
            BoundingBox::new(0.0, 0.0, 100.0, 50.0),
            BoundingBox::new(200.0, 0.0, 100.0, 50.0),
        )
    }

    #[test]
    fn test_endpoints_on_boundaries() {
        let (origin, target) = side_by_side();
        let arrow = compute_arrow(
            &origin,
            &target,
            target.center(),
            origin.center(),
            &LocalTransform::identity(),
        )
        .unwrap();

        assert!(approx_eq(arrow.start.x, 100.0));
        assert!(approx_eq(arrow.start.y, 25.0));
        assert!(approx_eq(arrow.end.x, 200.0));
        assert!(approx_eq(arrow.end.y, 25.0));
    }

    #[test]
    fn test_coincident_rects_yield_no_arrow() {
        let rect = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let arrow = compute_arrow(
            &rect,
            &rect,
            rect.center(),
            rect.center(),
            &LocalTransform::identity(),
        );
        assert!(arrow.is_none());
    }

    #[test]
    fn test_zero_area_rect_yields_no_arrow() {
        let origin = BoundingBox::new(0.0, 0.0, 0.0, 0.0);
        let target = BoundingBox::new(200.0, 0.0, 100.0, 50.0);
        let arrow = compute_arrow(
            &origin,
            &target,
            target.center(),
            origin.center(),
            &LocalTransform::identity(),
        );
        assert!(arrow.is_none());
    }

    #[test]
    fn test_touching_rects_yield_no_arrow() {
        // Shared edge: both boundary points coincide, no direction
        let origin = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let target = BoundingBox::new(100.0, 0.0, 100.0, 50.0);
        let arrow = compute_arrow(
            &origin,
            &target,
            target.center(),
            origin.center(),
            &LocalTransform::identity(),
        );
        assert!(arrow.is_none());
    }

    #[test]
    fn test_contains_point_on_shaft() {
        let (origin, target) = side_by_side();
        let arrow = compute_arrow(
            &origin,
            &target,
            target.center(),
            origin.center(),
            &LocalTransform::identity(),
        )
        .unwrap();

        // Strictly on the segment body; the shaft half-width covers y=25
        assert!(arrow.contains(Point::new(150.0, 25.0)));
    }

    #[test]
    fn test_contains_rejects_far_point() {
        let (origin, target) = side_by_side();
        let arrow = compute_arrow(
            &origin,
            &target,
            target.center(),
            origin.center(),
            &LocalTransform::identity(),
        )
        .unwrap();

        assert!(!arrow.contains(Point::new(150.0, 200.0)));
        assert!(!arrow.contains(Point::new(500.0, 25.0)));
    }

    #[test]
    fn test_contains_respects_shaft_width() {
        let (origin, target) = side_by_side();
        let arrow = compute_arrow(
            &origin,
            &target,
            target.center(),
            origin.center(),
            &LocalTransform::identity(),
        )
        .unwrap();

        // Just inside and just outside the shaft half-width
        assert!(arrow.contains(Point::new(150.0, 25.0 + SHAFT_HALF_WIDTH - 0.1)));
        assert!(!arrow.contains(Point::new(150.0, 25.0 + SHAFT_HALF_WIDTH + 0.1)));
    }

    #[test]
    fn test_contains_point_in_head() {
        let (origin, target) = side_by_side();
        let arrow = compute_arrow(
            &origin,
            &target,
            target.center(),
            origin.center(),
            &LocalTransform::identity(),
        )
        .unwrap();

        // Inside the head triangle but outside the shaft width
        assert!(arrow.contains(Point::new(187.0, 25.0 + SHAFT_HALF_WIDTH + 1.0)));
    }

    #[test]
    fn test_local_space_conversion() {
        let (origin, target) = side_by_side();
        let local = LocalTransform::new(Point::new(100.0, 25.0));
        let arrow = compute_arrow(&origin, &target, target.center(), origin.center(), &local)
            .unwrap();

        assert!(approx_eq(arrow.start.x, 0.0));
        assert!(approx_eq(arrow.start.y, 0.0));
        assert!(approx_eq(arrow.end.x, 100.0));
        assert!(approx_eq(arrow.end.y, 0.0));
    }

    #[test]
    fn test_short_segment_clamps_head() {
        let arrow = ArrowPath::between(Point::new(0.0, 0.0), Point::new(5.0, 0.0)).unwrap();
        // Head base clamps to the start; outline stays seven points
        assert_eq!(arrow.outline().len(), 7);
        let bounds = arrow.bounds();
        assert!(bounds.x >= -EPSILON);
        assert!(approx_eq(bounds.right(), 5.0));
    }

    #[test]
    fn test_degenerate_segment_yields_none() {
        let p = Point::new(10.0, 10.0);
        assert!(ArrowPath::between(p, p).is_none());
    }

    #[test]
    fn test_bounds_cover_head_width() {
        let arrow = ArrowPath::between(Point::new(0.0, 0.0), Point::new(100.0, 0.0)).unwrap();
        let bounds = arrow.bounds();
        assert!(approx_eq(bounds.y, -HEAD_HALF_WIDTH));
        assert!(approx_eq(bounds.bottom(), HEAD_HALF_WIDTH));
    }

    #[test]
    fn test_svg_d_is_closed() {
        let arrow = ArrowPath::between(Point::new(0.0, 0.0), Point::new(100.0, 0.0)).unwrap();
        let d = arrow.to_svg_d();
        assert!(d.starts_with("M0.00 2.50"));
        assert!(d.ends_with(" Z"));
        assert_eq!(d.matches(" L").count(), 6);
    }
}
