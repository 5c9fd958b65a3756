//! Cardinal spline to cubic Bézier conversion for backends without native splines.

use crate::core::PixelPoint;

/// Tension used for interpolating curves.
pub const DEFAULT_TENSION: f64 = 0.5;

/// One cubic segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub start: PixelPoint,
    pub control1: PixelPoint,
    pub control2: PixelPoint,
    pub end: PixelPoint,
}

/// Segments of an open cardinal spline passing through every point.
///
/// End tangents reuse the end points themselves as the missing neighbours.
#[must_use]
pub fn open_cardinal_segments(points: &[PixelPoint], tension: f64) -> Vec<BezierSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let last = points.len() - 1;
    (0..last)
        .map(|i| {
            let before = points[i.saturating_sub(1)];
            let after = points[(i + 2).min(last)];
            segment(before, points[i], points[i + 1], after, tension)
        })
        .collect()
}

/// Segments of a closed cardinal spline; the last segment returns to the first point.
#[must_use]
pub fn closed_cardinal_segments(points: &[PixelPoint], tension: f64) -> Vec<BezierSegment> {
    let count = points.len();
    if count < 3 {
        return open_cardinal_segments(points, tension);
    }
    (0..count)
        .map(|i| {
            let before = points[(i + count - 1) % count];
            let after = points[(i + 2) % count];
            segment(before, points[i], points[(i + 1) % count], after, tension)
        })
        .collect()
}

fn segment(
    before: PixelPoint,
    start: PixelPoint,
    end: PixelPoint,
    after: PixelPoint,
    tension: f64,
) -> BezierSegment {
    let k = tension / 3.0;
    BezierSegment {
        start,
        control1: start.offset(k * (end.x - before.x), k * (end.y - before.y)),
        control2: end.offset(-k * (after.x - start.x), -k * (after.y - start.y)),
        end,
    }
}
