//! Line segment type and intersection classification.
//!
//! Visibility checks need to distinguish a segment that *properly crosses*
//! an obstacle edge (interiors intersect) from one that merely *touches* it
//! (shared vertex, endpoint on an edge, or a collinear run along an edge).
//! Only the former blocks visibility, so the distinction is load-bearing
//! and kept explicit here.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Tolerance for orientation-sign and on-segment classification.
pub const GEOM_EPS: f32 = 1e-6;

/// Orientation of the triple (a, b, c).
///
/// Positive for counter-clockwise, negative for clockwise, near zero for
/// collinear. The magnitude is twice the signed triangle area.
#[inline]
pub fn orientation(a: Point2D, b: Point2D, c: Point2D) -> f32 {
    (b - a).cross(&(c - a))
}

/// Classify an orientation value into a sign, treating |v| <= eps as zero.
#[inline]
fn orientation_sign(v: f32) -> i8 {
    if v > GEOM_EPS {
        1
    } else if v < -GEOM_EPS {
        -1
    } else {
        0
    }
}

/// A 2D line segment between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment2D {
    /// First endpoint.
    pub start: Point2D,
    /// Second endpoint.
    pub end: Point2D,
}

impl Segment2D {
    /// Create a new segment.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end.
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Get a point along the segment at parameter t (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2D {
        self.start + self.direction() * t
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point2D {
        self.point_at(0.5)
    }

    /// Distance from a point to the segment (not the infinite line).
    pub fn distance_to_point(&self, point: Point2D) -> f32 {
        let dir = self.direction();
        let len_sq = dir.dot(&dir);
        if len_sq <= f32::EPSILON {
            return self.start.distance(&point);
        }
        let t = ((point - self.start).dot(&dir) / len_sq).clamp(0.0, 1.0);
        point.distance(&self.point_at(t))
    }

    /// Check whether a point lies on the segment (within tolerance).
    pub fn contains_point(&self, point: Point2D) -> bool {
        if orientation_sign(orientation(self.start, self.end, point)) != 0 {
            return false;
        }
        // Collinear: confirm the point falls inside the segment's extent.
        point.x >= self.start.x.min(self.end.x) - GEOM_EPS
            && point.x <= self.start.x.max(self.end.x) + GEOM_EPS
            && point.y >= self.start.y.min(self.end.y) - GEOM_EPS
            && point.y <= self.start.y.max(self.end.y) + GEOM_EPS
    }

    /// Check whether this segment properly crosses another.
    ///
    /// A proper crossing requires each segment to straddle the other's
    /// supporting line strictly: all four orientation signs are non-zero
    /// and opposite within each pair. Touching configurations (shared
    /// endpoint, endpoint on the other segment, collinear overlap) are
    /// *not* proper crossings.
    pub fn crosses_properly(&self, other: &Segment2D) -> bool {
        let d1 = orientation_sign(orientation(other.start, other.end, self.start));
        let d2 = orientation_sign(orientation(other.start, other.end, self.end));
        let d3 = orientation_sign(orientation(self.start, self.end, other.start));
        let d4 = orientation_sign(orientation(self.start, self.end, other.end));

        d1 != 0 && d2 != 0 && d3 != 0 && d4 != 0 && d1 != d2 && d3 != d4
    }

    /// Check whether this segment intersects another at any point,
    /// including touching endpoints and collinear overlap.
    pub fn intersects(&self, other: &Segment2D) -> bool {
        if self.crosses_properly(other) {
            return true;
        }

        // Degenerate and touching cases: any endpoint on the other segment.
        self.contains_point(other.start)
            || self.contains_point(other.end)
            || other.contains_point(self.start)
            || other.contains_point(self.end)
    }
}
