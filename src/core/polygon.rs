//! Simple polygon type for workspace obstacles.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::point::Point2D;
use super::segment::Segment2D;

/// A polygonal obstacle: an ordered, non-closing loop of vertices.
///
/// The vertex list does not repeat the first vertex at the end; the closing
/// edge is implicit. Construction does not validate the loop: geometric
/// validity (at least 3 vertices, no self-intersection) is enforced by
/// workspace validation before planning.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Create a polygon from a vertex loop.
    ///
    /// A closing duplicate of the first vertex, if present, is dropped.
    pub fn new(mut vertices: Vec<Point2D>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    /// The vertex loop (non-closing).
    #[inline]
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over the polygon's edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2D> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2D::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Axis-aligned bounding box of the polygon.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for &v in &self.vertices {
            bounds.expand_to_include(v);
        }
        bounds
    }

    /// Check whether a point lies on the polygon boundary (within tolerance).
    pub fn on_boundary(&self, point: Point2D) -> bool {
        self.edges()
            .any(|e| e.distance_to_point(point) <= crate::core::GEOM_EPS)
    }

    /// Check whether a point lies strictly inside the polygon.
    ///
    /// Boundary points are *not* inside: a segment touching the boundary
    /// must not count as covered by the interior.
    pub fn contains_point(&self, point: Point2D) -> bool {
        if self.vertices.len() < 3 || self.on_boundary(point) {
            return false;
        }

        // Even-odd ray cast towards +X.
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > point.y) != (vj.y > point.y) {
                let x_cross = vj.x + (vi.x - vj.x) * (point.y - vj.y) / (vi.y - vj.y);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Check whether the polygon is a simple (non-self-intersecting) loop.
    ///
    /// Non-adjacent edges must not intersect at all; adjacent edges may meet
    /// only at their shared vertex. Zero-length edges make the loop invalid.
    pub fn is_simple(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let edges: Vec<Segment2D> = self.edges().collect();

        for e in &edges {
            if e.length() <= f32::EPSILON {
                return false;
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if adjacent {
                    // Edges meeting at a vertex fold back on themselves if
                    // either free endpoint lands on the other edge.
                    let (free_i, free_j) = if j == i + 1 {
                        (edges[i].start, edges[j].end)
                    } else {
                        (edges[i].end, edges[j].start)
                    };
                    if edges[j].contains_point(free_i) || edges[i].contains_point(free_j) {
                        return false;
                    }
                } else if edges[i].intersects(&edges[j]) {
                    return false;
                }
            }
        }
        true
    }

    /// Check whether this polygon intersects another in any way, including
    /// boundary contact and full containment.
    pub fn intersects(&self, other: &Polygon) -> bool {
        for a in self.edges() {
            for b in other.edges() {
                if a.intersects(&b) {
                    return true;
                }
            }
        }

        // No edge contact: one polygon may still enclose the other.
        match (self.vertices.first(), other.vertices.first()) {
            (Some(&p), Some(&q)) => other.contains_point(p) || self.contains_point(q),
            _ => false,
        }
    }
}
