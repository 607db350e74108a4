use std::f64::consts::PI;

use tracing::debug;

use super::vertex_ring::VertexRing;
use super::TriangleIndexList;
use crate::error::{Result, TriangulationError};
use crate::math::angle::normalize_angle;
use crate::math::polygon_2d::{is_clockwise, point_in_triangle};
use crate::math::polygon_3d::newell_normal;
use crate::math::{ensure_closed_path, Point3, TOLERANCE};
use crate::operations::planarize::transform_to_plane_along;

/// Triangulates a planar closed polygon by ear clipping.
///
/// Emits `n - 2` triangles as `(prev, tip, next)` index triples into the
/// polygon's own vertex order. Each step clips the live ear with the smallest
/// interior angle, which keeps skinny triangles for last.
pub struct Triangulate<'a> {
    polygon: &'a [Point3],
}

/// Ear candidacy of one vertex against its current neighbours.
#[derive(Debug, Clone, Copy)]
struct Tip {
    verts: [usize; 3],
    angle: f64,
    is_ear: bool,
}

impl<'a> Triangulate<'a> {
    /// Creates a new `Triangulate` operation.
    #[must_use]
    pub fn new(polygon: &'a [Point3]) -> Self {
        Self { polygon }
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon has fewer than three vertices or encloses no
    /// area, and [`TriangulationError::NoEarFound`] if clipping stalls, which
    /// happens for self-intersecting input.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleIndexList> {
        ensure_closed_path(self.polygon)?;
        let n = self.polygon.len();

        // The Newell normal follows the polygon's own winding, so the projection
        // is counter-clockwise unless the normal points straight down.
        let normal = newell_normal(self.polygon)?;
        let points = transform_to_plane_along(self.polygon, &normal);
        let winding = if is_clockwise(&points) { -1.0 } else { 1.0 };

        let mut ring = VertexRing::new(n);
        let mut tips: Vec<Tip> = (0..n)
            .map(|i| Tip::compute(&ring, &points, winding, i))
            .collect();

        let required = n - 2;
        let mut triangles = Vec::with_capacity(required);
        while ring.len() > 2 {
            let best = ring
                .iter()
                .filter(|&i| tips[i].is_ear)
                .min_by(|&a, &b| tips[a].angle.total_cmp(&tips[b].angle))
                .ok_or(TriangulationError::NoEarFound {
                    emitted: triangles.len(),
                    required,
                })?;

            let [prev, tip, next] = tips[best].verts;
            triangles.push([prev as u32, tip as u32, next as u32]);
            tips[tip].is_ear = false;
            ring.remove(tip);

            tips[prev] = Tip::compute(&ring, &points, winding, prev);
            tips[next] = Tip::compute(&ring, &points, winding, next);
        }

        debug!(vertices = n, triangles = triangles.len(), "triangulated polygon");
        Ok(triangles)
    }
}

impl Tip {
    /// Measures the interior angle at `i` and checks whether `(prev, i, next)` is an ear.
    ///
    /// An ear is convex and contains no other live vertex, boundary included.
    /// Vertices coincident with one of the corners are ignored.
    fn compute(ring: &VertexRing, points: &[Point3], winding: f64, i: usize) -> Self {
        let prev = ring.prev(i);
        let next = ring.next(i);
        let (a, v, b) = (&points[prev], &points[i], &points[next]);

        let to_prev = a - v;
        let to_next = b - v;
        let cross = (to_next.x * to_prev.y - to_next.y * to_prev.x) * winding;
        let dot = to_next.x * to_prev.x + to_next.y * to_prev.y;
        let angle = normalize_angle(cross.atan2(dot));

        let verts = [prev, i, next];
        if angle >= PI - TOLERANCE {
            return Self {
                verts,
                angle,
                is_ear: false,
            };
        }

        let blocked = ring.iter().any(|k| {
            let p = &points[k];
            !verts.contains(&k) && p != a && p != v && p != b && point_in_triangle(p, a, v, b)
        });

        Self {
            verts,
            angle,
            is_ear: !blocked,
        }
    }
}
