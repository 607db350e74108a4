mod cap;
mod triangulate;
mod vertex_ring;

pub use cap::Cap;
pub use triangulate::Triangulate;

use crate::math::Point3;

/// Triangles as index triples into a polygon's own vertex order.
pub type TriangleIndexList = Vec<[u32; 3]>;

/// Flat render buffers: vertex coordinates and triangle indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex coordinates, three per vertex (`x, y, z`).
    pub vertices: Vec<f32>,
    /// Triangle vertex indices, three per triangle.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Number of vertices in the buffer.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles in the buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position of vertex `i`.
    #[must_use]
    pub fn position(&self, i: usize) -> Option<Point3> {
        let xyz = self.vertices.get(i * 3..i * 3 + 3)?;
        Some(Point3::new(
            f64::from(xyz[0]),
            f64::from(xyz[1]),
            f64::from(xyz[2]),
        ))
    }

    /// Iterates over the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Appends triangles whose indices are shifted by `offset`.
    pub fn extend_triangles(&mut self, triangles: &[[u32; 3]], offset: u32) {
        self.indices.reserve(triangles.len() * 3);
        for tri in triangles {
            self.indices.extend(tri.iter().map(|&i| i + offset));
        }
    }
}

/// Flattens points into a single-precision `x, y, z` coordinate buffer.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn flatten_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Vec<f32> {
    points
        .into_iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}
