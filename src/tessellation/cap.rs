use super::{flatten_points, MeshBuffers, Triangulate};
use crate::error::Result;
use crate::math::Point3;

/// Builds a flat cap mesh over a single closed polygon.
///
/// The vertex buffer is the polygon itself, in its original order; the index
/// buffer is its ear-clipping triangulation.
pub struct Cap<'a> {
    path: &'a [Point3],
}

impl<'a> Cap<'a> {
    /// Creates a new `Cap` operation.
    #[must_use]
    pub fn new(path: &'a [Point3]) -> Self {
        Self { path }
    }

    /// Executes the triangulation and assembles the buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon cannot be triangulated.
    pub fn execute(&self) -> Result<MeshBuffers> {
        let triangles = Triangulate::new(self.path).execute()?;
        let mut mesh = MeshBuffers {
            vertices: flatten_points(self.path),
            indices: Vec::new(),
        };
        mesh.extend_triangles(&triangles, 0);
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn cap_buffers_match_polygon() {
        let hexagon: Vec<Point3> = (0..6)
            .map(|k| {
                let a = f64::from(k) * std::f64::consts::FRAC_PI_3;
                p(a.cos() * 2.0, 3.0, a.sin() * 2.0)
            })
            .collect();
        let mesh = Cap::new(&hexagon).execute().unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.vertices.len(), 18);
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.indices.iter().all(|&i| i < 6));
        assert_eq!(mesh.position(0).unwrap(), p(2.0, 3.0, 0.0));
    }

    #[test]
    fn cap_of_degenerate_polygon_fails() {
        let line = vec![p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0)];
        assert!(Cap::new(&line).execute().is_err());
    }
}
