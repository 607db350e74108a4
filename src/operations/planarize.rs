use nalgebra::{Rotation3, Unit};

use crate::error::Result;
use crate::math::polygon_2d::{center, is_clockwise};
use crate::math::polygon_3d::leading_normal;
use crate::math::{ensure_closed_path, Point3, Vector3, TOLERANCE};

/// Maps a closed path onto the `z = 0` plane.
///
/// The plane normal comes from the first two edges of the path (see
/// [`leading_normal`]) and is rotated onto `+z`.
///
/// # Errors
///
/// Returns an error if the path has fewer than three vertices or its leading
/// vertices are collinear.
pub fn transform_to_plane(path: &[Point3]) -> Result<Vec<Point3>> {
    ensure_closed_path(path)?;
    let normal = leading_normal(path)?;
    Ok(transform_to_plane_along(path, &normal))
}

/// Rotates every vertex so that the unit `normal` maps onto `+z`, then flattens to `z = 0`.
///
/// When `normal` is already parallel or anti-parallel to `+z` the rotation axis
/// vanishes and the vertices are only flattened. The explicit flattening also
/// absorbs the floating-point drift left by the rotation.
#[must_use]
pub fn transform_to_plane_along(path: &[Point3], normal: &Vector3) -> Vec<Point3> {
    let target = Vector3::z();
    let Some(axis) = Unit::try_new(normal.cross(&target), TOLERANCE) else {
        return path.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect();
    };
    let angle = normal.dot(&target).clamp(-1.0, 1.0).acos();
    let rotation = Rotation3::from_axis_angle(&axis, angle);
    path.iter()
        .map(|p| {
            let q = rotation * p;
            Point3::new(q.x, q.y, 0.0)
        })
        .collect()
}

/// A private working copy of a closed path, normalized for connectivity work.
///
/// The copy is planar at `z = 0`, centered on its bounding box and wound
/// counter-clockwise. Each working vertex remembers the index it had in the
/// caller's path, so output indices can refer to the untransformed input.
#[derive(Debug, Clone)]
pub struct PlanarPath {
    points: Vec<Point3>,
    source: Vec<usize>,
}

impl PlanarPath {
    /// Planarizes, centers and orients a copy of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has fewer than three vertices or its leading
    /// vertices are collinear.
    pub fn new(path: &[Point3]) -> Result<Self> {
        let mut points = transform_to_plane(path)?;
        center(&mut points);
        let mut source: Vec<usize> = (0..path.len()).collect();
        if is_clockwise(&points) {
            points.reverse();
            source.reverse();
        }
        Ok(Self { points, source })
    }

    /// The normalized working vertices.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Index of working vertex `i` in the caller's original path.
    #[must_use]
    pub fn source_index(&self, i: usize) -> usize {
        self.source[i]
    }

    /// Returns `true` if the working copy runs opposite to the caller's path.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.source.first().is_some_and(|&first| first != 0)
    }
}
