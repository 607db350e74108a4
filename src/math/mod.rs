pub mod angle;
pub mod polygon_2d;
pub mod polygon_3d;

use crate::error::{GeometryError, Result};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Minimum number of vertices of a closed path.
pub const MIN_PATH_VERTICES: usize = 3;

/// Checks that a closed path has enough vertices to bound an area.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewVertices`] for paths with fewer than three vertices.
pub fn ensure_closed_path(path: &[Point3]) -> Result<()> {
    if path.len() < MIN_PATH_VERTICES {
        return Err(GeometryError::TooFewVertices {
            count: path.len(),
            min: MIN_PATH_VERTICES,
        }
        .into());
    }
    Ok(())
}
