pub mod error;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{LofterError, Result};
pub use math::Point3;
pub use operations::{AdjacencyMatrix, Loft, LoftParams, RepairPolicy};
pub use tessellation::{Cap, MeshBuffers, TriangleIndexList, Triangulate};

/// Lofts two closed paths into a triangle collar with default parameters.
///
/// # Errors
///
/// See [`Loft::execute`].
pub fn loft(start: &[Point3], end: &[Point3]) -> Result<MeshBuffers> {
    Loft::new(start, end).execute()
}

/// Triangulates a planar closed polygon by ear clipping.
///
/// # Errors
///
/// See [`Triangulate::execute`].
pub fn triangulate(polygon: &[Point3]) -> Result<TriangleIndexList> {
    Triangulate::new(polygon).execute()
}
