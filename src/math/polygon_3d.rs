use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Unit normal of the plane through the first three vertices of a path.
///
/// Computed as `(p1 - p0) × (p2 - p0)`, so its sign follows the turn made by the
/// leading vertices rather than the winding of the whole path.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the path has fewer than three vertices
/// or its first three vertices are collinear.
pub fn leading_normal(path: &[Point3]) -> Result<Vector3> {
    let [p0, p1, p2, ..] = path else {
        return Err(GeometryError::Degenerate("plane needs three leading vertices".into()).into());
    };
    let normal = (p1 - p0).cross(&(p2 - p0));
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "leading vertices are collinear: cannot compute plane normal".into(),
        )
        .into());
    }
    Ok(normal / len)
}

/// Unit Newell normal of a closed polygon.
///
/// Follows the polygon's winding: counter-clockwise vertices seen from the tip of
/// the normal. Tolerates collinear runs of vertices.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the polygon encloses no area.
pub fn newell_normal(points: &[Point3]) -> Result<Vector3> {
    let n = points.len();
    let mut normal = Vector3::new(0.0, 0.0, 0.0);
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(
            GeometryError::Degenerate("polygon encloses no area: cannot compute normal".into())
                .into(),
        );
    }
    Ok(normal / len)
}
