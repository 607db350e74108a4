use super::{Point3, Vector3};

/// Returns `true` if the XY projection of a closed path winds clockwise.
///
/// Sums `(x2 - x1) * (y2 + y1)` over every edge; a positive sum means clockwise.
/// The z coordinate is ignored.
#[must_use]
pub fn is_clockwise(path: &[Point3]) -> bool {
    let n = path.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = &path[i];
        let b = &path[(i + 1) % n];
        sum += (b.x - a.x) * (b.y + a.y);
    }
    sum > 0.0
}

/// Center of the XY bounding box of a set of points.
///
/// Returns `(cx, cy)`. An empty slice yields the origin.
#[must_use]
pub fn bounding_box_center(points: &[Point3]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    ((min_x + max_x) * 0.5, (min_y + max_y) * 0.5)
}

/// Translates a path in place so its XY bounding-box center sits at the origin.
///
/// The z coordinates are left untouched.
pub fn center(path: &mut [Point3]) {
    let (cx, cy) = bounding_box_center(path);
    let offset = Vector3::new(cx, cy, 0.0);
    for p in path.iter_mut() {
        *p -= offset;
    }
}

/// 2D cross product of `(b - a)` and `(p - a)`.
#[inline]
fn edge_cross(a: &Point3, b: &Point3, p: &Point3) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Checks whether `p2` lies on the same side of the line `a → b` as `p1`.
///
/// Points on the line count as being on the same side.
#[must_use]
pub fn is_same_side(a: &Point3, b: &Point3, p1: &Point3, p2: &Point3) -> bool {
    edge_cross(a, b, p1) * edge_cross(a, b, p2) >= 0.0
}

/// Point-in-triangle test in the XY plane, inclusive of the boundary.
#[must_use]
pub fn point_in_triangle(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> bool {
    is_same_side(a, b, c, p) && is_same_side(b, c, a, p) && is_same_side(c, a, b, p)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn unit_square() -> Vec<Point3> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    // ── is_clockwise ──

    #[test]
    fn ccw_square_is_not_clockwise() {
        assert!(!is_clockwise(&unit_square()));
    }

    #[test]
    fn reversed_square_is_clockwise() {
        let pts: Vec<_> = unit_square().into_iter().rev().collect();
        assert!(is_clockwise(&pts));
    }

    #[test]
    fn clockwise_ignores_z() {
        let pts = vec![
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, -3.0),
            Point3::new(0.0, 1.0, 9.0),
        ];
        assert!(!is_clockwise(&pts));
    }

    // ── center ──

    #[test]
    fn bounding_box_center_of_square() {
        let (cx, cy) = bounding_box_center(&unit_square());
        assert_relative_eq!(cx, 0.5);
        assert_relative_eq!(cy, 0.5);
    }

    #[test]
    fn center_uses_bounding_box_not_mean() {
        // Mean x is 2.5, bounding-box center x is 5.
        let mut pts = vec![p(0.0, 0.0), p(10.0, 0.0), p(0.0, 2.0), p(0.0, 1.0)];
        center(&mut pts);
        assert_relative_eq!(pts[0].x, -5.0);
        assert_relative_eq!(pts[1].x, 5.0);
        assert_relative_eq!(pts[0].y, -1.0);
        assert_relative_eq!(pts[2].y, 1.0);
    }

    #[test]
    fn center_keeps_z() {
        let mut pts = vec![
            Point3::new(2.0, 2.0, 7.0),
            Point3::new(4.0, 2.0, 7.0),
            Point3::new(4.0, 4.0, 7.0),
        ];
        center(&mut pts);
        assert_relative_eq!(pts[0].x, -1.0);
        assert_relative_eq!(pts[2].y, 1.0);
        assert_relative_eq!(pts[1].z, 7.0);
    }

    // ── point_in_triangle ──

    #[test]
    fn point_inside_triangle() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0));
        assert!(point_in_triangle(&p(2.0, 1.0), &a, &b, &c));
    }

    #[test]
    fn point_outside_triangle() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0));
        assert!(!point_in_triangle(&p(5.0, 5.0), &a, &b, &c));
        assert!(!point_in_triangle(&p(-1.0, 0.0), &a, &b, &c));
    }

    #[test]
    fn point_on_edge_counts_as_inside() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0));
        assert!(point_in_triangle(&p(2.0, 0.0), &a, &b, &c));
    }

    #[test]
    fn same_side_of_line() {
        let (a, b) = (p(0.0, 0.0), p(1.0, 0.0));
        assert!(is_same_side(&a, &b, &p(0.0, 1.0), &p(5.0, 2.0)));
        assert!(!is_same_side(&a, &b, &p(0.0, 1.0), &p(5.0, -2.0)));
        assert!(is_same_side(&a, &b, &p(0.0, 1.0), &p(3.0, 0.0)));
    }
}
