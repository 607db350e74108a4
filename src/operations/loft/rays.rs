use crate::math::angle::normalize_angle;
use crate::math::Point3;

/// Casts one ray from the origin per vertex of a centered path.
///
/// Ray `i` passes through the midpoint of the edge `(path[i - 1], path[i])`, so
/// the wedge between rays `i` and `i + 1` contains vertex `i`. Angles are
/// normalized into `[0, 2π)`.
#[must_use]
pub fn cast_rays(path: &[Point3]) -> Vec<f64> {
    let n = path.len();
    (0..n)
        .map(|i| {
            let prev = &path[(i + n - 1) % n];
            let curr = &path[i];
            let mid_x = (prev.x + curr.x) * 0.5;
            let mid_y = (prev.y + curr.y) * 0.5;
            normalize_angle(mid_y.atan2(mid_x))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn one_ray_per_vertex() {
        let square = vec![p(-1.0, -1.0), p(1.0, -1.0), p(1.0, 1.0), p(-1.0, 1.0)];
        assert_eq!(cast_rays(&square).len(), 4);
    }

    #[test]
    fn square_rays_pass_through_edge_midpoints() {
        let square = vec![p(-1.0, -1.0), p(1.0, -1.0), p(1.0, 1.0), p(-1.0, 1.0)];
        let rays = cast_rays(&square);
        // Edge (3, 0) is the left side, edge (0, 1) the bottom, and so on.
        assert_relative_eq!(rays[0], PI);
        assert_relative_eq!(rays[1], 3.0 * FRAC_PI_2);
        assert_relative_eq!(rays[2], 0.0);
        assert_relative_eq!(rays[3], FRAC_PI_2);
    }

    #[test]
    fn rays_are_normalized() {
        let tri = vec![p(4.5, 0.0), p(-4.5, 5.2), p(-4.5, -5.2)];
        for ray in cast_rays(&tri) {
            assert!((0.0..std::f64::consts::TAU).contains(&ray));
        }
    }
}
