use std::f64::consts::TAU;

use super::Point3;

/// Normalizes an angle in radians into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Polar angle of a point's XY projection, measured from the origin in `[0, 2π)`.
#[must_use]
pub fn polar_angle(point: &Point3) -> f64 {
    normalize_angle(point.y.atan2(point.x))
}

/// Returns `true` if `angle` lies inside the counterclockwise interval from `lo` to `hi`.
///
/// Both bounds are inclusive. When `lo > hi` the interval wraps past `2π`, so
/// `angle_between(3π/2, 0.1, π/2)` holds. All three angles are expected to be
/// normalized with [`normalize_angle`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn angle_between(lo: f64, angle: f64, hi: f64) -> bool {
    if angle == lo || angle == hi {
        return true;
    }
    if lo < hi {
        lo < angle && angle < hi
    } else {
        lo < angle || angle < hi
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    // ── normalize_angle ──

    #[test]
    fn normalize_keeps_angles_in_range() {
        assert_relative_eq!(normalize_angle(1.0), 1.0);
        assert_relative_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn normalize_wraps_negative_angles() {
        assert_relative_eq!(normalize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2);
        assert_relative_eq!(normalize_angle(-PI), PI);
    }

    #[test]
    fn normalize_wraps_large_angles() {
        assert_relative_eq!(normalize_angle(TAU + 0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(5.0 * TAU), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_never_returns_tau() {
        let a = normalize_angle(-1e-20);
        assert!((0.0..TAU).contains(&a));
    }

    // ── polar_angle ──

    #[test]
    fn polar_angle_of_axes() {
        assert_relative_eq!(polar_angle(&Point3::new(1.0, 0.0, 0.0)), 0.0);
        assert_relative_eq!(polar_angle(&Point3::new(0.0, 1.0, 0.0)), FRAC_PI_2);
        assert_relative_eq!(polar_angle(&Point3::new(-1.0, 0.0, 0.0)), PI);
        assert_relative_eq!(polar_angle(&Point3::new(0.0, -1.0, 0.0)), 3.0 * FRAC_PI_2);
    }

    #[test]
    fn polar_angle_ignores_z() {
        assert_relative_eq!(polar_angle(&Point3::new(1.0, 1.0, 42.0)), PI / 4.0);
    }

    // ── angle_between ──

    #[test]
    fn between_plain_interval() {
        assert!(angle_between(1.0, 1.5, 2.0));
        assert!(!angle_between(1.0, 2.5, 2.0));
        assert!(!angle_between(1.0, 0.5, 2.0));
    }

    #[test]
    fn between_bounds_are_inclusive() {
        assert!(angle_between(1.0, 1.0, 2.0));
        assert!(angle_between(1.0, 2.0, 2.0));
        assert!(angle_between(3.0 * FRAC_PI_2, 3.0 * FRAC_PI_2, FRAC_PI_2));
    }

    #[test]
    fn between_wrapping_interval() {
        let lo = 3.0 * FRAC_PI_2;
        let hi = FRAC_PI_2;
        assert!(angle_between(lo, 0.1, hi));
        assert!(angle_between(lo, 6.0, hi));
        assert!(!angle_between(lo, PI, hi));
    }
}
