pub mod polygon_2d;
pub mod polygon_3d;
pub mod quadrant;
pub mod vector;

pub use quadrant::{assign_quadrant, Quadrant};
pub use vector::{cross, determinant_2x2, find_normal};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance for near-zero comparisons.
pub const EPSILON: f64 = 1e-8;

/// The diagonal bisector (π/4) separating the E/W-leaning labels from the
/// N/S-leaning ones.
pub const BISECTOR_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Returns `true` if `value` lies strictly within [`EPSILON`] of zero.
#[inline]
#[must_use]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns `true` if `value` is positive or within [`EPSILON`] of zero.
#[inline]
#[must_use]
pub fn non_negative(value: f64) -> bool {
    value > 0.0 || approx_zero(value)
}

/// Returns `true` if `a` is greater than `b` by more than [`EPSILON`].
#[inline]
#[must_use]
pub fn exceeds(a: f64, b: f64) -> bool {
    a - b > EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_zero_boundary() {
        assert!(approx_zero(0.0));
        assert!(approx_zero(-1e-9));
        assert!(approx_zero(1e-9));
        assert!(!approx_zero(1e-7));
        assert!(!approx_zero(-1e-7));
    }

    #[test]
    fn non_negative_resolves_near_zero_to_positive() {
        assert!(non_negative(0.0));
        assert!(non_negative(-1e-9));
        assert!(non_negative(EPSILON));
        assert!(non_negative(5.0));
        assert!(!non_negative(-1e-7));
    }

    #[test]
    fn exceeds_is_tolerant() {
        assert!(!exceeds(BISECTOR_ANGLE, BISECTOR_ANGLE));
        assert!(!exceeds(BISECTOR_ANGLE + 1e-9, BISECTOR_ANGLE));
        assert!(exceeds(BISECTOR_ANGLE + 1e-6, BISECTOR_ANGLE));
    }
}
