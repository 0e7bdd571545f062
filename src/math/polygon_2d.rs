use super::{determinant_2x2, Point3};

/// Computes the signed area of a loop projected onto the XY plane (shoelace
/// formula).
///
/// Positive for counter-clockwise, negative for clockwise. The loop is closed
/// implicitly; the last point connects back to the first.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        sum += determinant_2x2(&points[i], &points[(i + 1) % n]);
    }
    sum * 0.5
}

/// Unsigned projected area of a loop, independent of its winding.
#[must_use]
pub fn area_2d(points: &[Point3]) -> f64 {
    signed_area_2d(points).abs()
}
