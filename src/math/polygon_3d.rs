use super::{cross, Point3, Vector3};

/// Computes the area of a planar 3D loop.
///
/// Fan-triangulates from the first point and sums the triangle cross
/// products before taking the magnitude, so concave loops are handled as long
/// as they are planar and simple.
#[must_use]
pub fn polygon_area_3d(points: &[Point3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let o = &points[0];
    let mut cross_sum = Vector3::zeros();
    for pair in points[1..].windows(2) {
        cross_sum += cross(&(pair[0] - o), &(pair[1] - o));
    }
    0.5 * cross_sum.norm()
}
