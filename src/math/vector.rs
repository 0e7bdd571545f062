use super::{Point3, Vector3};
use crate::error::{OperationError, Result};

/// Cross product `v1 × v2`, not normalized.
///
/// Parallel inputs (including a zero vector) give the zero vector.
#[inline]
#[must_use]
pub fn cross(v1: &Vector3, v2: &Vector3) -> Vector3 {
    v1.cross(v2)
}

/// Determinant of the 2x2 matrix with rows `(p1.x, p1.y)` and `(p2.x, p2.y)`.
///
/// The z coordinates are ignored.
#[inline]
#[must_use]
pub fn determinant_2x2(p1: &Point3, p2: &Point3) -> f64 {
    p1.x * p2.y - p1.y * p2.x
}

/// Normal of a boundary loop taken from its first three points.
///
/// Returns `(loop[1] - loop[0]) × (loop[2] - loop[1])`, not normalized. For a
/// loop wound CCW when viewed from outside, it points outward. Collinear
/// leading points give the zero vector.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the loop has fewer than 3 points.
pub fn find_normal(boundary: &[Point3]) -> Result<Vector3> {
    if boundary.len() < 3 {
        return Err(OperationError::too_few_points("boundary loop", boundary.len()).into());
    }
    let e1 = boundary[1] - boundary[0];
    let e2 = boundary[2] - boundary[1];
    Ok(cross(&e1, &e2))
}
