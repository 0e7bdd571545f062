use crate::error::Result;
use crate::math::{
    approx_zero, assign_quadrant, exceeds, find_normal, Quadrant, Vector3, BISECTOR_ANGLE,
};
use crate::model::{Orientation, RoofSurface};

/// Labels per quadrant (rows in [`Quadrant`] order): the angle from the
/// north/south axis past the bisector, then up to and including it.
const ORIENTATION_TABLE: [[Orientation; 2]; 4] = [
    [Orientation::EN, Orientation::NE],
    [Orientation::WN, Orientation::NW],
    [Orientation::WS, Orientation::SW],
    [Orientation::ES, Orientation::SE],
];

fn lookup(quadrant: Quadrant, past_bisector: bool) -> Orientation {
    ORIENTATION_TABLE[quadrant as usize][usize::from(!past_bisector)]
}

/// Classifies an outward normal into a compass orientation, with y as north.
///
/// A (near) zero normal is [`Orientation::Indeterminate`]. A normal with no
/// north/south component is `EN`, `WN` or, when it has no horizontal component
/// at all, [`Orientation::Horizontal`].
#[must_use]
pub fn classify_normal(normal: &Vector3) -> Orientation {
    if approx_zero(normal.norm()) {
        return Orientation::Indeterminate;
    }

    if approx_zero(normal.y) {
        return if approx_zero(normal.x) {
            Orientation::Horizontal
        } else if normal.x > 0.0 {
            Orientation::EN
        } else {
            Orientation::WN
        };
    }

    let quadrant = assign_quadrant(normal.x, normal.y);
    // |y| > EPSILON here, so the angle lies in [0, π/2).
    let angle = (normal.x.abs() / normal.y.abs()).atan();
    lookup(quadrant, exceeds(angle, BISECTOR_ANGLE))
}

/// Computes the compass orientation of a roof surface from the normal of its
/// exterior loop.
pub struct RoofOrientation<'a> {
    roof: &'a RoofSurface,
}

impl<'a> RoofOrientation<'a> {
    /// Creates a new `RoofOrientation` query.
    #[must_use]
    pub fn new(roof: &'a RoofSurface) -> Self {
        Self { roof }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the exterior loop has fewer
    /// than 3 points.
    pub fn execute(&self) -> Result<Orientation> {
        let normal = find_normal(&self.roof.exterior)?;
        let orientation = classify_normal(&normal);
        if orientation == Orientation::Indeterminate {
            tracing::warn!(
                building_part = %self.roof.building_part_id,
                "degenerate roof normal, orientation indeterminate"
            );
        } else {
            tracing::debug!(
                building_part = %self.roof.building_part_id,
                nx = normal.x,
                ny = normal.y,
                nz = normal.z,
                %orientation,
                "roof orientation"
            );
        }
        Ok(orientation)
    }
}
