use crate::error::{OperationError, Result};
use crate::math::polygon_2d::area_2d;
use crate::math::polygon_3d::polygon_area_3d;
use crate::math::Point3;
use crate::model::RoofSurface;

/// How a roof surface's area is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaMode {
    /// Footprint area on the XY plane.
    Projected,
    /// True area of the (planar) surface.
    #[default]
    Surface,
}

impl AreaMode {
    fn loop_area(self, points: &[Point3]) -> f64 {
        match self {
            AreaMode::Projected => area_2d(points),
            AreaMode::Surface => polygon_area_3d(points),
        }
    }
}

/// Computes the net area of a roof surface: the exterior loop minus its holes.
pub struct RoofArea<'a> {
    roof: &'a RoofSurface,
    mode: AreaMode,
}

impl<'a> RoofArea<'a> {
    /// Creates a new `RoofArea` query measuring the true surface area.
    #[must_use]
    pub fn new(roof: &'a RoofSurface) -> Self {
        Self {
            roof,
            mode: AreaMode::default(),
        }
    }

    /// Sets the measurement mode.
    #[must_use]
    pub fn with_mode(mut self, mode: AreaMode) -> Self {
        self.mode = mode;
        self
    }

    /// Executes the query. Never negative; holes larger than the exterior
    /// clamp the result to zero.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the exterior or any interior
    /// loop has fewer than 3 points.
    pub fn execute(&self) -> Result<f64> {
        let exterior = &self.roof.exterior;
        if exterior.len() < 3 {
            return Err(OperationError::too_few_points("exterior loop", exterior.len()).into());
        }
        let mut holes = 0.0;
        for (i, interior) in self.roof.interiors.iter().enumerate() {
            if interior.len() < 3 {
                return Err(
                    OperationError::too_few_points(&format!("interior loop {i}"), interior.len())
                        .into(),
                );
            }
            holes += self.mode.loop_area(interior);
        }

        let outer = self.mode.loop_area(exterior);
        let net = outer - holes;
        if net < 0.0 {
            tracing::warn!(
                building_part = %self.roof.building_part_id,
                outer,
                holes,
                "holes exceed the exterior loop, clamping area to 0"
            );
            return Ok(0.0);
        }
        tracing::debug!(
            building_part = %self.roof.building_part_id,
            mode = ?self.mode,
            area = net,
            "roof area"
        );
        Ok(net)
    }
}
