use crate::error::{CitygeomError, Result};
use crate::model::RoofSurface;

use super::query::{AreaMode, RoofArea, RoofOrientation};

/// Derives orientation and area of roof surfaces and writes them into the
/// records.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeRoof {
    area_mode: AreaMode,
}

impl AnalyzeRoof {
    /// Creates a new `AnalyzeRoof` operation measuring true surface area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how the area is measured.
    #[must_use]
    pub fn with_area_mode(mut self, mode: AreaMode) -> Self {
        self.area_mode = mode;
        self
    }

    /// Executes the operation on one roof surface.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if any boundary loop has fewer
    /// than 3 points. The record is left untouched in that case.
    pub fn execute(&self, roof: &mut RoofSurface) -> Result<()> {
        let orientation = RoofOrientation::new(roof).execute()?;
        let area = RoofArea::new(roof).with_mode(self.area_mode).execute()?;
        roof.orientation = orientation;
        roof.area = area;
        Ok(())
    }

    /// Executes the operation on every roof surface, carrying on past
    /// invalid ones.
    ///
    /// Returns the index and error of each surface that could not be analyzed.
    pub fn execute_all(&self, roofs: &mut [RoofSurface]) -> Vec<(usize, CitygeomError)> {
        let failures: Vec<_> = roofs
            .iter_mut()
            .enumerate()
            .filter_map(|(i, roof)| self.execute(roof).err().map(|e| (i, e)))
            .collect();
        for (i, err) in &failures {
            tracing::warn!(index = i, error = %err, "skipping roof surface");
        }
        failures
    }
}
