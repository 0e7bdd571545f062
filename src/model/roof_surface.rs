use crate::math::Point3;

use super::Orientation;

/// A roof surface of a building part, together with the values derived
/// from its geometry.
///
/// `exterior` is wound counter-clockwise and each loop in `interiors`
/// clockwise, both viewed from outside the building. `orientation` and `area`
/// are outputs; they start as [`Orientation::Unassigned`] and `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoofSurface {
    /// Id of the building part owning this surface.
    pub building_part_id: String,
    /// Index of the surface in the owning geometry's boundaries (and
    /// semantics values) array.
    pub boundaries_index: Option<usize>,
    /// Index into the owning geometry's semantic surfaces array.
    pub semantics_surfaces_index: Option<usize>,
    /// Outer boundary loop.
    pub exterior: Vec<Point3>,
    /// Hole loops.
    pub interiors: Vec<Vec<Point3>>,
    /// Derived compass orientation.
    pub orientation: Orientation,
    /// Derived net area, in the square of the input unit.
    pub area: f64,
}

impl RoofSurface {
    /// Semantic surface type tag carried by every roof surface.
    pub const SURFACE_TYPE: &'static str = "RoofSurface";

    /// Creates a roof surface from its exterior loop.
    #[must_use]
    pub fn new(exterior: Vec<Point3>) -> Self {
        Self {
            exterior,
            ..Self::default()
        }
    }

    /// Sets the owning building part.
    #[must_use]
    pub fn with_building_part(mut self, id: impl Into<String>) -> Self {
        self.building_part_id = id.into();
        self
    }

    /// Adds a hole loop.
    #[must_use]
    pub fn with_interior(mut self, interior: Vec<Point3>) -> Self {
        self.interiors.push(interior);
        self
    }

    /// Sets where the surface lives in the owning geometry.
    #[must_use]
    pub fn with_indices(mut self, boundaries: usize, semantics_surfaces: usize) -> Self {
        self.boundaries_index = Some(boundaries);
        self.semantics_surfaces_index = Some(semantics_surfaces);
        self
    }

    /// The semantic surface type tag.
    #[must_use]
    pub fn surface_type(&self) -> &'static str {
        Self::SURFACE_TYPE
    }
}

impl Default for RoofSurface {
    fn default() -> Self {
        Self {
            building_part_id: "null".to_owned(),
            boundaries_index: None,
            semantics_surfaces_index: None,
            exterior: Vec::new(),
            interiors: Vec::new(),
            orientation: Orientation::Unassigned,
            area: 0.0,
        }
    }
}
