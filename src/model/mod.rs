pub mod orientation;
pub mod roof_surface;
pub mod shell;

pub use orientation::Orientation;
pub use roof_surface::RoofSurface;
pub use shell::{Shell, Solid, TriangulatedFace};
