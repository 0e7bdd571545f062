mod area;
mod orientation;
mod volume;

pub use area::{AreaMode, RoofArea};
pub use orientation::{classify_normal, RoofOrientation};
pub use volume::{signed_determinant, ShellVolume, SolidVolume};
