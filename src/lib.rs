pub mod error;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{CitygeomError, Result};
