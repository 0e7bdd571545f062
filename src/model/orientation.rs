use std::fmt;
use std::str::FromStr;

use crate::error::{CitygeomError, OperationError};

/// Compass orientation of a roof surface, with y as geographic north.
///
/// The eight directional labels name the broad compass half first and the
/// finer lean second: `EN` is east leaning north, `NE` is north leaning east.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// The normal has no horizontal component.
    Horizontal,
    EN,
    NE,
    NW,
    WN,
    WS,
    SW,
    SE,
    ES,
    /// The normal is (near) zero, e.g. collinear leading boundary points.
    Indeterminate,
    /// Not computed yet.
    #[default]
    Unassigned,
}

impl Orientation {
    /// The eight directional labels.
    pub const COMPASS: [Orientation; 8] = [
        Orientation::EN,
        Orientation::NE,
        Orientation::NW,
        Orientation::WN,
        Orientation::WS,
        Orientation::SW,
        Orientation::SE,
        Orientation::ES,
    ];

    /// The textual label stored in city models.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::EN => "EN",
            Orientation::NE => "NE",
            Orientation::NW => "NW",
            Orientation::WN => "WN",
            Orientation::WS => "WS",
            Orientation::SW => "SW",
            Orientation::SE => "SE",
            Orientation::ES => "ES",
            Orientation::Indeterminate => "indeterminate",
            Orientation::Unassigned => "null",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = CitygeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Orientation::Horizontal,
            Orientation::Indeterminate,
            Orientation::Unassigned,
        ]
        .into_iter()
        .chain(Orientation::COMPASS)
        .find(|o| o.as_str() == s)
        .ok_or_else(|| OperationError::InvalidInput(format!("unknown orientation label {s:?}")).into())
    }
}
