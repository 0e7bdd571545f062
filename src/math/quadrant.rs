use super::non_negative;

/// A quadrant of the XY plane, counted counter-clockwise from `+x, +y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// All quadrants in order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    /// The conventional quadrant number, `1..=4`.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Quadrant::First => 1,
            Quadrant::Second => 2,
            Quadrant::Third => 3,
            Quadrant::Fourth => 4,
        }
    }
}

/// Classifies `(x, y)` into a quadrant.
///
/// Each coordinate is tested on its own: a value within `EPSILON` of zero
/// counts as non-negative. A point on the y axis therefore always lands in
/// quadrant 1 or 4, and a point on the x axis in quadrant 1 or 2.
#[must_use]
pub fn assign_quadrant(x: f64, y: f64) -> Quadrant {
    match (non_negative(x), non_negative(y)) {
        (true, true) => Quadrant::First,
        (false, true) => Quadrant::Second,
        (false, false) => Quadrant::Third,
        (true, false) => Quadrant::Fourth,
    }
}
