use crate::error::Result;
use crate::types::Coordinate;

/// A ray along a great circle, starting at `origin` on an initial `bearing`
///
/// The bearing (radians, clockwise from true north) only holds at the origin;
/// it changes continuously along the great circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Radial {
    pub origin: Coordinate,
    pub bearing: f64,
}

impl Radial {
    pub fn new(origin: Coordinate, bearing: f64) -> Self {
        Self { origin, bearing }
    }

    /// The radial leaving `from` towards `to`
    ///
    /// Off the poles the bearing is [`crate::initial_bearing`]. Leaving a pole
    /// it is measured from the meridian of `from.lon`, so the radial still
    /// passes through `to`.
    pub fn towards(from: Coordinate, to: Coordinate) -> Self {
        Self::new(from, crate::great_circle::departure_course(from, to))
    }

    /// Point where this radial meets `other`, see [`crate::intersect`]
    pub fn intersect(&self, other: &Radial) -> Result<Coordinate> {
        crate::intersect(self, other)
    }
}
