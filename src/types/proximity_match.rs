use crate::types::{Coordinate, NamedCoordinate};

/// A point of interest found near a route
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximityMatch {
    pub point_of_interest: NamedCoordinate,
    /// Projection of the point of interest onto the nearest route segment
    pub nearest_point_on_route: Coordinate,
    /// Nautical miles between the point of interest and its projection
    pub distance: f64,
}

/// A point that survived a reach filter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InReach {
    /// Position of the point in the input slice
    pub index: usize,
    pub point: Coordinate,
    /// Projection of the point onto the route's great circle
    pub closest_point: Coordinate,
    /// Nautical miles between `point` and `closest_point`
    pub distance: f64,
}
