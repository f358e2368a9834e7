use crate::types::{NamedCoordinate, ProximityMatch};

/// An ordered list of waypoints
///
/// Consecutive waypoints form the route's segments, each flown along a great
/// circle. Waypoints may repeat.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    points: Vec<NamedCoordinate>,
}

impl Route {
    pub fn new(points: Vec<NamedCoordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[NamedCoordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<NamedCoordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a waypoint
    ///
    /// Returns `&mut self` to allow method chaining.
    pub fn push(&mut self, point: impl Into<NamedCoordinate>) -> &mut Self {
        self.points.push(point.into());
        self
    }

    /// Consecutive `(start, end)` waypoint pairs
    pub fn segments(&self) -> impl Iterator<Item = (&NamedCoordinate, &NamedCoordinate)> {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Sum of the great-circle segment lengths, in nautical miles
    pub fn total_distance(&self) -> f64 {
        self.segments()
            .map(|(start, end)| crate::distance(start.coord, end.coord))
            .sum()
    }

    /// Points of interest within `max_distance` nautical miles of any segment
    ///
    /// See [`crate::route_points_of_interest`].
    pub fn points_of_interest(
        &self,
        pois: &[NamedCoordinate],
        max_distance: f64,
    ) -> Vec<ProximityMatch> {
        crate::route_points_of_interest(&self.points, pois, max_distance)
    }
}

impl From<Vec<NamedCoordinate>> for Route {
    fn from(points: Vec<NamedCoordinate>) -> Self {
        Self::new(points)
    }
}

impl<P: Into<NamedCoordinate>> FromIterator<P> for Route {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
