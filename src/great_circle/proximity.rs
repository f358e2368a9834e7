use super::metrics::distance;
use super::track::closest_point;
use crate::types::{Coordinate, InReach, NamedCoordinate, ProximityMatch};
use log::{debug, trace};

/// Projection of `point` onto the route and the distance (nm) to it, or `None`
/// if the projection is undefined
fn closest_approach(
    route_start: Coordinate,
    route_end: Coordinate,
    point: Coordinate,
) -> Option<(Coordinate, f64)> {
    match closest_point(route_start, route_end, point) {
        Ok(closest) => Some((closest, distance(closest, point))),
        Err(error) => {
            debug!("skipping {point:?} in reach test: {error}");
            None
        }
    }
}

/// Check whether `point` lies within `max_distance` nautical miles of the
/// great circle through `route_start` and `route_end`
///
/// A point whose projection is undefined (90° off course) is never in reach.
pub fn point_in_reach(
    route_start: Coordinate,
    route_end: Coordinate,
    point: Coordinate,
    max_distance: f64,
) -> bool {
    closest_approach(route_start, route_end, point)
        .is_some_and(|(_, distance)| distance <= max_distance)
}

/// All `points` within `max_distance` nautical miles of the route, with their
/// projections, nearest first
///
/// The sort is stable: points at exactly the same distance keep their input
/// order, and none of them is dropped.
pub fn rank_points_in_reach(
    route_start: Coordinate,
    route_end: Coordinate,
    max_distance: f64,
    points: &[Coordinate],
) -> Vec<InReach> {
    let mut in_reach: Vec<InReach> = points
        .iter()
        .enumerate()
        .filter_map(|(index, &point)| {
            let (closest_point, distance) = closest_approach(route_start, route_end, point)?;
            (distance <= max_distance).then_some(InReach {
                index,
                point,
                closest_point,
                distance,
            })
        })
        .collect();

    in_reach.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    in_reach
}

/// Filter `points` to those within `max_distance` nautical miles of the
/// route, nearest first
///
/// ```
/// use greatcircle::{Coordinate, points_in_reach};
///
/// let start = Coordinate::new(0.6629, -2.1301);
/// let end = Coordinate::new(0.6717, -2.1132);
/// let near = Coordinate::new(0.6692, -2.1193);
/// let far = Coordinate::new(0.6747, -2.1279);
///
/// assert_eq!(points_in_reach(start, end, 30.0, &[far, near]), vec![near]);
/// ```
pub fn points_in_reach(
    route_start: Coordinate,
    route_end: Coordinate,
    max_distance: f64,
    points: &[Coordinate],
) -> Vec<Coordinate> {
    rank_points_in_reach(route_start, route_end, max_distance, points)
        .into_iter()
        .map(|reach| reach.point)
        .collect()
}

/// Match points of interest against every segment of a route
///
/// Each segment `(route_points[i], route_points[i + 1])` is tested in order.
/// A point of interest is reported once, for the first segment that has it in
/// reach; within a segment matches are ordered nearest first. Points of
/// interest are told apart by their position in `pois`, so duplicates in the
/// input are reported separately.
pub fn route_points_of_interest(
    route_points: &[NamedCoordinate],
    pois: &[NamedCoordinate],
    max_distance: f64,
) -> Vec<ProximityMatch> {
    let candidates: Vec<Coordinate> = pois.iter().map(|poi| poi.coord).collect();
    let mut matched = vec![false; pois.len()];
    let mut matches = Vec::new();

    for (segment, pair) in route_points.windows(2).enumerate() {
        let (start, end) = (pair[0].coord, pair[1].coord);
        let in_reach = rank_points_in_reach(start, end, max_distance, &candidates);
        trace!("segment {segment}: {} points of interest in reach", in_reach.len());

        for reach in in_reach {
            if matched[reach.index] {
                continue;
            }
            matched[reach.index] = true;

            matches.push(ProximityMatch {
                point_of_interest: pois[reach.index].clone(),
                nearest_point_on_route: reach.closest_point,
                distance: reach.distance,
            });
        }
    }

    matches
}
