use super::DEGENERACY_EPSILON;
use super::metrics::{angular_distance, departure_course, destination};
use crate::error::{Error, Result};
use crate::types::Coordinate;
use log::debug;

/// Signed angular distance (radians) of `actual` from the great circle through
/// `route_start` and `route_end`
///
/// Positive values are right of course, negative values left of course. A
/// route leaving a pole follows the meridian of `route_end`.
pub fn cross_track_error(
    route_start: Coordinate,
    route_end: Coordinate,
    actual: Coordinate,
) -> f64 {
    let dist_ad = angular_distance(route_start, actual);
    let crs_ad = departure_course(route_start, actual);
    let crs_ab = departure_course(route_start, route_end);

    (dist_ad.sin() * (crs_ad - crs_ab).sin())
        .clamp(-1.0, 1.0)
        .asin()
}

/// Angular distance (radians) from `route_start` along the route's great
/// circle to the point abeam `actual`
///
/// Negative when the abeam point lies behind `route_start`. A zero-length
/// route has no direction, so the abeam point is `route_start` itself.
///
/// # Errors
///
/// [`Error::UndefinedProjection`] when `actual` is 90° off course: every
/// point of the great circle is then equally far away.
pub fn along_track_distance(
    route_start: Coordinate,
    route_end: Coordinate,
    actual: Coordinate,
) -> Result<f64> {
    if angular_distance(route_start, route_end) < DEGENERACY_EPSILON {
        return Ok(0.0);
    }

    let dist_ad = angular_distance(route_start, actual);
    let crs_ad = departure_course(route_start, actual);
    let crs_ab = departure_course(route_start, route_end);
    let xtd = cross_track_error(route_start, route_end, actual);

    if xtd.cos().abs() < DEGENERACY_EPSILON {
        debug!("no along-track projection for {actual:?} on {route_start:?} -> {route_end:?}");
        return Err(Error::UndefinedProjection);
    }

    // tan(atd) = tan(dist_ad) * cos(crs_ad - crs_ab), solved in every quadrant
    Ok((dist_ad.sin() * (crs_ad - crs_ab).cos()).atan2(dist_ad.cos()))
}

/// Projection of `actual` onto the great circle through `route_start` and
/// `route_end`
///
/// The projection is not clamped to the segment: points abeam the great
/// circle beyond either end project onto its extension.
///
/// ```
/// use greatcircle::{Coordinate, closest_point};
///
/// let start = Coordinate::new(0.592539, -2.066470);
/// let end = Coordinate::new(0.709186, -1.287762);
/// let abeam = closest_point(start, end, Coordinate::new(0.6021386, -2.033309)).unwrap();
/// assert!((abeam.lat - 0.6041330).abs() < 1e-6);
/// ```
pub fn closest_point(
    route_start: Coordinate,
    route_end: Coordinate,
    actual: Coordinate,
) -> Result<Coordinate> {
    let bearing = departure_course(route_start, route_end);
    let along = along_track_distance(route_start, route_end, actual)?;
    Ok(destination(route_start, bearing, along))
}
