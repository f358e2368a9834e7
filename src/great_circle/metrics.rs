use crate::types::Coordinate;
use crate::units::{NM_PER_RADIAN, normalize_bearing, normalize_longitude};
use std::f64::consts::PI;

/// Angular distance between two coordinates, in radians
///
/// Uses the spherical law of cosines. The cosine is clamped into `[-1, 1]` so
/// rounding can never push `acos` out of its domain. Below a few nautical
/// miles `acos` loses most of its precision, so short distances are taken from
/// the equivalent haversine form instead.
pub fn angular_distance(p1: Coordinate, p2: Coordinate) -> f64 {
    if p1 == p2 {
        return 0.0;
    }

    let cos_lats = p1.lat.cos() * p2.lat.cos();
    let cos_d = p1.lat.sin() * p2.lat.sin() + cos_lats * (p1.lon - p2.lon).cos();
    if cos_d < SHORT_DISTANCE_COSINE {
        return cos_d.clamp(-1.0, 1.0).acos();
    }

    let h = ((p1.lat - p2.lat) / 2.0).sin().powi(2)
        + cos_lats * ((p1.lon - p2.lon) / 2.0).sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin()
}

/// `cos(d)` above which [`angular_distance`] switches to the haversine form
const SHORT_DISTANCE_COSINE: f64 = 0.999_999;

/// Great-circle distance between two coordinates, in nautical miles
///
/// Symmetric in its arguments, and zero for identical coordinates.
///
/// ```
/// use greatcircle::{Coordinate, distance};
///
/// let a = Coordinate::new(0.592539, -2.066470);
/// let b = Coordinate::new(0.709186, -1.287762);
/// assert!((distance(a, b) - 2143.727).abs() < 1e-3);
/// ```
pub fn distance(p1: Coordinate, p2: Coordinate) -> f64 {
    angular_distance(p1, p2) * NM_PER_RADIAN
}

/// Initial true course from `p1` towards `p2`, in radians within `[0, 2π)`
///
/// The course changes along a great circle; this is the course at `p1`.
/// Departing from a pole, every direction is south (north pole, `π`) or north
/// (south pole, `0`). Identical coordinates yield `0`.
pub fn initial_bearing(p1: Coordinate, p2: Coordinate) -> f64 {
    if at_pole(p1) {
        return if p1.lat > 0.0 { PI } else { 0.0 };
    }

    let dlon = p2.lon - p1.lon;
    let y = dlon.sin() * p2.lat.cos();
    let x = p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * dlon.cos();
    normalize_bearing(y.atan2(x))
}

/// Course from `p1` towards `p2` in the frame [`destination`] uses
///
/// Equal to [`initial_bearing`] everywhere except at a pole. There every
/// direction is south (or north), so the course is measured from the
/// meridian of `p1.lon` instead: `π - Δλ` from the north pole and `Δλ` from
/// the south pole.
pub(crate) fn departure_course(p1: Coordinate, p2: Coordinate) -> f64 {
    if !at_pole(p1) {
        return initial_bearing(p1, p2);
    }

    let dlon = p2.lon - p1.lon;
    if p1.lat > 0.0 {
        normalize_bearing(PI - dlon)
    } else {
        normalize_bearing(dlon)
    }
}

fn at_pole(p: Coordinate) -> bool {
    p.lat.cos() < super::DEGENERACY_EPSILON
}

/// The coordinate reached from `origin` on initial course `bearing` after
/// `angular_distance` radians along the great circle
///
/// Leaving a pole, `bearing` is measured from the meridian of `origin.lon`
/// instead: from the north pole a course of `π` follows
/// that meridian south, from the south pole a course of `0` follows it north.
pub fn destination(origin: Coordinate, bearing: f64, angular_distance: f64) -> Coordinate {
    if angular_distance == 0.0 {
        return origin;
    }

    if at_pole(origin) {
        let (sin_d, cos_d) = angular_distance.sin_cos();
        let abs_lat = cos_d.atan2(sin_d.abs());
        let (lat, meridian) = if origin.lat > 0.0 {
            (abs_lat, origin.lon + PI - bearing)
        } else {
            (-abs_lat, origin.lon + bearing)
        };
        // a negative sine crosses the pole onto the opposite meridian
        let lon = if sin_d < 0.0 { meridian + PI } else { meridian };
        return Coordinate {
            lat,
            lon: normalize_longitude(lon),
        };
    }

    let (sin_lat1, cos_lat1) = origin.lat.sin_cos();
    let (sin_d, cos_d) = angular_distance.sin_cos();

    let sin_lat = (sin_lat1 * cos_d + cos_lat1 * sin_d * bearing.cos()).clamp(-1.0, 1.0);
    let lat = sin_lat.asin();
    let dlon = (bearing.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * sin_lat);

    Coordinate {
        lat,
        lon: normalize_longitude(origin.lon + dlon),
    }
}
