use super::DEGENERACY_EPSILON;
use super::metrics::{angular_distance, departure_course, destination};
use crate::error::{Error, Result};
use crate::types::{Coordinate, Radial};
use crate::units::wrap_angle;
use log::debug;

/// Find the coordinate where two radials meet
///
/// Solves the spherical triangle formed by the two origins and the unknown
/// intersection, then projects from the first origin along its bearing.
///
/// # Errors
///
/// * [`Error::NoIntersection`] if both radials run along the great circle
///   through the two origins (parallel or anti-parallel), or share an origin
///   and a bearing
/// * [`Error::AmbiguousIntersection`] if the great circles cross behind at
///   least one of the origins, or one radial points directly away from the
///   other origin
///
/// A radial aimed straight at the other origin meets the other radial there.
///
/// ```
/// use greatcircle::{Coordinate, Radial, intersect};
///
/// let a = Radial::new(Coordinate::new(0.6573, -2.1316), 1.2392);
/// let b = Radial::new(Coordinate::new(0.6568, -2.1109), 5.4280);
/// let point = intersect(&a, &b).unwrap();
/// assert!((point.lat - 0.6611492).abs() < 1e-6);
/// ```
pub fn intersect(radial1: &Radial, radial2: &Radial) -> Result<Coordinate> {
    let p1 = radial1.origin;
    let p2 = radial2.origin;

    let dist12 = angular_distance(p1, p2);
    if dist12 < DEGENERACY_EPSILON {
        if wrap_angle(radial1.bearing - radial2.bearing).abs() < DEGENERACY_EPSILON {
            debug!("radials share origin and bearing: {radial1:?}");
            return Err(Error::NoIntersection);
        }
        return Ok(p1);
    }

    let crs12 = departure_course(p1, p2);
    let crs21 = departure_course(p2, p1);

    // angle 2-1-3 and angle 1-2-3 of the triangle
    let alpha1 = wrap_angle(radial1.bearing - crs12);
    let alpha2 = wrap_angle(crs21 - radial2.bearing);
    let (sin_a1, cos_a1) = alpha1.sin_cos();
    let (sin_a2, cos_a2) = alpha2.sin_cos();

    if sin_a1.abs() < DEGENERACY_EPSILON && sin_a2.abs() < DEGENERACY_EPSILON {
        debug!("radials on a common great circle: {radial1:?}, {radial2:?}");
        return Err(Error::NoIntersection);
    }
    // One radial aimed along the baseline: the great circles meet at the
    // other radial's origin
    if sin_a1.abs() < DEGENERACY_EPSILON {
        if cos_a1 > 0.0 {
            return Ok(p2);
        }
        debug!("radial points away from the other origin: {radial1:?}, {radial2:?}");
        return Err(Error::AmbiguousIntersection);
    }
    if sin_a2.abs() < DEGENERACY_EPSILON {
        if cos_a2 > 0.0 {
            return Ok(p1);
        }
        debug!("radial points away from the other origin: {radial2:?}, {radial1:?}");
        return Err(Error::AmbiguousIntersection);
    }
    if sin_a1 * sin_a2 < 0.0 {
        debug!("ambiguous radial intersection: {radial1:?}, {radial2:?}");
        return Err(Error::AmbiguousIntersection);
    }

    let alpha3 = (-cos_a1 * cos_a2 + sin_a1 * sin_a2 * dist12.cos())
        .clamp(-1.0, 1.0)
        .acos();
    let dist13 = (dist12.sin() * sin_a1 * sin_a2).atan2(cos_a2 + cos_a1 * alpha3.cos());

    Ok(destination(p1, radial1.bearing, dist13))
}
