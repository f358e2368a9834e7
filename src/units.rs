//! Angle and distance unit conversions
//!
//! All functions are total: they never fail and accept any `f64`.

use std::f64::consts::{PI, TAU};

/// Nautical miles per radian of great-circle arc (one nm is one arc-minute)
pub const NM_PER_RADIAN: f64 = (180.0 * 60.0) / PI;

/// Convert (degrees, minutes, seconds) into decimal degrees
pub fn dms_to_decimal_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + (minutes / 60.0) + (seconds / 3600.0)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

pub fn nm_to_radians(nautical_miles: f64) -> f64 {
    (PI / (180.0 * 60.0)) * nautical_miles
}

pub fn radians_to_nm(radians: f64) -> f64 {
    ((180.0 * 60.0) / PI) * radians
}

/// Normalize a longitude into `(-π, π]`
///
/// Values already inside the range are returned unchanged.
pub fn normalize_longitude(lon: f64) -> f64 {
    if lon > -PI && lon <= PI {
        return lon;
    }
    let offset = (PI - lon).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU just above π
    if offset >= TAU { PI } else { PI - offset }
}

/// Normalize a bearing into `[0, 2π)`
pub fn normalize_bearing(bearing: f64) -> f64 {
    let bearing = bearing.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if bearing >= TAU { 0.0 } else { bearing }
}

/// Wrap a signed angle difference into `(-π, π]`
pub fn wrap_angle(angle: f64) -> f64 {
    normalize_longitude(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEGREES_RADIANS: [(f64, f64); 4] = [
        (37.0 + 37.0 / 60.0, 0.6565346869585337),
        (37.0 + 22.0 / 60.0, 0.6521713638285478),
        (48.0 + 26.57 / 60.0, 0.8454869406615264),
        (37.0 + 42.66 / 60.0, 0.6581811142195816),
    ];

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn dms_to_decimal() {
        assert_eq!(dms_to_decimal_degrees(37.0, 30.0, 0.0), 37.5);
        assert_eq!(dms_to_decimal_degrees(10.0, 0.0, 36.0), 10.01);
        assert_eq!(dms_to_decimal_degrees(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn degrees_to_radians_known_values() {
        for (degrees, radians) in DEGREES_RADIANS {
            assert_close(degrees_to_radians(degrees), radians);
        }
        assert_eq!(degrees_to_radians(180.0), PI);
    }

    #[test]
    fn radians_to_degrees_known_values() {
        for (degrees, radians) in DEGREES_RADIANS {
            assert_close(radians_to_degrees(radians), degrees);
        }
        assert_eq!(radians_to_degrees(PI), 180.0);
    }

    #[test]
    fn nautical_miles() {
        assert_close(nm_to_radians(5000.0), 1.454441043328608);
        assert_close(radians_to_nm(1.454441043328608), 5000.0);
        assert_close(radians_to_nm(PI), 10800.0);
        assert_close(NM_PER_RADIAN, 3437.746770784939);
    }

    #[test]
    fn round_trips() {
        for x in [-720.5, -180.0, -1.0, 0.0, 1e-9, 0.25, 45.0, 123.456, 1e6] {
            assert_close(radians_to_degrees(degrees_to_radians(x)), x);
            assert_close(radians_to_nm(nm_to_radians(x)), x);
        }
    }

    #[test]
    fn longitude_normalization() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(PI), PI);
        assert_eq!(normalize_longitude(-PI), PI);
        assert_close(normalize_longitude(PI + 0.5), -PI + 0.5);
        assert_close(normalize_longitude(-PI - 0.5), PI - 0.5);
        assert_close(normalize_longitude(3.0 * TAU + 1.0), 1.0);
        assert_eq!(normalize_longitude(-2.1316), -2.1316);
    }

    #[test]
    fn longitude_just_above_pi() {
        let above = f64::from_bits(PI.to_bits() + 1);
        assert_eq!(normalize_longitude(above), PI);
        assert_eq!(wrap_angle(above), PI);

        let below = f64::from_bits((-PI).to_bits() + 1);
        assert!(below < -PI);
        assert_eq!(normalize_longitude(below), PI);
    }

    #[test]
    fn bearing_normalization() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(TAU), 0.0);
        assert_close(normalize_bearing(-PI / 2.0), 1.5 * PI);
        assert_close(normalize_bearing(5.0 * PI), PI);
        assert!(normalize_bearing(-1e-300) < TAU);
    }

    #[test]
    fn angle_wrapping() {
        assert_close(wrap_angle(1.5 * PI), -PI / 2.0);
        assert_close(wrap_angle(-1.5 * PI), PI / 2.0);
        assert_close(wrap_angle(0.25), 0.25);
    }
}
