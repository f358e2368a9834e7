use crate::dms::Dms;
use crate::error::{Error, Result};
use crate::units::{degrees_to_radians, normalize_longitude, radians_to_degrees};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Tolerance (radians) used by `approx_eq`, roughly 6 mm on the Earth's surface
pub const COORDINATE_EPSILON: f64 = 1e-9;

/// A position on the sphere
///
/// Both fields are in radians. Latitude is north-positive and lies in
/// `[-π/2, π/2]`. Longitude is east-positive and is normalized into `(-π, π]`
/// by the constructors.
///
/// Aviation sources often write longitude west-positive (KSFO at `122:22:00`).
/// That convention is applied at the text boundary by [`NamedCoordinate::parse`]
/// and [`Coordinate::aviation_longitude`]; every computation in this crate works
/// on the east-positive value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in radians
    pub lat: f64,
    /// Longitude in radians
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from radians, normalizing the longitude
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon: normalize_longitude(lon),
        }
    }

    /// Like [`Coordinate::new`], but rejects latitudes outside `[-π/2, π/2]`
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        let coord = Self::new(lat, lon);
        if !coord.is_valid() {
            return Err(Error::LatitudeOutOfRange(lat));
        }
        Ok(coord)
    }

    /// Create a coordinate from decimal degrees (east-positive longitude)
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::new(degrees_to_radians(lat), degrees_to_radians(lon))
    }

    /// Latitude and longitude in decimal degrees
    pub fn to_degrees(&self) -> (f64, f64) {
        (radians_to_degrees(self.lat), radians_to_degrees(self.lon))
    }

    /// Longitude with the aviation sign convention (west-positive), in radians
    pub fn aviation_longitude(&self) -> f64 {
        -self.lon
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-FRAC_PI_2..=FRAC_PI_2).contains(&self.lat)
    }

    /// Compare two coordinates within [`COORDINATE_EPSILON`]
    ///
    /// Longitudes are compared across the antimeridian, so `π` and `-π + ε`
    /// are considered close.
    pub fn approx_eq(&self, other: &Coordinate) -> bool {
        let dlon = normalize_longitude(self.lon - other.lon);
        (self.lat - other.lat).abs() <= COORDINATE_EPSILON && dlon.abs() <= COORDINATE_EPSILON
    }

    /// Wrap into an unlabeled [`NamedCoordinate`]
    pub fn to_named(self) -> NamedCoordinate {
        NamedCoordinate::from(self)
    }
}

impl fmt::Display for Coordinate {
    /// Decimal degrees with hemisphere letters, e.g. `37.6167°N 122.3667°W`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, lon) = self.to_degrees();
        let ns = if lat < 0.0 { 'S' } else { 'N' };
        let ew = if lon < 0.0 { 'W' } else { 'E' };
        let precision = f.precision().unwrap_or(4);
        write!(
            f,
            "{:.precision$}°{ns} {:.precision$}°{ew}",
            lat.abs(),
            lon.abs()
        )
    }
}

/// A coordinate with an optional label, such as an airport identifier
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedCoordinate {
    pub name: Option<String>,
    pub coord: Coordinate,
}

impl NamedCoordinate {
    pub fn new(name: impl Into<String>, coord: Coordinate) -> Self {
        Self {
            name: Some(name.into()),
            coord,
        }
    }

    /// Parse a labeled coordinate from aviation `D:M:S` text
    ///
    /// Latitude text is north-positive. Longitude text is west-positive, so
    /// `"122:22:00"` is 122°22' W and `"-2:21:00"` is 2°21' E.
    ///
    /// ```
    /// use greatcircle::NamedCoordinate;
    ///
    /// let ksfo = NamedCoordinate::parse("KSFO", "37:37:00", "122:22:00").unwrap();
    /// assert!(ksfo.coord.lon < 0.0);
    /// ```
    pub fn parse(name: impl Into<String>, latitude: &str, longitude: &str) -> Result<Self> {
        let lat = latitude.parse::<Dms>()?.to_radians();
        let lon = -longitude.parse::<Dms>()?.to_radians();
        Ok(Self::new(name, Coordinate::try_new(lat, lon)?))
    }

    /// Compare label and position, the position within [`COORDINATE_EPSILON`]
    pub fn approx_eq(&self, other: &NamedCoordinate) -> bool {
        self.name == other.name && self.coord.approx_eq(&other.coord)
    }
}

impl From<Coordinate> for NamedCoordinate {
    fn from(coord: Coordinate) -> Self {
        Self { name: None, coord }
    }
}

impl fmt::Display for NamedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.coord),
            None => write!(f, "{}", self.coord),
        }
    }
}
