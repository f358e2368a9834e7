//! Spherical-geometry computations
//!
//! Everything here is a pure function of its inputs. Angles are radians,
//! distances returned to callers are nautical miles unless a function's name
//! says otherwise.

mod intersection;
mod metrics;
mod proximity;
mod track;

pub use self::intersection::intersect;
pub(crate) use self::metrics::departure_course;
pub use self::metrics::{angular_distance, destination, distance, initial_bearing};
pub use self::proximity::{
    point_in_reach, points_in_reach, rank_points_in_reach, route_points_of_interest,
};
pub use self::track::{along_track_distance, closest_point, cross_track_error};

/// Below this magnitude a sine or cosine is treated as zero
pub const DEGENERACY_EPSILON: f64 = 1e-12;
