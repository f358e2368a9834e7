/// Errors returned by parsing and by degenerate geometry
///
/// Input-domain variants (`InvalidDms`, `DmsOutOfRange`, `LatitudeOutOfRange`)
/// report bad caller input. The remaining variants are expected outcomes of
/// valid geometric input and should be branched on, not treated as fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid DMS text {input:?}: {reason}")]
    InvalidDms { input: String, reason: &'static str },

    #[error("DMS {component} out of range: {value}")]
    DmsOutOfRange { component: &'static str, value: f64 },

    #[error("Latitude out of range: {0} rad")]
    LatitudeOutOfRange(f64),

    #[error("Radials lie on the same great circle (no unique intersection)")]
    NoIntersection,

    #[error("Radials intersect behind at least one origin")]
    AmbiguousIntersection,

    #[error("Projection undefined (point is 90° off the route's great circle)")]
    UndefinedProjection,
}

pub type Result<T> = std::result::Result<T, Error>;
