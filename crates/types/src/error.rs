//! Error taxonomy for polygon boundaries.

use thiserror::Error;

/// Errors produced while building or parsing a polygon boundary.
///
/// Both variants carry enough context to point at the offending input. Once a
/// [`crate::Polygon`] has been constructed, geometry itself never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    /// A polygon boundary requires at least three vertices.
    #[error("invalid polygon: need at least 3 vertices, got {0}")]
    InvalidPolygon(usize),

    /// A boundary token could not be parsed as a `lat,lon` pair.
    #[error("malformed coordinate '{0}': expected 'lat,lon' with finite numbers")]
    MalformedCoordinate(String),
}
