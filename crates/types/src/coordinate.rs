//! Geographic coordinates and their textual `lat,lon` form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A geographic coordinate as a `(latitude, longitude)` pair in degrees.
///
/// Component order is significant and matches the external boundary format
/// (`lat,lon`). No range is enforced beyond both components being finite;
/// the containment predicate treats the pair as a point on a flat plane.
///
/// # Examples
///
/// ```
/// use geokeep_types::Coordinate;
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// assert_eq!(nyc.latitude, 40.7128);
/// assert_eq!(nyc.longitude, -74.0060);
///
/// let parsed: Coordinate = "40.7128,-74.0060".parse()?;
/// assert_eq!(parsed, nyc);
/// # Ok::<(), geokeep_types::GeoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    /// Parse one `lat,lon` token.
    ///
    /// Whitespace around either component is tolerated. Tokens with a missing
    /// comma, extra components, unparseable numbers, or non-finite values
    /// (`NaN`, `inf`) are rejected with [`GeoError::MalformedCoordinate`]
    /// carrying the original token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GeoError::MalformedCoordinate(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(malformed)?;
        if lon.contains(',') {
            return Err(malformed());
        }
        let latitude: f64 = lat.trim().parse().map_err(|_| malformed())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| malformed())?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(malformed());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}
