//! Polygon boundaries and the point-in-polygon predicate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::GeoError;

/// A polygon boundary: an ordered ring of at least three vertices.
///
/// The ring closes implicitly (the last vertex connects back to the first)
/// and either winding order is accepted. Self-intersecting and zero-area
/// rings are accepted as given; [`Polygon::contains`] still resolves every
/// query point to a deterministic boolean for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    /// Minimum number of boundary vertices.
    pub const MIN_VERTICES: usize = 3;

    /// Build a polygon from boundary vertices in traversal order.
    ///
    /// Fails with [`GeoError::InvalidPolygon`] when fewer than
    /// [`Self::MIN_VERTICES`] vertices are supplied.
    pub fn new(vertices: Vec<Coordinate>) -> Result<Self, GeoError> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(GeoError::InvalidPolygon(vertices.len()));
        }
        Ok(Self { vertices })
    }

    /// Parse a boundary from whitespace-separated `lat,lon` tokens.
    ///
    /// Tokens are parsed before the vertex-count rule is applied, so a
    /// malformed token is reported as [`GeoError::MalformedCoordinate`] even
    /// when the boundary is also too short.
    ///
    /// # Examples
    ///
    /// ```
    /// use geokeep_types::Polygon;
    ///
    /// let polygon = Polygon::parse("0,0 0,10 10,10 10,0")?;
    /// assert_eq!(polygon.vertices().len(), 4);
    /// # Ok::<(), geokeep_types::GeoError>(())
    /// ```
    pub fn parse(boundary: &str) -> Result<Self, GeoError> {
        let vertices = boundary
            .split_whitespace()
            .map(Coordinate::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(vertices)
    }

    /// The boundary vertices in traversal order.
    #[inline]
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// Even-odd containment test with boundary points excluded.
    ///
    /// A horizontal ray is cast from the point toward positive longitude and
    /// edge crossings are counted; an odd count means inside. Points lying
    /// exactly on an edge or vertex of the ring are classified as outside,
    /// uniformly for every edge. The predicate is pure and total: horizontal
    /// edges, degenerate zero-area rings, and self-intersecting rings all
    /// resolve to a boolean without error.
    ///
    /// # Examples
    ///
    /// ```
    /// use geokeep_types::{Coordinate, Polygon};
    ///
    /// let square = Polygon::parse("0,0 0,10 10,10 10,0")?;
    /// assert!(square.contains(&Coordinate::new(5.0, 5.0)));
    /// assert!(!square.contains(&Coordinate::new(15.0, 15.0)));
    /// // On the boundary: excluded.
    /// assert!(!square.contains(&Coordinate::new(0.0, 5.0)));
    /// # Ok::<(), geokeep_types::GeoError>(())
    /// ```
    pub fn contains(&self, point: &Coordinate) -> bool {
        if self.on_boundary(point) {
            return false;
        }

        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let a = self.vertices[i];
            let b = self.vertices[j];
            // Half-open straddle test: a vertex sitting exactly on the ray's
            // latitude counts for exactly one of its two edges, and
            // horizontal edges never straddle, so the interpolation below
            // cannot divide by zero.
            if (a.latitude > point.latitude) != (b.latitude > point.latitude) {
                let t = (point.latitude - a.latitude) / (b.latitude - a.latitude);
                let crossing = a.longitude + t * (b.longitude - a.longitude);
                if crossing > point.longitude {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// True when the point sits exactly on an edge or vertex of the ring.
    fn on_boundary(&self, point: &Coordinate) -> bool {
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            if on_segment(&self.vertices[i], &self.vertices[j], point) {
                return true;
            }
            j = i;
        }
        false
    }
}

impl FromStr for Polygon {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Exact collinearity plus bounding-box membership.
fn on_segment(a: &Coordinate, b: &Coordinate, p: &Coordinate) -> bool {
    let cross = (b.latitude - a.latitude) * (p.longitude - a.longitude)
        - (b.longitude - a.longitude) * (p.latitude - a.latitude);
    if cross != 0.0 {
        return false;
    }
    p.latitude >= a.latitude.min(b.latitude)
        && p.latitude <= a.latitude.max(b.latitude)
        && p.longitude >= a.longitude.min(b.longitude)
        && p.longitude <= a.longitude.max(b.longitude)
}
