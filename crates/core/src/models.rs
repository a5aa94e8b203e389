//! Domain models for stored locations and their photos.

use geokeep_types::Coordinate;
use serde::{Deserialize, Serialize};

/// A stored geographic location.
///
/// The query engine never mutates a location; it only reads the coordinate
/// during a search. Photos are opaque attached data the geometry layer does
/// not touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i32,
    /// Unique, non-empty display name.
    pub name: String,
    pub description: Option<String>,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// A photo attached to a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i32,
    pub filename: String,
    pub location_id: i32,
}

/// Parameters for creating a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub description: Option<String>,
    pub coordinate: Coordinate,
}

/// Partial location update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub description: Option<String>,
    pub coordinate: Option<Coordinate>,
}
