//! # geokeep-types
//!
//! Geospatial primitives for the geokeep location catalog.
//!
//! This crate provides the geometry layer the rest of the system is built on:
//!
//! - **[`Coordinate`]**: a finite `(latitude, longitude)` pair, parseable from
//!   the `lat,lon` token form used on the command line
//! - **[`Polygon`]**: an ordered boundary ring of at least three vertices,
//!   with whitespace-separated boundary-text parsing and an even-odd
//!   point-in-polygon predicate
//! - **[`GeoError`]**: the parse/validation error taxonomy
//!
//! The containment predicate operates on planar coordinates, treating
//! latitude/longitude as a flat Cartesian plane. Points exactly on a polygon
//! edge or vertex are excluded; see [`Polygon::contains`] for the full
//! convention.
//!
//! ## Examples
//!
//! ```rust
//! use geokeep_types::{Coordinate, Polygon};
//!
//! let polygon = Polygon::parse("40.7,-74.0 40.8,-74.0 40.8,-73.9 40.7,-73.9")?;
//! assert!(polygon.contains(&Coordinate::new(40.75, -73.95)));
//! assert!(!polygon.contains(&Coordinate::new(41.0, -74.5)));
//! # Ok::<(), geokeep_types::GeoError>(())
//! ```

pub mod coordinate;
pub mod error;
pub mod polygon;

pub use coordinate::Coordinate;
pub use error::GeoError;
pub use polygon::Polygon;
