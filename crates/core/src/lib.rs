//! Geospatial location catalog with polygon area search.
//!
//! Locations (name, optional description, coordinate, attached photos) live
//! in PostgreSQL; the library answers spatial-containment queries over them:
//! given a polygon boundary, return every stored location inside it. The
//! search is a deliberate linear scan-and-filter, and the containment test is
//! a planar even-odd ray cast with boundary points excluded.
//!
//! The query engine only ever sees the [`LocationSource`] trait, so anything
//! that can supply a snapshot of locations can back a search; the PostgreSQL
//! repository is one such source.
//!
//! ```rust
//! use geokeep::{locations_within, Coordinate, Location, Polygon};
//!
//! let polygon = Polygon::parse("40.7,-74.0 40.8,-74.0 40.8,-73.9 40.7,-73.9")?;
//! let midtown = Location {
//!     id: 1,
//!     name: "Midtown".to_string(),
//!     description: None,
//!     coordinate: Coordinate::new(40.75, -73.95),
//!     photos: Vec::new(),
//! };
//!
//! let matches = locations_within(&polygon, vec![midtown]);
//! assert_eq!(matches.len(), 1);
//! # Ok::<(), geokeep::GeoError>(())
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod search;

pub use config::DatabaseConfig;
pub use db::{connect, run_migrations, PgLocationRepository};
pub use error::{Error, Result};
pub use models::{Location, NewLocation, Photo, UpdateLocation};
pub use repository::LocationSource;
pub use search::{locations_within, search_area};

pub use geokeep_types::{Coordinate, GeoError, Polygon};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Error, Result};

    pub use crate::{Coordinate, GeoError, Polygon};

    pub use crate::{Location, NewLocation, Photo, UpdateLocation};

    pub use crate::{locations_within, search_area, LocationSource};

    pub use crate::{connect, run_migrations, DatabaseConfig, PgLocationRepository};
}
