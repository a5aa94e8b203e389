//! Area search: polygon containment over a location snapshot.

use geokeep_types::Polygon;
use tracing::debug;

use crate::error::Result;
use crate::models::Location;
use crate::repository::LocationSource;

/// Filter a snapshot down to the locations inside `polygon`.
///
/// The filter is stable: survivors keep the relative order of the input
/// sequence. Locations are moved through, never cloned or mutated.
///
/// # Examples
///
/// ```
/// use geokeep::{locations_within, Coordinate, Location, Polygon};
///
/// let square = Polygon::parse("0,0 0,10 10,10 10,0")?;
/// let locations = vec![Location {
///     id: 1,
///     name: "center".to_string(),
///     description: None,
///     coordinate: Coordinate::new(5.0, 5.0),
///     photos: Vec::new(),
/// }];
/// assert_eq!(locations_within(&square, locations).len(), 1);
/// # Ok::<(), geokeep::GeoError>(())
/// ```
pub fn locations_within(polygon: &Polygon, locations: Vec<Location>) -> Vec<Location> {
    locations
        .into_iter()
        .filter(|location| polygon.contains(&location.coordinate))
        .collect()
}

/// Parse `boundary` and return every stored location inside it.
///
/// The boundary text (whitespace-separated `lat,lon` pairs) is parsed before
/// the source is contacted, so malformed input never costs a fetch. Source
/// failures propagate unchanged. An empty result is a normal outcome, not an
/// error.
pub async fn search_area(source: &dyn LocationSource, boundary: &str) -> Result<Vec<Location>> {
    let polygon = Polygon::parse(boundary)?;
    let all = source.fetch_all_locations().await?;
    let total = all.len();
    let matches = locations_within(&polygon, all);
    debug!(total, matched = matches.len(), "area search complete");
    Ok(matches)
}
