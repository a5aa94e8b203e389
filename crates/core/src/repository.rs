//! The read-only record source consumed by the query engine.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Location;

/// Narrow read-only contract between the query engine and the record store.
///
/// The engine only ever reads one snapshot per search call, so this trait is
/// all it knows about persistence. The snapshot must not be mutated mid-scan
/// for results to be deterministic; the PostgreSQL implementation satisfies
/// that by materializing the full result set before filtering begins.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Full snapshot of stored locations in stable (insertion) order.
    async fn fetch_all_locations(&self) -> Result<Vec<Location>>;

    /// A single location by id, `None` when absent.
    async fn fetch_location(&self, id: i32) -> Result<Option<Location>>;
}
