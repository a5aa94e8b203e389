//! Error types for geokeep operations.

use thiserror::Error;

/// Result type alias using geokeep's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type.
///
/// Parse and validation failures surface before any geometry or database
/// work; repository failures pass through unreinterpreted as
/// [`Error::Database`].
#[derive(Error, Debug)]
pub enum Error {
    /// Polygon construction or boundary parsing failed.
    #[error("geometry error: {0}")]
    Geometry(#[from] geokeep_types::GeoError),

    /// Database operation failed (wraps sqlx::Error).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A location with the same name already exists.
    #[error("location with name '{0}' already exists")]
    DuplicateName(String),

    /// Invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}
