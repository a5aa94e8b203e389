//! Location repository over PostgreSQL.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use tracing::debug;

use geokeep_types::Coordinate;

use crate::error::{Error, Result};
use crate::models::{Location, NewLocation, Photo, UpdateLocation};
use crate::repository::LocationSource;

const SELECT_LOCATION: &str = "SELECT id, name, description, latitude, longitude FROM locations";

/// PostgreSQL implementation of the location store.
///
/// Owns the CRUD surface and implements [`LocationSource`] so the query
/// engine can consume it without knowing about SQL.
pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a location. Names are unique and must be non-empty.
    pub async fn create(&self, new: NewLocation) -> Result<Location> {
        if new.name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "location name must not be empty".to_string(),
            ));
        }
        if self.get_by_name(&new.name).await?.is_some() {
            return Err(Error::DuplicateName(new.name));
        }

        let sql = "INSERT INTO locations (name, description, latitude, longitude) \
                   VALUES ($1, $2, $3, $4) RETURNING id";
        let row = sqlx::query(sql)
            .bind(&new.name)
            .bind(&new.description)
            .bind(new.coordinate.latitude)
            .bind(new.coordinate.longitude)
            .fetch_one(&self.pool)
            .await?;
        let id: i32 = row.try_get("id")?;

        debug!(id, name = %new.name, "location created");
        Ok(Location {
            id,
            name: new.name,
            description: new.description,
            coordinate: new.coordinate,
            photos: Vec::new(),
        })
    }

    /// Fetch a location by id, photos included.
    pub async fn get(&self, id: i32) -> Result<Option<Location>> {
        let sql = format!("{SELECT_LOCATION} WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    /// Fetch a location by name, photos included.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Location>> {
        let sql = format!("{SELECT_LOCATION} WHERE name = $1");
        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    /// Apply a partial update; returns `None` when the id does not exist.
    ///
    /// Renaming re-checks name uniqueness against other rows.
    pub async fn update(&self, id: i32, update: UpdateLocation) -> Result<Option<Location>> {
        let Some(mut location) = self.get(id).await? else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(Error::InvalidInput(
                    "location name must not be empty".to_string(),
                ));
            }
            if name != location.name && self.get_by_name(&name).await?.is_some() {
                return Err(Error::DuplicateName(name));
            }
            location.name = name;
        }
        if let Some(description) = update.description {
            location.description = Some(description);
        }
        if let Some(coordinate) = update.coordinate {
            location.coordinate = coordinate;
        }

        sqlx::query(
            "UPDATE locations SET name = $1, description = $2, latitude = $3, longitude = $4 \
             WHERE id = $5",
        )
        .bind(&location.name)
        .bind(&location.description)
        .bind(location.coordinate.latitude)
        .bind(location.coordinate.longitude)
        .bind(id)
        .execute(&self.pool)
        .await?;

        debug!(id, "location updated");
        Ok(Some(location))
    }

    /// Delete a location and its photos; false when the id does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        sqlx::query("DELETE FROM photos WHERE location_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(id, "location deleted");
        }
        Ok(deleted)
    }

    /// Full snapshot in insertion order.
    pub async fn list(&self) -> Result<Vec<Location>> {
        let sql = format!("{SELECT_LOCATION} ORDER BY id");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(location_from_row).collect()
    }

    /// Attach a photo to an existing location.
    pub async fn attach_photo(&self, location_id: i32, filename: &str) -> Result<Photo> {
        let row = sqlx::query(
            "INSERT INTO photos (filename, location_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(filename)
        .bind(location_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(Photo {
            id: row.try_get("id")?,
            filename: filename.to_string(),
            location_id,
        })
    }

    /// Photos for one location, in attachment order.
    pub async fn photos_for(&self, location_id: i32) -> Result<Vec<Photo>> {
        let rows = sqlx::query(
            "SELECT id, filename, location_id FROM photos WHERE location_id = $1 ORDER BY id",
        )
        .bind(location_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| {
                Ok(Photo {
                    id: row.try_get("id")?,
                    filename: row.try_get("filename")?,
                    location_id: row.try_get("location_id")?,
                })
            })
            .collect()
    }

    async fn hydrate(&self, row: PgRow) -> Result<Location> {
        let mut location = location_from_row(row)?;
        location.photos = self.photos_for(location.id).await?;
        Ok(location)
    }
}

fn location_from_row(row: PgRow) -> Result<Location> {
    Ok(Location {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        coordinate: Coordinate::new(row.try_get("latitude")?, row.try_get("longitude")?),
        photos: Vec::new(),
    })
}

#[async_trait]
impl LocationSource for PgLocationRepository {
    async fn fetch_all_locations(&self) -> Result<Vec<Location>> {
        self.list().await
    }

    async fn fetch_location(&self, id: i32) -> Result<Option<Location>> {
        self.get(id).await
    }
}
