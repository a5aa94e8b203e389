//! Repository tests against a live PostgreSQL server.
//!
//! Ignored by default; run with `--ignored` and a `DATABASE_URL` pointing at
//! a scratch database.

use std::time::{SystemTime, UNIX_EPOCH};

use geokeep::{
    connect, run_migrations, search_area, Coordinate, DatabaseConfig, Error, NewLocation,
    PgLocationRepository, UpdateLocation,
};

async fn repository() -> PgLocationRepository {
    let config = DatabaseConfig::from_env().expect("database configuration");
    let pool = connect(&config).await.expect("database connection");
    run_migrations(&pool).await.expect("migrations");
    PgLocationRepository::new(pool)
}

/// Names are globally unique in the schema, so each test run salts its own.
fn unique(name: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_nanos();
    format!("{name}-{nanos}")
}

fn new_location(name: &str, latitude: f64, longitude: f64) -> NewLocation {
    NewLocation {
        name: name.to_string(),
        description: None,
        coordinate: Coordinate::new(latitude, longitude),
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn create_and_fetch_location() {
    let repo = repository().await;
    let name = unique("Test Location");

    let created = repo
        .create(NewLocation {
            name: name.clone(),
            description: Some("A test location in NYC".to_string()),
            coordinate: Coordinate::new(40.7128, -74.0060),
        })
        .await
        .unwrap();

    let fetched = repo.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, name);
    assert_eq!(fetched.coordinate, Coordinate::new(40.7128, -74.0060));
    assert_eq!(fetched.description.as_deref(), Some("A test location in NYC"));

    repo.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn fetch_by_name() {
    let repo = repository().await;
    let name = unique("Eiffel Tower");

    let created = repo
        .create(new_location(&name, 48.8584, 2.2945))
        .await
        .unwrap();

    let fetched = repo.get_by_name(&name).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert!(fetched.description.is_none());

    assert!(repo.get_by_name("no such place").await.unwrap().is_none());

    repo.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn duplicate_name_is_rejected() {
    let repo = repository().await;
    let name = unique("Unique Location");

    let created = repo.create(new_location(&name, 40.0, -70.0)).await.unwrap();
    let err = repo
        .create(new_location(&name, 50.0, -80.0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateName(ref n) if *n == name));

    repo.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn empty_name_is_rejected() {
    let repo = repository().await;
    let err = repo.create(new_location("   ", 0.0, 0.0)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn partial_update() {
    let repo = repository().await;
    let name = unique("Old Name");

    let created = repo.create(new_location(&name, 1.0, 2.0)).await.unwrap();

    let renamed = unique("New Name");
    let updated = repo
        .update(
            created.id,
            UpdateLocation {
                name: Some(renamed.clone()),
                description: Some("fresh".to_string()),
                coordinate: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, renamed);
    assert_eq!(updated.description.as_deref(), Some("fresh"));
    // Untouched field survives.
    assert_eq!(updated.coordinate, Coordinate::new(1.0, 2.0));

    assert!(repo
        .update(i32::MAX, UpdateLocation::default())
        .await
        .unwrap()
        .is_none());

    repo.delete(created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn delete_reports_absence() {
    let repo = repository().await;
    let created = repo
        .create(new_location(&unique("Doomed"), 0.0, 0.0))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn photos_attach_and_load() {
    let repo = repository().await;
    let created = repo
        .create(new_location(&unique("Photogenic"), 10.0, 10.0))
        .await
        .unwrap();

    repo.attach_photo(created.id, "front.jpg").await.unwrap();
    repo.attach_photo(created.id, "back.jpg").await.unwrap();

    let fetched = repo.get(created.id).await.unwrap().unwrap();
    let filenames: Vec<&str> = fetched.photos.iter().map(|p| p.filename.as_str()).collect();
    assert_eq!(filenames, vec!["front.jpg", "back.jpg"]);

    repo.delete(created.id).await.unwrap();
    assert!(repo.photos_for(created.id).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn area_search_through_repository() {
    let repo = repository().await;
    let inside = repo
        .create(new_location(&unique("Inside"), 40.75, -73.95))
        .await
        .unwrap();
    let outside = repo
        .create(new_location(&unique("Outside"), 41.0, -74.5))
        .await
        .unwrap();

    let matches = search_area(&repo, "40.7,-74.0 40.8,-74.0 40.8,-73.9 40.7,-73.9")
        .await
        .unwrap();
    let ids: Vec<i32> = matches.iter().map(|l| l.id).collect();
    assert!(ids.contains(&inside.id));
    assert!(!ids.contains(&outside.id));

    repo.delete(inside.id).await.unwrap();
    repo.delete(outside.id).await.unwrap();
}
