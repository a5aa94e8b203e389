//! Command-line surface for the geokeep location catalog.

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use geokeep::{
    connect, run_migrations, search_area, Coordinate, DatabaseConfig, Location, NewLocation,
    PgLocationRepository,
};

#[derive(Parser, Debug)]
#[command(name = "geokeep", version, about = "Manage geospatial locations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize the database schema
    InitDb,
    /// Add a new location
    Add {
        /// Location name (must be unique)
        #[arg(long)]
        name: String,
        /// Location description
        #[arg(long)]
        description: Option<String>,
        /// Latitude coordinate
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        /// Longitude coordinate
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
    },
    /// List all locations
    List {
        /// Emit JSON instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },
    /// Get a location by id or name
    Get {
        #[command(flatten)]
        selector: Selector,
        /// Emit JSON instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },
    /// Search locations within a polygon area
    SearchArea {
        /// Whitespace-separated coordinate pairs in `lat,lon` format,
        /// e.g. "40.7,-74.0 40.8,-74.0 40.8,-73.9 40.7,-73.9"
        points: String,
        /// Emit JSON instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Selector {
    /// Location id
    #[arg(long)]
    id: Option<i32>,
    /// Location name
    #[arg(long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geokeep=warn,geokeep_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = DatabaseConfig::from_env()?;
    let pool = connect(&config).await?;
    let repo = PgLocationRepository::new(pool.clone());

    match cli.command {
        Command::InitDb => {
            run_migrations(&pool).await?;
            println!("Database initialized successfully.");
        }
        Command::Add {
            name,
            description,
            latitude,
            longitude,
        } => {
            let location = repo
                .create(NewLocation {
                    name,
                    description,
                    coordinate: Coordinate::new(latitude, longitude),
                })
                .await?;
            println!(
                "Location created: {} (id {}, {})",
                location.name, location.id, location.coordinate
            );
        }
        Command::List { json } => {
            let locations = repo.list().await?;
            debug!(count = locations.len(), "listed locations");
            print_locations(&locations, json, "No locations found.")?;
        }
        Command::Get { selector, json } => {
            let location = match (selector.id, &selector.name) {
                (Some(id), None) => repo.get(id).await?,
                (None, Some(name)) => repo.get_by_name(name).await?,
                _ => unreachable!("clap enforces exactly one selector"),
            };
            let Some(location) = location else {
                bail!("Location not found.");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&location)?);
            } else {
                print_location_details(&location);
            }
        }
        Command::SearchArea { points, json } => {
            let matches = search_area(&repo, &points).await?;
            print_locations(
                &matches,
                json,
                "No locations found within the specified polygon area.",
            )?;
        }
    }
    Ok(())
}

fn print_locations(locations: &[Location], json: bool, empty_message: &str) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(locations)?);
        return Ok(());
    }
    if locations.is_empty() {
        println!("{empty_message}");
        return Ok(());
    }
    println!("Found {} location(s):\n", locations.len());
    for location in locations {
        println!(
            "ID: {} | Name: {} | Lat: {}, Lon: {}",
            location.id,
            location.name,
            location.coordinate.latitude,
            location.coordinate.longitude
        );
        if let Some(description) = &location.description {
            println!("  Description: {description}");
        }
        println!();
    }
    Ok(())
}

fn print_location_details(location: &Location) {
    println!("Location found:");
    println!("  ID: {}", location.id);
    println!("  Name: {}", location.name);
    println!("  Latitude: {}", location.coordinate.latitude);
    println!("  Longitude: {}", location.coordinate.longitude);
    if let Some(description) = &location.description {
        println!("  Description: {description}");
    }
    if !location.photos.is_empty() {
        println!("  Photos: {}", location.photos.len());
        for photo in &location.photos {
            println!("    - {}", photo.filename);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_area_takes_positional_boundary() {
        let cli = Cli::try_parse_from(["geokeep", "search-area", "0,0 0,10 10,10 10,0"]).unwrap();
        match cli.command {
            Command::SearchArea { points, json } => {
                assert_eq!(points, "0,0 0,10 10,10 10,0");
                assert!(!json);
            }
            other => panic!("expected search-area, got {other:?}"),
        }
    }

    #[test]
    fn get_requires_exactly_one_selector() {
        assert!(Cli::try_parse_from(["geokeep", "get"]).is_err());
        assert!(Cli::try_parse_from(["geokeep", "get", "--id", "1", "--name", "x"]).is_err());
        assert!(Cli::try_parse_from(["geokeep", "get", "--id", "1"]).is_ok());
        assert!(Cli::try_parse_from(["geokeep", "get", "--name", "x"]).is_ok());
    }

    #[test]
    fn add_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "geokeep",
            "add",
            "--name",
            "NYC",
            "--latitude",
            "40.7128",
            "--longitude",
            "-74.0060",
        ])
        .unwrap();
        match cli.command {
            Command::Add {
                latitude,
                longitude,
                description,
                ..
            } => {
                assert_eq!(latitude, 40.7128);
                assert_eq!(longitude, -74.0060);
                assert!(description.is_none());
            }
            other => panic!("expected add, got {other:?}"),
        }
    }
}
