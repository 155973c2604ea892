//! EV booking CLI
//!
//! Loads a seed file into the in-memory store and runs one search, quote or
//! booking against it. Results are printed as JSON.
//!
//! ```sh
//! # Stations within 2 km of Notre-Dame
//! ev-booking --data demos/paris.toml nearby --lat 48.853 --lon 2.3499 --radius 2000
//!
//! # Free stations in Paris on the evening of 2 June 2025
//! ev-booking --data demos/paris.toml available --city Paris \
//!     --from 2025-06-02T19:00:00 --to 2025-06-02T21:00:00
//!
//! # Validate config and seed without running anything
//! ev-booking --data demos/paris.toml check
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use ev_booking::application::{BillingService, BookingService, StationSearchService};
use ev_booking::config::AppConfig;
use ev_booking::domain::{GeoPoint, RepositoryProvider};
use ev_booking::{init_tracing, InMemoryStore, SeedData};

#[derive(Parser, Debug)]
#[command(
    name = "ev-booking",
    version,
    about = "Search, price and book EV charging stations",
    long_about = "Runs availability searches, tariff quotes and bookings against \
                  stations loaded from a TOML seed file.\n\n\
                  Default config: ~/.config/ev-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "EV_BOOKING_CONFIG")]
    config: Option<PathBuf>,

    /// Seed file with sites, addresses, stations, tariffs and reservations.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stations within a radius of a point, optionally free during a window.
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Radius in metres; defaults to `search.default_radius_m`.
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long, requires = "to")]
        from: Option<NaiveDateTime>,
        #[arg(long, requires = "from")]
        to: Option<NaiveDateTime>,
    },
    /// Stations in a city free during a window.
    Available {
        #[arg(long)]
        city: String,
        #[arg(long)]
        from: NaiveDateTime,
        #[arg(long)]
        to: NaiveDateTime,
    },
    /// Price a window on a station.
    Quote {
        #[arg(long)]
        station: i64,
        #[arg(long)]
        from: NaiveDateTime,
        #[arg(long)]
        to: NaiveDateTime,
    },
    /// Reserve a station for a user.
    Book {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        station: i64,
        #[arg(long)]
        from: NaiveDateTime,
        #[arg(long)]
        to: NaiveDateTime,
    },
    /// Validate the configuration and seed files, then exit.
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ──────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(ev_booking::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if cli.config.is_some() => return Err(e.into()),
        Err(_) => AppConfig::default(),
    };
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);
    info!("Configuration: {}", config_path.display());

    // ── Load seed data ──────────────────────────────────────────
    let store = Arc::new(InMemoryStore::new(config.tariffs.reject_overlapping_windows));
    if let Some(ref path) = cli.data {
        let seed = SeedData::load(path).map_err(|e| {
            error!("Failed to load seed from {}: {}", path.display(), e);
            e
        })?;
        seed.apply(store.as_ref()).await?;
    }
    let repos: Arc<dyn RepositoryProvider> = store;

    // ── Run command ─────────────────────────────────────────────
    match cli.command {
        Command::Nearby {
            lat,
            lon,
            radius,
            from,
            to,
        } => {
            let search = StationSearchService::new(repos, &config.search);
            let origin = GeoPoint::new(lat, lon);
            let stations = match (from, to) {
                (Some(from), Some(to)) => search.available_nearby(origin, radius, from, to).await?,
                _ => search.nearby(origin, radius).await?,
            };
            print_json(&stations)?;
        }
        Command::Available { city, from, to } => {
            let search = StationSearchService::new(repos, &config.search);
            print_json(&search.available_in_city(&city, from, to).await?)?;
        }
        Command::Quote { station, from, to } => {
            let billing = BillingService::new(repos, &config.billing);
            print_json(&billing.quote(station, from, to).await?)?;
        }
        Command::Book {
            user,
            station,
            from,
            to,
        } => {
            let booking = BookingService::new(repos, &config.billing);
            print_json(&booking.book(user, station, from, to).await?)?;
        }
        Command::Check => {
            let stations = repos.stations().find_all().await?;
            println!("Configuration is valid");
            println!("   Config file : {}", config_path.display());
            println!("   Log level   : {}", config.logging.level);
            println!(
                "   Billing     : {} (scale {})",
                config.billing.currency, config.billing.minor_unit_scale
            );
            println!("   Stations    : {}", stations.len());
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
