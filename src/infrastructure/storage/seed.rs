//! TOML seed files
//!
//! Loads sites, addresses, stations, tariff windows and reservations into a
//! `RepositoryProvider`. Dates, times and decimals are written as quoted
//! strings (`"2025-06-02T10:00:00"`, `"18:00:00"`, `"0.004167"`).

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::domain::site::{Address, Site};
use crate::domain::station::{Coordinate, Station, StationStatus};
use crate::domain::tariff::{DailyRange, TariffWindow};
use crate::domain::{RepositoryProvider, TimeWindow};
use crate::shared::SeedError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub sites: Vec<Site>,
    pub addresses: Vec<Address>,
    pub stations: Vec<StationSeed>,
    pub tariffs: Vec<TariffSeed>,
    pub reservations: Vec<ReservationSeed>,
}

#[derive(Debug, Deserialize)]
pub struct StationSeed {
    pub id: i64,
    pub name: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub power_kw: Decimal,
    #[serde(default)]
    pub status: StationStatus,
    #[serde(default)]
    pub occupied: bool,
    #[serde(default = "default_true")]
    pub free_standing: bool,
    #[serde(default)]
    pub instructions: Option<String>,
    pub site_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct TariffSeed {
    pub id: i64,
    pub station_id: i64,
    pub rate_per_minute: Decimal,
    pub valid_from: NaiveDate,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReservationSeed {
    pub id: i64,
    pub station_id: i64,
    pub user_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default = "default_status")]
    pub status: ReservationStatus,
    #[serde(default)]
    pub rate_per_minute: Decimal,
    #[serde(default)]
    pub total_cost: Decimal,
}

fn default_true() -> bool {
    true
}

fn default_status() -> ReservationStatus {
    ReservationStatus::Requested
}

impl StationSeed {
    fn into_station(self) -> Result<Station, SeedError> {
        let coordinate = Coordinate::new(self.latitude, self.longitude)?;
        let mut station = Station::new(self.id, self.name, coordinate, self.power_kw, self.site_id);
        station.status = self.status;
        station.occupied = self.occupied;
        station.free_standing = self.free_standing;
        station.instructions = self.instructions;
        Ok(station)
    }
}

impl From<TariffSeed> for TariffWindow {
    fn from(seed: TariffSeed) -> Self {
        TariffWindow {
            id: seed.id,
            station_id: seed.station_id,
            rate_per_minute: seed.rate_per_minute,
            valid_from: seed.valid_from,
            valid_until: seed.valid_until,
            daily: DailyRange::new(seed.start, seed.end),
            active: seed.active,
        }
    }
}

impl ReservationSeed {
    fn into_reservation(self) -> Result<Reservation, SeedError> {
        let window = TimeWindow::new(self.start, self.end).map_err(crate::domain::DomainError::from)?;
        let mut reservation = Reservation::new(
            self.id,
            self.station_id,
            self.user_id,
            window,
            self.rate_per_minute,
            self.total_cost,
        );
        reservation.status = self.status;
        Ok(reservation)
    }
}

impl SeedData {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(content)?)
    }

    /// Write everything into `repos`. Stops at the first rejected record.
    pub async fn apply(self, repos: &dyn RepositoryProvider) -> Result<(), SeedError> {
        let counts = (
            self.sites.len(),
            self.addresses.len(),
            self.stations.len(),
            self.tariffs.len(),
            self.reservations.len(),
        );

        for site in self.sites {
            repos.sites().save(site).await?;
        }
        for address in self.addresses {
            repos.addresses().save(address).await?;
        }
        for station in self.stations {
            repos.stations().save(station.into_station()?).await?;
        }
        for tariff in self.tariffs {
            repos.tariffs().save(tariff.into()).await?;
        }
        for reservation in self.reservations {
            repos
                .reservations()
                .insert_if_available(reservation.into_reservation()?)
                .await?;
        }

        info!(
            sites = counts.0,
            addresses = counts.1,
            stations = counts.2,
            tariffs = counts.3,
            reservations = counts.4,
            "Seed data loaded"
        );
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
