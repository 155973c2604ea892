//! Station search: proximity and availability

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::domain::ports::{SiteLookup, StationLookup};
use crate::domain::services::{find_available, find_available_nearby};
use crate::domain::station::nearby;
use crate::domain::{
    Address, DomainResult, GeoPoint, RepositoryProvider, Reservation, Site, Station, TimeWindow,
};

/// Everything a city search reads, loaded up front through the repositories.
#[derive(Debug, Default)]
pub struct CitySnapshot {
    addresses: Vec<Address>,
    sites: HashMap<i64, Site>,
    stations: HashMap<i64, Vec<Station>>,
    reservations: HashMap<i64, Vec<Reservation>>,
}

impl CitySnapshot {
    pub async fn load(repos: &dyn RepositoryProvider, city: &str) -> DomainResult<Self> {
        let mut snapshot = Self {
            addresses: repos.addresses().find_by_city(city).await?,
            ..Self::default()
        };

        let site_ids: Vec<i64> = snapshot.addresses.iter().filter_map(|a| a.site_id).collect();
        for site_id in site_ids {
            if snapshot.sites.contains_key(&site_id) {
                continue;
            }
            let Some(site) = repos.sites().find_by_id(site_id).await? else {
                continue;
            };
            let stations = repos.stations().find_by_site(site_id).await?;
            snapshot.load_reservations(repos, &stations).await?;
            snapshot.sites.insert(site_id, site);
            snapshot.stations.insert(site_id, stations);
        }

        debug!(
            city,
            addresses = snapshot.addresses.len(),
            sites = snapshot.sites.len(),
            "City snapshot loaded"
        );
        Ok(snapshot)
    }

    async fn load_reservations(
        &mut self,
        repos: &dyn RepositoryProvider,
        stations: &[Station],
    ) -> DomainResult<()> {
        for station in stations {
            let reservations = repos.reservations().find_for_station(station.id).await?;
            self.reservations.insert(station.id, reservations);
        }
        Ok(())
    }
}

impl SiteLookup for CitySnapshot {
    fn addresses_in_city(&self, city: &str) -> Vec<Address> {
        self.addresses
            .iter()
            .filter(|a| a.is_in_city(city))
            .cloned()
            .collect()
    }

    fn site(&self, site_id: i64) -> Option<Site> {
        self.sites.get(&site_id).cloned()
    }
}

impl StationLookup for CitySnapshot {
    fn stations_for_site(&self, site_id: i64) -> Vec<Station> {
        self.stations.get(&site_id).cloned().unwrap_or_default()
    }

    fn reservations_for_station(&self, station_id: i64) -> Vec<Reservation> {
        self.reservations.get(&station_id).cloned().unwrap_or_default()
    }
}

/// Service for station searches
pub struct StationSearchService {
    repos: Arc<dyn RepositoryProvider>,
    default_radius_m: f64,
}

impl StationSearchService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, config: &SearchConfig) -> Self {
        Self {
            repos,
            default_radius_m: config.default_radius_m,
        }
    }

    /// Stations within `radius_m` (or the configured default) of `origin`.
    pub async fn nearby(&self, origin: GeoPoint, radius_m: Option<f64>) -> DomainResult<Vec<Station>> {
        let radius_m = radius_m.unwrap_or(self.default_radius_m);
        let stations = self.repos.stations().find_all().await?;
        let found: Vec<Station> = nearby(&stations, origin, radius_m).into_iter().cloned().collect();

        info!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            radius_m,
            found = found.len(),
            "Nearby search"
        );
        Ok(found)
    }

    /// Stations in `city` free during `[start, end)`.
    pub async fn available_in_city(
        &self,
        city: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DomainResult<Vec<Station>> {
        let window = TimeWindow::new(start, end)?;
        let snapshot = CitySnapshot::load(self.repos.as_ref(), city).await?;
        let found = find_available(city, &window, &snapshot, &snapshot);

        info!(city, %start, %end, found = found.len(), "Availability search");
        Ok(found)
    }

    /// Stations near `origin` free during `[start, end)`.
    pub async fn available_nearby(
        &self,
        origin: GeoPoint,
        radius_m: Option<f64>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DomainResult<Vec<Station>> {
        let window = TimeWindow::new(start, end)?;
        let radius_m = radius_m.unwrap_or(self.default_radius_m);
        let candidates = self.repos.stations().find_all().await?;
        let in_range: Vec<Station> = nearby(&candidates, origin, radius_m).into_iter().cloned().collect();

        let mut snapshot = CitySnapshot::default();
        snapshot.load_reservations(self.repos.as_ref(), &in_range).await?;
        let found = find_available_nearby(&in_range, origin, radius_m, &window, &snapshot);

        info!(radius_m, %start, %end, found = found.len(), "Nearby availability search");
        Ok(found)
    }
}

// ── Tests ──────────────────────────────────────────────────────
