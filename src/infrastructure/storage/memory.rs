//! In-memory storage implementation
//!
//! `DashMap`-backed repositories. Reservations and tariffs are grouped per
//! station so that a station's entry lock covers check-then-write sequences.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;

use crate::domain::ports::{SiteLookup, StationLookup, TariffLookup};
use crate::domain::reservation::{conflicts, Reservation, ReservationRepository, ReservationStatus};
use crate::domain::site::{Address, AddressRepository, Site, SiteRepository};
use crate::domain::station::{Station, StationRepository};
use crate::domain::tariff::{ensure_no_overlap, TariffRepository, TariffWindow};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

// ── Stations ────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryStationRepository {
    stations: DashMap<i64, Station>,
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn save(&self, station: Station) -> DomainResult<()> {
        debug!("Saving station: {}", station.id);
        self.stations.insert(station.id, station);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Station>> {
        Ok(self.stations.get(&id).map(|s| s.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Station>> {
        let mut all: Vec<Station> = self.stations.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|s| s.id);
        Ok(all)
    }

    async fn find_by_site(&self, site_id: i64) -> DomainResult<Vec<Station>> {
        Ok(self.by_site(site_id))
    }
}

impl InMemoryStationRepository {
    fn by_site(&self, site_id: i64) -> Vec<Station> {
        let mut found: Vec<Station> = self
            .stations
            .iter()
            .filter(|e| e.site_id == site_id)
            .map(|e| e.value().clone())
            .collect();
        found.sort_by_key(|s| s.id);
        found
    }
}

// ── Sites & addresses ───────────────────────────────────────────

#[derive(Default)]
pub struct InMemorySiteRepository {
    sites: DashMap<i64, Site>,
}

#[async_trait]
impl SiteRepository for InMemorySiteRepository {
    async fn save(&self, site: Site) -> DomainResult<()> {
        debug!("Saving site: {}", site.id);
        self.sites.insert(site.id, site);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Site>> {
        Ok(self.sites.get(&id).map(|s| s.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryAddressRepository {
    addresses: DashMap<i64, Address>,
}

impl InMemoryAddressRepository {
    fn in_city(&self, city: &str) -> Vec<Address> {
        let mut found: Vec<Address> = self
            .addresses
            .iter()
            .filter(|e| e.is_in_city(city))
            .map(|e| e.value().clone())
            .collect();
        found.sort_by_key(|a| a.id);
        found
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn save(&self, address: Address) -> DomainResult<()> {
        debug!("Saving address: {}", address.id);
        self.addresses.insert(address.id, address);
        Ok(())
    }

    async fn find_by_city(&self, city: &str) -> DomainResult<Vec<Address>> {
        Ok(self.in_city(city))
    }
}

// ── Reservations ────────────────────────────────────────────────

pub struct InMemoryReservationRepository {
    by_station: DashMap<i64, Vec<Reservation>>,
    /// reservation id → station id
    index: DashMap<i64, i64>,
    counter: AtomicI64,
}

impl Default for InMemoryReservationRepository {
    fn default() -> Self {
        Self {
            by_station: DashMap::new(),
            index: DashMap::new(),
            counter: AtomicI64::new(1),
        }
    }
}

impl InMemoryReservationRepository {
    fn for_station(&self, station_id: i64) -> Vec<Reservation> {
        self.by_station
            .get(&station_id)
            .map(|list| list.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn insert_if_available(&self, reservation: Reservation) -> DomainResult<()> {
        // Claim the id first; no other insert can take it from here on.
        // An `index` guard is never held while a station entry is locked.
        match self.index.entry(reservation.id) {
            Entry::Occupied(_) => {
                return Err(DomainError::Conflict(format!(
                    "reservation {} already exists",
                    reservation.id
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(reservation.station_id);
            }
        }

        // The entry guard locks this station's shard until the push below.
        let mut list = self.by_station.entry(reservation.station_id).or_default();
        let clashing: Vec<i64> = if reservation.blocks_slot() {
            conflicts(list.as_slice(), &reservation.window)
                .filter(|r| r.blocks_slot())
                .map(|r| r.id)
                .collect()
        } else {
            Vec::new()
        };

        if !clashing.is_empty() {
            debug!(
                "Reservation {} rejected on station {}: overlaps {:?}",
                reservation.id, reservation.station_id, clashing
            );
            drop(list);
            self.index.remove(&reservation.id);
            return Err(DomainError::Conflict(format!(
                "station {} is already booked between {} and {} (reservations {:?})",
                reservation.station_id,
                reservation.start(),
                reservation.end(),
                clashing
            )));
        }

        debug!("Saving reservation: {}", reservation.id);
        self.counter.fetch_max(reservation.id + 1, Ordering::SeqCst);
        list.push(reservation);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>> {
        let station_id = match self.index.get(&id) {
            Some(entry) => *entry,
            None => return Ok(None),
        };
        Ok(self
            .by_station
            .get(&station_id)
            .and_then(|list| list.iter().find(|r| r.id == id).cloned()))
    }

    async fn find_for_station(&self, station_id: i64) -> DomainResult<Vec<Reservation>> {
        Ok(self.for_station(station_id))
    }

    async fn transition(&self, id: i64, next: ReservationStatus) -> DomainResult<Reservation> {
        let not_found = || DomainError::not_found("Reservation", "id", id);
        let station_id = match self.index.get(&id) {
            Some(entry) => *entry,
            None => return Err(not_found()),
        };

        // Held until the status is written; Refused and Cancelled are final,
        // so a transition never re-takes a released slot.
        let mut list = self.by_station.get_mut(&station_id).ok_or_else(not_found)?;
        let stored = list.iter_mut().find(|r| r.id == id).ok_or_else(not_found)?;
        stored.transition(next)?;

        debug!("Reservation {} is now {}", id, next);
        Ok(stored.clone())
    }

    async fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}

// ── Tariffs ─────────────────────────────────────────────────────

pub struct InMemoryTariffRepository {
    by_station: DashMap<i64, Vec<TariffWindow>>,
    reject_overlaps: bool,
}

impl InMemoryTariffRepository {
    pub fn new(reject_overlaps: bool) -> Self {
        Self {
            by_station: DashMap::new(),
            reject_overlaps,
        }
    }

    fn for_station(&self, station_id: i64) -> Vec<TariffWindow> {
        self.by_station
            .get(&station_id)
            .map(|list| list.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TariffRepository for InMemoryTariffRepository {
    async fn save(&self, window: TariffWindow) -> DomainResult<()> {
        let mut list = self.by_station.entry(window.station_id).or_default();
        if self.reject_overlaps {
            ensure_no_overlap(&window, list.as_slice())?;
        }

        debug!("Saving tariff window: {}", window.id);
        match list.iter_mut().find(|w| w.id == window.id) {
            Some(existing) => *existing = window,
            None => list.push(window),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TariffWindow>> {
        Ok(self
            .by_station
            .iter()
            .find_map(|list| list.iter().find(|w| w.id == id).cloned()))
    }

    async fn find_for_station(&self, station_id: i64) -> DomainResult<Vec<TariffWindow>> {
        Ok(self.for_station(station_id))
    }
}

// ── Provider ────────────────────────────────────────────────────

/// In-memory storage for development and testing.
///
/// Also serves the engine's lookup ports directly, without going through the
/// async repositories.
pub struct InMemoryStore {
    stations: InMemoryStationRepository,
    sites: InMemorySiteRepository,
    addresses: InMemoryAddressRepository,
    reservations: InMemoryReservationRepository,
    tariffs: InMemoryTariffRepository,
}

impl InMemoryStore {
    pub fn new(reject_overlapping_tariffs: bool) -> Self {
        Self {
            stations: InMemoryStationRepository::default(),
            sites: InMemorySiteRepository::default(),
            addresses: InMemoryAddressRepository::default(),
            reservations: InMemoryReservationRepository::default(),
            tariffs: InMemoryTariffRepository::new(reject_overlapping_tariffs),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RepositoryProvider for InMemoryStore {
    fn stations(&self) -> &dyn StationRepository {
        &self.stations
    }

    fn sites(&self) -> &dyn SiteRepository {
        &self.sites
    }

    fn addresses(&self) -> &dyn AddressRepository {
        &self.addresses
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn tariffs(&self) -> &dyn TariffRepository {
        &self.tariffs
    }
}

impl SiteLookup for InMemoryStore {
    fn addresses_in_city(&self, city: &str) -> Vec<Address> {
        self.addresses.in_city(city)
    }

    fn site(&self, site_id: i64) -> Option<Site> {
        self.sites.sites.get(&site_id).map(|s| s.clone())
    }
}

impl StationLookup for InMemoryStore {
    fn stations_for_site(&self, site_id: i64) -> Vec<Station> {
        self.stations.by_site(site_id)
    }

    fn reservations_for_station(&self, station_id: i64) -> Vec<Reservation> {
        self.reservations.for_station(station_id)
    }
}

impl TariffLookup for InMemoryStore {
    fn tariffs_for_station(&self, station_id: i64) -> Vec<TariffWindow> {
        self.tariffs.for_station(station_id)
    }
}

// ── Tests ──────────────────────────────────────────────────────
