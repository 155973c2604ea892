//! Which stations are free during a window
//!
//! Walks the city's addresses to their sites and stations, then checks each
//! station's slot-blocking reservations against the window.

use tracing::debug;

use crate::domain::ports::{SiteLookup, StationLookup};
use crate::domain::reservation::{is_available, Reservation};
use crate::domain::station::{nearby, GeoPoint, Station};
use crate::domain::window::TimeWindow;

/// Stations in `city` with no blocking reservation overlapping `window`.
///
/// Addresses without a site, or pointing at a missing site, are skipped. A
/// station reachable through several addresses appears once per address.
pub fn find_available(
    city: &str,
    window: &TimeWindow,
    sites: &dyn SiteLookup,
    stations: &dyn StationLookup,
) -> Vec<Station> {
    let mut available = Vec::new();

    for address in sites.addresses_in_city(city) {
        let Some(site) = address.site_id.and_then(|id| sites.site(id)) else {
            debug!(address_id = address.id, "Address has no site, skipped");
            continue;
        };

        for station in stations.stations_for_site(site.id) {
            if station_is_free(&station, window, stations) {
                available.push(station);
            }
        }
    }

    available
}

/// Candidates within `radius_m` of `origin` that are free during `window`.
pub fn find_available_nearby(
    candidates: &[Station],
    origin: GeoPoint,
    radius_m: f64,
    window: &TimeWindow,
    stations: &dyn StationLookup,
) -> Vec<Station> {
    nearby(candidates, origin, radius_m)
        .into_iter()
        .filter(|station| station_is_free(station, window, stations))
        .cloned()
        .collect()
}

fn station_is_free(station: &Station, window: &TimeWindow, stations: &dyn StationLookup) -> bool {
    let blocking: Vec<Reservation> = stations
        .reservations_for_station(station.id)
        .into_iter()
        .filter(Reservation::blocks_slot)
        .collect();
    is_available(&blocking, window)
}

// ── Tests ──────────────────────────────────────────────────────
