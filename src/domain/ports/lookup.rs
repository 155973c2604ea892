use crate::domain::reservation::Reservation;
use crate::domain::site::{Address, Site};
use crate::domain::station::Station;
use crate::domain::tariff::TariffWindow;

/// City-based access to addresses and the sites behind them
pub trait SiteLookup {
    fn addresses_in_city(&self, city: &str) -> Vec<Address>;

    fn site(&self, site_id: i64) -> Option<Site>;
}

/// Stations of a site and the reservations held against each station
pub trait StationLookup {
    fn stations_for_site(&self, site_id: i64) -> Vec<Station>;

    fn reservations_for_station(&self, station_id: i64) -> Vec<Reservation>;
}

/// Tariff windows configured on a station
pub trait TariffLookup {
    fn tariffs_for_station(&self, station_id: i64) -> Vec<TariffWindow>;
}
