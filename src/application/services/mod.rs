//! Application services

mod billing;
mod booking;
mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use billing::{BillingService, Quote};
pub use booking::BookingService;
pub use search::{CitySnapshot, StationSearchService};
