pub mod services;

// Re-export key types for convenience
pub use services::{BillingService, BookingService, CitySnapshot, Quote, StationSearchService};
