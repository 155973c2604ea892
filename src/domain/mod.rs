pub mod error;
pub mod ports;
pub mod repositories;
pub mod reservation;
pub mod services;
pub mod site;
pub mod station;
pub mod tariff;
pub mod window;

// Re-export commonly used types
pub use error::{EngineError, EngineResult};
pub use reservation::{Reservation, ReservationStatus};
pub use repositories::{DomainResult, RepositoryProvider};
pub use site::{Address, Site};
pub use station::{Coordinate, GeoPoint, Station, StationStatus};
pub use tariff::{CostBreakdown, CostSegment, DailyRange, TariffMatch, TariffWindow};
pub use window::TimeWindow;

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
